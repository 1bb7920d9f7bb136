//! Per-frame simulation step
//!
//! Runs only while the phase is Playing and the game is not paused. Motion is
//! in pixels per frame; only the countdown uses the frame delta.

use super::collision::{
    WallContact, bounce_off_walls, brick_approach, brick_bounce, paddle_bounce,
};
use super::geometry::circle_rect_overlap;
use super::powerup::{roll_spawn, update_power_ups};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::*;

/// Advance the level by one frame
pub fn simulate(state: &mut GameState, input: &TickInput, dt: f32) {
    debug_assert_eq!(state.phase, GamePhase::Playing);

    // 1. Countdown
    state.timer -= dt;
    if state.timer <= 0.0 {
        state.push_event(GameEvent::TimerExpired);
        for ball in &mut state.balls {
            ball.active = false;
        }
        state.timer = state.timer_budget();
        if lose_life(state) {
            return;
        }
    }

    // 2. Paddle
    let mut dx = 0.0;
    if input.left {
        dx -= PADDLE_SPEED;
    }
    if input.right {
        dx += PADDLE_SPEED;
    }
    state.paddle.shift(dx);

    // 3. Balls
    for i in 0..state.balls.len() {
        update_ball(state, i);
    }

    // 4. Moving bricks
    move_bricks(state);

    // 5. Power-ups
    update_power_ups(state);

    debug_assert_eq!(state.active_bricks, state.count_active_bricks());

    // 6. Win
    if state.active_bricks == 0 {
        state.phase = GamePhase::YouWin;
        state.balls.retain(|b| b.active);
        state.push_event(GameEvent::LevelCleared { level: state.level });
        log::info!("Level {} cleared, score {}", state.level, state.score);
        return;
    }

    // 7. Loss
    state.balls.retain(|b| b.active);
    if state.balls.is_empty() {
        lose_life(state);
    }
}

/// Move one ball and resolve walls, paddle and at most one brick
fn update_ball(state: &mut GameState, index: usize) {
    let paddle = state.paddle.rect;
    let ball = &mut state.balls[index];
    if !ball.active {
        return;
    }

    ball.pos += ball.vel;

    if bounce_off_walls(ball) == WallContact::Bottom {
        ball.active = false;
        state.push_event(GameEvent::BallLost);
        return;
    }

    if ball.vel.y > 0.0 && circle_rect_overlap(ball.pos, ball.radius, &paddle) {
        paddle_bounce(ball, &paddle, &state.tuning, &mut state.rng);
    }

    // First overlapping brick the ball is closing on; a ball already moving
    // away from an overlapping brick does not hit it again
    let (pos, vel, radius) = (ball.pos, ball.vel, ball.radius);
    let Some(hit) = state.bricks.iter().position(|b| {
        b.active
            && circle_rect_overlap(pos, radius, &b.rect)
            && brick_approach(pos, vel, &b.rect).is_some()
    }) else {
        return;
    };

    let brick_rect = state.bricks[hit].rect;
    brick_bounce(&mut state.balls[index], &brick_rect, &mut state.rng);

    if state.bricks[hit].take_hit() {
        state.active_bricks -= 1;
        state.score += BRICK_POINTS;
        state.push_event(GameEvent::BrickDestroyed { index: hit });
        roll_spawn(state, brick_rect.center());
    } else {
        let remaining = state.bricks[hit].hits_required;
        state.push_event(GameEvent::BrickHit {
            index: hit,
            remaining,
        });
    }
}

/// Oscillate bricks with a nonzero speed, reversing at the field edges
fn move_bricks(state: &mut GameState) {
    for brick in state.bricks.iter_mut().filter(|b| b.active && b.move_speed != 0.0) {
        brick.rect.x += brick.move_speed;
        if brick.rect.x <= 0.0 {
            brick.rect.x = 0.0;
            brick.move_speed = brick.move_speed.abs();
        } else if brick.rect.right() >= FIELD_WIDTH {
            brick.rect.x = FIELD_WIDTH - brick.rect.width;
            brick.move_speed = -brick.move_speed.abs();
        }
    }
}

/// Take a life. Returns true when that ended the game.
fn lose_life(state: &mut GameState) -> bool {
    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver { score: state.score });
        log::info!("Game over at level {} with score {}", state.level, state.score);
        true
    } else {
        state.reset_ball_and_paddle();
        false
    }
}
