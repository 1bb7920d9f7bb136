//! Power-up spawning, falling, pickup and effects

use glam::Vec2;

use super::collision::enforce_min_speed_x;
use super::geometry::rect_overlap;
use super::state::{Ball, GameEvent, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Roll the drop chance for a destroyed brick and spawn at its center
pub fn roll_spawn(state: &mut GameState, center: Vec2) {
    if !state.rng.chance_percent(state.tuning.powerup_spawn_percent) {
        return;
    }
    let idx = state.rng.random_int(0, PowerUpKind::ALL.len() as i32 - 1) as usize;
    let kind = PowerUpKind::ALL[idx];
    state.power_ups.push(PowerUp::new(kind, center));
    state.push_event(GameEvent::PowerUpSpawned { kind, pos: center });
}

/// Advance falling power-ups, apply the ones that touch the paddle and prune
/// the rest once they leave the field.
pub fn update_power_ups(state: &mut GameState) {
    let paddle = state.paddle.rect;
    let mut collected = Vec::new();

    for power_up in state.power_ups.iter_mut().filter(|p| p.active) {
        power_up.rect.y += POWERUP_FALL_SPEED;

        if rect_overlap(&power_up.rect, &paddle) {
            power_up.active = false;
            collected.push(power_up.kind);
        } else if power_up.rect.y > FIELD_HEIGHT {
            power_up.active = false;
        }
    }

    for kind in collected {
        apply_power_up(state, kind);
    }

    state.power_ups.retain(|p| p.active);
}

/// Apply a collected power-up's effect
pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::PaddleSizeUp => {
            let width = (state.paddle.rect.width * state.tuning.paddle_growth).min(PADDLE_MAX_WIDTH);
            state.paddle.set_width(width.max(state.paddle.rect.width));
        }
        PowerUpKind::BallSpeedUp => {
            let growth = state.tuning.ball_speed_growth;
            for ball in state.balls.iter_mut().filter(|b| b.active) {
                ball.vel = (ball.vel * growth).clamp_length_max(BALL_MAX_SPEED);
                enforce_min_speed_x(&mut ball.vel, MIN_BALL_SPEED_X, &mut state.rng);
            }
        }
        PowerUpKind::ExtraLife => {
            state.lives += 1;
        }
        PowerUpKind::MultiBall => {
            spawn_multi_ball(state);
        }
    }
    state.push_event(GameEvent::PowerUpCollected { kind });
}

/// Two extra balls from the first active ball, mirrored and forced upward
fn spawn_multi_ball(state: &mut GameState) {
    let Some(source) = state.balls.iter().find(|b| b.active) else {
        return;
    };
    let pos = source.pos;
    let vel = source.vel;
    let up = -vel.y.abs();

    for new_vel in [Vec2::new(-vel.x, up), Vec2::new(vel.x, up)] {
        if state.active_ball_count() >= MAX_BALLS {
            break;
        }
        state.balls.push(Ball::new(pos, new_vel));
    }
}
