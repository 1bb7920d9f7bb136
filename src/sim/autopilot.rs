//! Idle/demo mode - the game plays itself
//!
//! Fills in a frame's input from the current state: confirms every banner,
//! tracks the most dangerous ball and goes for power-ups when it is safe.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::PADDLE_SPEED;

/// Ball height (px from the top) below which the autopilot ignores pickups
const DANGER_LINE: f32 = 380.0;

/// Overwrite `input` with the autopilot's choice for this frame
pub fn drive(state: &GameState, input: &mut TickInput) {
    input.left = false;
    input.right = false;
    input.up = false;
    input.down = false;
    input.menu = false;

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver | GamePhase::YouWin => {
            input.confirm = true;
        }
        GamePhase::Playing => {
            input.confirm = false;
            if state.paused {
                return;
            }
            if let Some(target) = target_x(state) {
                steer_toward(state, target, input);
            }
        }
    }
}

/// Where the paddle center should go
fn target_x(state: &GameState) -> Option<f32> {
    // Most dangerous ball: descending and closest to the bottom
    let falling = state
        .balls
        .iter()
        .filter(|b| b.active && b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let safe = falling.is_none_or(|b| b.pos.y < DANGER_LINE);
    if safe {
        let pickup = state
            .power_ups
            .iter()
            .filter(|p| p.active)
            .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y));
        if let Some(p) = pickup {
            return Some(p.rect.center().x);
        }
    }

    let ball = falling.or_else(|| state.balls.iter().find(|b| b.active))?;

    // Lead the ball to where it crosses the paddle line, folding wall bounces
    let frames = ((state.paddle.rect.y - ball.pos.y) / ball.vel.y.max(0.5)).max(0.0);
    let projected = fold_into_field(ball.pos.x + ball.vel.x * frames);

    // Oscillating offset so rallies don't loop forever
    let offset = (state.timer * 0.7).sin() * state.paddle.rect.width * 0.3;
    Some(projected + offset)
}

fn fold_into_field(x: f32) -> f32 {
    let width = crate::consts::FIELD_WIDTH;
    let period = 2.0 * width;
    let m = x.rem_euclid(period);
    if m > width { period - m } else { m }
}

fn steer_toward(state: &GameState, target: f32, input: &mut TickInput) {
    let delta = target - state.paddle.center_x();
    if delta < -PADDLE_SPEED / 2.0 {
        input.left = true;
    } else if delta > PADDLE_SPEED / 2.0 {
        input.right = true;
    }
}
