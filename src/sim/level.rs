//! Level setup
//!
//! Builds the brick layout, paddle and serve for a difficulty tier from the
//! tuning table.

use glam::Vec2;

use super::state::{Brick, Difficulty, GameState};
use crate::consts::*;

/// Configure the session for a fresh level at `difficulty`.
///
/// Score, lives and the level counter are left to the caller.
pub fn setup_level(state: &mut GameState, difficulty: Difficulty) {
    state.difficulty = difficulty;
    let profile = state.tuning.profile(difficulty).clone();

    // Paddle
    state.paddle.rect.width = (PADDLE_WIDTH * profile.paddle_width_multiplier).min(FIELD_WIDTH);
    state.paddle.rect.height = PADDLE_HEIGHT;
    state.paddle.center();

    // Serve: upward, horizontal direction is a coin flip
    let speed = BALL_BASE_SPEED * profile.ball_speed_multiplier;
    let dir_x = state.rng.coin_flip_sign();
    state.launch_vel = Vec2::new(speed * dir_x, -speed);

    // Bricks: full grid, then activate a shuffled subset of the candidate rows
    state.bricks = (0..BRICK_ROWS)
        .flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
        .map(|(row, col)| Brick::at_cell(row, col, profile.brick_color))
        .collect();

    let mut candidates: Vec<usize> = (0..profile.active_rows * BRICK_COLS).collect();
    state.rng.shuffle(&mut candidates);
    let fill = state.rng.random_int(
        state.tuning.fill_percent_min as i32,
        state.tuning.fill_percent_max as i32,
    ) as usize;
    let count = (candidates.len() * fill).div_ceil(100).clamp(1, candidates.len());

    for &index in &candidates[..count] {
        let hits = state.rng.random_int(1, profile.max_hits as i32) as u8;
        let brick = &mut state.bricks[index];
        brick.active = true;
        brick.hits_required = hits;
        brick.initial_hits = hits;
    }

    if profile.moving_bricks {
        assign_moving_bricks(state);
    }

    state.active_bricks = state.count_active_bricks();
    state.timer = profile.timer_budget;
    state.power_ups.clear();
    state.paused = false;
    state.spawn_ball_above_paddle();

    log::info!(
        "Level {} ({}): {} bricks, paddle {:.0}px, ball speed {:.1}, timer {:.0}s",
        state.level,
        difficulty.label(),
        state.active_bricks,
        state.paddle.rect.width,
        speed,
        state.timer
    );
}

/// Give some bricks of the lowest active row an oscillating speed
fn assign_moving_bricks(state: &mut GameState) {
    let Some(bottom_row) = state
        .bricks
        .iter()
        .rposition(|b| b.active)
        .map(|i| i / BRICK_COLS)
    else {
        return;
    };

    let percent = state.tuning.moving_brick_percent;
    for col in 0..BRICK_COLS {
        let index = bottom_row * BRICK_COLS + col;
        if !state.bricks[index].active || !state.rng.chance_percent(percent) {
            continue;
        }
        let dir = state.rng.coin_flip_sign();
        state.bricks[index].move_speed = BRICK_MOVE_SPEED * dir;
    }
}
