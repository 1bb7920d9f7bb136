//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One owned `GameState` per session
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks, insertion-ordered balls)

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod powerup;
pub mod rng;
pub mod state;
pub mod step;
pub mod tick;

pub use collision::{BounceAxis, WallContact};
pub use geometry::{Rect, circle_rect_overlap, rect_overlap};
pub use level::setup_level;
pub use powerup::apply_power_up;
pub use rng::GameRng;
pub use state::{
    Ball, Brick, Difficulty, GameEvent, GamePhase, GameState, Paddle, PowerUp, PowerUpKind,
};
pub use step::simulate;
pub use tick::{TickInput, start_game, tick};
