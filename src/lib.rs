//! Brick Breaker - a single-screen arcade block-breaking game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, level setup, state machine)
//! - `renderer`: Presentation (HUD, banners, vertex batching)
//! - `platform`: Platform service abstraction and the frame driver
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{DifficultyProfile, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions (pixels, origin top-left, +y down)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target frame rate of the frame loop
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle bottom and the field bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 30.0;
    /// Pixels per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Paddle width cap for PaddleSizeUp
    pub const PADDLE_MAX_WIDTH: f32 = 200.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-component launch speed before the difficulty multiplier (px/frame)
    pub const BALL_BASE_SPEED: f32 = 4.0;
    /// Horizontal speed floor so the ball never travels purely vertically
    pub const MIN_BALL_SPEED_X: f32 = 2.0;
    /// Velocity magnitude cap for BallSpeedUp
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Spawn gap between paddle top and ball bottom
    pub const BALL_SPAWN_GAP: f32 = 5.0;
    /// Maximum simultaneous balls
    pub const MAX_BALLS: usize = 8;

    /// Brick grid
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_CELL_WIDTH: f32 = FIELD_WIDTH / BRICK_COLS as f32;
    pub const BRICK_CELL_HEIGHT: f32 = 30.0;
    pub const BRICK_SPACING: f32 = 1.0;
    pub const BRICK_TOP_OFFSET: f32 = 50.0;
    /// Horizontal speed of moving bricks (px/frame)
    pub const BRICK_MOVE_SPEED: f32 = 1.5;

    /// Power-up defaults
    pub const POWERUP_WIDTH: f32 = 30.0;
    pub const POWERUP_HEIGHT: f32 = 15.0;
    pub const POWERUP_FALL_SPEED: f32 = 2.5;

    /// Scoring
    pub const STARTING_LIVES: u32 = 3;
    pub const BRICK_POINTS: u64 = 10;
    pub const LEVEL_BONUS: u64 = 100;
}

/// RGBA colors for game elements
pub mod palette {
    pub type Rgba = [f32; 4];

    pub const PADDLE: Rgba = [0.0, 0.47, 0.95, 1.0];
    pub const BALL: Rgba = [0.75, 0.13, 0.22, 1.0];
    pub const BRICK_EASY: Rgba = [0.99, 0.98, 0.0, 1.0];
    pub const BRICK_MEDIUM: Rgba = [0.0, 0.89, 0.19, 1.0];
    pub const BRICK_HARD: Rgba = [1.0, 0.63, 0.0, 1.0];
    pub const POWERUP_PADDLE: Rgba = [0.0, 0.62, 0.18, 1.0];
    pub const POWERUP_SPEED: Rgba = [0.9, 0.16, 0.22, 1.0];
    pub const POWERUP_LIFE: Rgba = [1.0, 0.43, 0.76, 1.0];
    pub const POWERUP_MULTI: Rgba = [0.44, 0.12, 0.49, 1.0];
    pub const BACKGROUND: Rgba = [0.96, 0.96, 0.96, 1.0];
    pub const HUD_TEXT: Rgba = [0.31, 0.31, 0.31, 1.0];
    pub const HUD_MUTED: Rgba = [0.51, 0.51, 0.51, 1.0];
    pub const BANNER_STRIP: Rgba = [0.0, 0.0, 0.0, 0.7];
    pub const BANNER_LOSE: Rgba = [0.9, 0.16, 0.22, 1.0];
    pub const BANNER_WIN: Rgba = [0.0, 0.89, 0.19, 1.0];
    pub const BANNER_HINT: Rgba = [0.78, 0.78, 0.78, 1.0];

    /// Scale the RGB channels of a color, keeping alpha
    #[inline]
    pub fn dim(color: Rgba, factor: f32) -> Rgba {
        let f = factor.clamp(0.0, 1.0);
        [color[0] * f, color[1] * f, color[2] * f, color[3]]
    }
}
