//! Data-driven game balance
//!
//! The per-difficulty table and the gameplay knobs that differ between
//! builds. Defaults are compiled in; an override can be loaded from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::BRICK_ROWS;
use crate::palette::{self, Rgba};
use crate::sim::Difficulty;

/// Level configuration for one difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Paddle width relative to `PADDLE_WIDTH`
    pub paddle_width_multiplier: f32,
    /// Ball launch speed relative to `BALL_BASE_SPEED`
    pub ball_speed_multiplier: f32,
    /// Countdown budget in seconds
    pub timer_budget: f32,
    /// Rows (from the top) whose cells are candidates for active bricks
    pub active_rows: usize,
    /// Upper bound of the randomized hit points per brick
    pub max_hits: u8,
    /// Whether bricks in the lowest active row may oscillate
    pub moving_bricks: bool,
    /// Undamaged brick color
    pub brick_color: Rgba,
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
    /// Percentage of candidate cells that become bricks (inclusive range)
    pub fill_percent_min: u32,
    pub fill_percent_max: u32,
    /// Chance (percent) that a destroyed brick drops a power-up
    pub powerup_spawn_percent: u32,
    /// Chance (percent) that an eligible brick moves on a moving-brick level
    pub moving_brick_percent: u32,
    /// PaddleSizeUp width factor
    pub paddle_growth: f32,
    /// BallSpeedUp velocity factor
    pub ball_speed_growth: f32,
    /// Horizontal speed (fraction of ball speed) for hits on the paddle edges
    pub paddle_edge_factor: f32,
    /// Center-zone steering: `vx = (hit - 0.5) * 2 * speed * paddle_center_factor`
    pub paddle_center_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile {
                paddle_width_multiplier: 1.5,
                ball_speed_multiplier: 0.8,
                timer_budget: 120.0,
                active_rows: 3,
                max_hits: 1,
                moving_bricks: false,
                brick_color: palette::BRICK_EASY,
            },
            medium: DifficultyProfile {
                paddle_width_multiplier: 0.7,
                ball_speed_multiplier: 1.2,
                timer_budget: 150.0,
                active_rows: 5,
                max_hits: 2,
                moving_bricks: false,
                brick_color: palette::BRICK_MEDIUM,
            },
            hard: DifficultyProfile {
                paddle_width_multiplier: 0.5,
                ball_speed_multiplier: 1.5,
                timer_budget: 180.0,
                active_rows: BRICK_ROWS,
                max_hits: 3,
                moving_bricks: true,
                brick_color: palette::BRICK_HARD,
            },
            fill_percent_min: 70,
            fill_percent_max: 90,
            powerup_spawn_percent: 20,
            moving_brick_percent: 33,
            paddle_growth: 1.2,
            ball_speed_growth: 1.1,
            paddle_edge_factor: 0.75,
            paddle_center_factor: 0.5,
        }
    }
}

impl Tuning {
    /// Look up the profile for a difficulty tier
    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Parse and validate a tuning override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning override");
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check the table is usable and keeps difficulty ordering monotonic
    pub fn validate(&self) -> Result<(), TuningError> {
        for difficulty in Difficulty::ALL {
            let p = self.profile(difficulty);
            let name = difficulty.label();
            if !(p.paddle_width_multiplier > 0.0) || !(p.ball_speed_multiplier > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name}: multipliers must be positive"
                )));
            }
            if !(p.timer_budget > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name}: timer budget must be positive"
                )));
            }
            if p.active_rows == 0 || p.active_rows > BRICK_ROWS {
                return Err(TuningError::Invalid(format!(
                    "{name}: active rows must be in 1..={BRICK_ROWS}"
                )));
            }
            if p.max_hits == 0 {
                return Err(TuningError::Invalid(format!(
                    "{name}: max hits must be at least 1"
                )));
            }
        }

        let [easy, medium, hard] = Difficulty::ALL.map(|d| self.profile(d));
        if easy.paddle_width_multiplier < medium.paddle_width_multiplier
            || medium.paddle_width_multiplier < hard.paddle_width_multiplier
        {
            return Err(TuningError::Invalid(
                "paddle width must not grow with difficulty".into(),
            ));
        }
        if easy.ball_speed_multiplier > medium.ball_speed_multiplier
            || medium.ball_speed_multiplier > hard.ball_speed_multiplier
        {
            return Err(TuningError::Invalid(
                "ball speed must not shrink with difficulty".into(),
            ));
        }

        if self.fill_percent_min == 0
            || self.fill_percent_min > self.fill_percent_max
            || self.fill_percent_max > 100
        {
            return Err(TuningError::Invalid(
                "fill percent range must satisfy 1 <= min <= max <= 100".into(),
            ));
        }
        if self.powerup_spawn_percent > 100 || self.moving_brick_percent > 100 {
            return Err(TuningError::Invalid("chances are percentages".into()));
        }
        if self.paddle_growth < 1.0 || self.ball_speed_growth < 1.0 {
            return Err(TuningError::Invalid(
                "growth factors must be at least 1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Failure to load a tuning override
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "tuning parse error: {e}"),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}
