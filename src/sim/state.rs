//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState` that the state machine
//! and the simulation step receive by `&mut`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::rng::GameRng;
use crate::consts::*;
use crate::palette::{self, Rgba};
use crate::tuning::Tuning;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty selection
    Menu,
    /// Active gameplay (may be paused)
    Playing,
    /// Lives exhausted
    GameOver,
    /// Every brick cleared
    YouWin,
}

/// Ordered difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// The next tier up, `None` at Hard
    pub fn next(&self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Medium),
            Difficulty::Medium => Some(Difficulty::Hard),
            Difficulty::Hard => None,
        }
    }

    /// Menu cycling, wrapping at both ends
    pub fn cycle(&self, step: i32) -> Difficulty {
        let len = Self::ALL.len() as i32;
        let idx = (self.index() as i32 + step).rem_euclid(len);
        Self::ALL[idx as usize]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn is_max(&self) -> bool {
        self.next().is_none()
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    pub color: Rgba,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            active: true,
            color: palette::BALL,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub color: Rgba,
}

impl Default for Paddle {
    fn default() -> Self {
        let mut paddle = Self {
            rect: Rect::new(0.0, Self::resting_y(), PADDLE_WIDTH, PADDLE_HEIGHT),
            color: palette::PADDLE,
        };
        paddle.center();
        paddle
    }
}

impl Paddle {
    /// Vertical position the paddle always sits at
    pub fn resting_y() -> f32 {
        FIELD_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN
    }

    /// Center horizontally and put back on the resting line
    pub fn center(&mut self) {
        self.rect.x = (FIELD_WIDTH - self.rect.width) / 2.0;
        self.rect.y = Self::resting_y();
    }

    pub fn center_x(&self) -> f32 {
        self.rect.x + self.rect.width / 2.0
    }

    /// Keep the paddle inside the horizontal play-field
    pub fn clamp_to_field(&mut self) {
        self.rect.width = self.rect.width.min(FIELD_WIDTH);
        self.rect.x = self.rect.x.clamp(0.0, FIELD_WIDTH - self.rect.width);
    }

    /// Resize around the current center, then re-clamp
    pub fn set_width(&mut self, width: f32) {
        let center = self.center_x();
        self.rect.width = width;
        self.rect.x = center - width / 2.0;
        self.clamp_to_field();
    }

    pub fn shift(&mut self, dx: f32) {
        self.rect.x += dx;
        self.clamp_to_field();
    }
}

/// A brick in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
    /// Remaining hit points (>= 1 while active)
    pub hits_required: u8,
    /// Hit points at level start, used for damage shading
    pub initial_hits: u8,
    /// Horizontal px/frame; 0 = stationary, sign = direction
    pub move_speed: f32,
    pub base_color: Rgba,
    pub color: Rgba,
}

impl Brick {
    /// An inactive brick occupying grid cell (row, col)
    pub fn at_cell(row: usize, col: usize, base_color: Rgba) -> Self {
        let rect = Rect::new(
            col as f32 * BRICK_CELL_WIDTH + BRICK_SPACING / 2.0,
            BRICK_TOP_OFFSET + row as f32 * BRICK_CELL_HEIGHT + BRICK_SPACING / 2.0,
            BRICK_CELL_WIDTH - BRICK_SPACING,
            BRICK_CELL_HEIGHT - BRICK_SPACING,
        );
        Self {
            rect,
            active: false,
            hits_required: 1,
            initial_hits: 1,
            move_speed: 0.0,
            base_color,
            color: base_color,
        }
    }

    /// Take one hit. Returns true when the brick is destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.hits_required = self.hits_required.saturating_sub(1);
        if self.hits_required == 0 {
            self.active = false;
            true
        } else {
            self.refresh_color();
            false
        }
    }

    /// Dim proportionally to the remaining hit points
    pub fn refresh_color(&mut self) {
        let remaining = self.hits_required as f32 / self.initial_hits.max(1) as f32;
        self.color = palette::dim(self.base_color, 0.4 + 0.6 * remaining);
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    PaddleSizeUp,
    BallSpeedUp,
    ExtraLife,
    MultiBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::PaddleSizeUp,
        PowerUpKind::BallSpeedUp,
        PowerUpKind::ExtraLife,
        PowerUpKind::MultiBall,
    ];

    pub fn color(&self) -> Rgba {
        match self {
            PowerUpKind::PaddleSizeUp => palette::POWERUP_PADDLE,
            PowerUpKind::BallSpeedUp => palette::POWERUP_SPEED,
            PowerUpKind::ExtraLife => palette::POWERUP_LIFE,
            PowerUpKind::MultiBall => palette::POWERUP_MULTI,
        }
    }

    /// Single-letter tag drawn on the capsule
    pub fn tag(&self) -> &'static str {
        match self {
            PowerUpKind::PaddleSizeUp => "P",
            PowerUpKind::BallSpeedUp => "S",
            PowerUpKind::ExtraLife => "+",
            PowerUpKind::MultiBall => "M",
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub active: bool,
    pub color: Rgba,
}

impl PowerUp {
    /// A capsule centered on `center`
    pub fn new(kind: PowerUpKind, center: Vec2) -> Self {
        Self {
            rect: Rect::centered(center, POWERUP_WIDTH, POWERUP_HEIGHT),
            kind,
            active: true,
            color: kind.color(),
        }
    }
}

/// Things that happened during a tick, for presentation and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickHit { index: usize, remaining: u8 },
    BrickDestroyed { index: usize },
    PowerUpSpawned { kind: PowerUpKind, pos: Vec2 },
    PowerUpCollected { kind: PowerUpKind },
    BallLost,
    LifeLost { lives: u32 },
    TimerExpired,
    LevelCleared { level: u32 },
    LevelStarted { level: u32, difficulty: Difficulty },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Difficulty of the level being played
    pub difficulty: Difficulty,
    /// Highlighted menu option
    pub menu_selection: Difficulty,
    /// 1-based level counter
    pub level: u32,
    pub score: u64,
    pub lives: u32,
    /// Countdown seconds remaining
    pub timer: f32,
    pub paused: bool,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    /// Row-major brick grid, always `BRICK_ROWS * BRICK_COLS` long once a level is set up
    pub bricks: Vec<Brick>,
    pub power_ups: Vec<PowerUp>,
    /// Number of bricks with `active == true`
    pub active_bricks: u32,
    /// Launch velocity of the current level, reused when a ball respawns
    pub launch_vel: Vec2,
    #[serde(skip)]
    pub tuning: Tuning,
    #[serde(skip)]
    pub rng: GameRng,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A fresh session sitting at the menu
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            difficulty: Difficulty::Easy,
            menu_selection: Difficulty::Easy,
            level: 1,
            score: 0,
            lives: STARTING_LIVES,
            timer: tuning.easy.timer_budget,
            paused: false,
            paddle: Paddle::default(),
            balls: Vec::new(),
            bricks: Vec::new(),
            power_ups: Vec::new(),
            active_bricks: 0,
            launch_vel: Vec2::ZERO,
            tuning,
            rng: GameRng::new(seed),
            events: Vec::new(),
        }
    }

    /// Back to the menu with score, lives, level and entities cleared.
    /// The menu highlight, RNG stream and tuning carry over.
    pub fn reset_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.difficulty = Difficulty::Easy;
        self.level = 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.timer = self.tuning.easy.timer_budget;
        self.paused = false;
        self.paddle = Paddle::default();
        self.balls.clear();
        self.bricks.clear();
        self.power_ups.clear();
        self.active_bricks = 0;
        self.launch_vel = Vec2::ZERO;
    }

    /// Countdown budget of the current difficulty
    pub fn timer_budget(&self) -> f32 {
        self.tuning.profile(self.difficulty).timer_budget
    }

    pub fn count_active_bricks(&self) -> u32 {
        self.bricks.iter().filter(|b| b.active).count() as u32
    }

    pub fn active_ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Replace all balls with one fresh ball centered above the paddle
    pub fn spawn_ball_above_paddle(&mut self) {
        let pos = Vec2::new(
            self.paddle.center_x(),
            self.paddle.rect.y - BALL_RADIUS - BALL_SPAWN_GAP,
        );
        self.balls.clear();
        self.balls.push(Ball::new(pos, self.launch_vel));
    }

    /// Re-center the paddle and serve a new ball at the level's launch speed
    pub fn reset_ball_and_paddle(&mut self) {
        self.paddle.center();
        self.spawn_ball_above_paddle();
    }

    pub fn push_event(&mut self, event: GameEvent) {
        log::debug!("{:?}", event);
        self.events.push(event);
    }

    /// JSON snapshot of the gameplay state (debugging aid)
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
