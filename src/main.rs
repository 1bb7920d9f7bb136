//! Brick Breaker attract-mode runner (default binary).
//!
//! Plays a headless session with the autopilot and logs a JSON summary.
//!
//! Usage: `breakout [seed] [frames] [tuning.json]`

use anyhow::{Context, Result};

use brick_breaker::Tuning;
use brick_breaker::consts::TARGET_FPS;
use brick_breaker::platform::{HeadlessPlatform, Platform, run_frame};
use brick_breaker::sim::{GameEvent, GameState};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_FRAMES: u64 = 60 * TARGET_FPS as u64;

#[derive(Debug, Default)]
struct Tally {
    bricks_destroyed: u64,
    power_ups_collected: u64,
    lives_lost: u64,
    levels_cleared: u64,
    game_overs: u64,
    best_score: u64,
}

impl Tally {
    fn record(&mut self, state: &GameState) {
        for event in &state.events {
            match event {
                GameEvent::BrickDestroyed { .. } => self.bricks_destroyed += 1,
                GameEvent::PowerUpCollected { .. } => self.power_ups_collected += 1,
                GameEvent::LifeLost { .. } => self.lives_lost += 1,
                GameEvent::LevelCleared { .. } => self.levels_cleared += 1,
                GameEvent::GameOver { .. } => self.game_overs += 1,
                _ => {}
            }
        }
        self.best_score = self.best_score.max(state.score);
    }
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed: {s}"))?,
        None => DEFAULT_SEED,
    };
    let frames = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid frame count: {s}"))?,
        None => DEFAULT_FRAMES,
    };
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            Tuning::from_json(&json).with_context(|| format!("loading tuning file {path}"))?
        }
        None => Tuning::default(),
    };

    log::info!("Brick Breaker (headless) starting: seed {seed}, {frames} frames");

    let mut state = GameState::with_tuning(seed, tuning);
    let mut platform = HeadlessPlatform::new(frames);
    let mut tally = Tally::default();

    while !platform.should_close() {
        run_frame(&mut platform, &mut state);
        tally.record(&state);
    }

    let summary = serde_json::json!({
        "seed": state.rng.seed(),
        "frames": platform.stats().frames,
        "phase": state.phase,
        "difficulty": state.difficulty,
        "level": state.level,
        "score": state.score,
        "best_score": tally.best_score,
        "lives": state.lives,
        "bricks_remaining": state.active_bricks,
        "bricks_destroyed": tally.bricks_destroyed,
        "power_ups_collected": tally.power_ups_collected,
        "lives_lost": tally.lives_lost,
        "levels_cleared": tally.levels_cleared,
        "game_overs": tally.game_overs,
    });
    log::info!("Session summary: {}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
