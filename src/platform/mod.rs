//! Platform abstraction layer
//!
//! A platform owns the window (or lack of one) and supplies:
//! - Input polling
//! - Frame timing
//! - Draw primitives, via `Canvas`

pub mod headless;

pub use headless::HeadlessPlatform;

use crate::consts::MAX_FRAME_DT;
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameState, TickInput, tick};

/// Services the frame loop needs from the host
pub trait Platform: Canvas {
    /// Input state for the coming frame
    fn poll_input(&mut self) -> TickInput;
    /// Seconds since the previous frame
    fn frame_delta_seconds(&mut self) -> f32;
    fn should_close(&self) -> bool;
}

/// One pass of the frame loop: poll, tick, draw
pub fn run_frame(platform: &mut impl Platform, state: &mut GameState) {
    let input = platform.poll_input();
    let dt = platform.frame_delta_seconds().clamp(0.0, MAX_FRAME_DT);
    tick(state, &input, dt);
    draw_frame(state, platform);
}

/// Run frames until the platform asks to close; returns the frame count
pub fn run(platform: &mut impl Platform, state: &mut GameState) -> u64 {
    let mut frames = 0;
    while !platform.should_close() {
        run_frame(platform, state);
        frames += 1;
    }
    log::info!("Frame loop finished after {} frames", frames);
    frames
}
