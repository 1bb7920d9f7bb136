//! Window-less platform
//!
//! Fixed-step frames with the autopilot at the controls. Draw calls are
//! counted instead of rendered, which makes it useful for attract-mode runs
//! and tests.

use glam::Vec2;

use super::Platform;
use crate::consts::TARGET_FPS;
use crate::palette::Rgba;
use crate::renderer::Canvas;
use crate::sim::{Rect, TickInput};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub frames: u64,
    pub rects: u64,
    pub circles: u64,
    pub texts: u64,
}

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    dt: f32,
    frame_budget: u64,
    stats: DrawStats,
    /// Text of the most recent frame, in draw order
    last_texts: Vec<String>,
}

impl HeadlessPlatform {
    /// Close after `frame_budget` frames at the target frame rate
    pub fn new(frame_budget: u64) -> Self {
        Self {
            dt: 1.0 / TARGET_FPS as f32,
            frame_budget,
            stats: DrawStats::default(),
            last_texts: Vec::new(),
        }
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn stats(&self) -> &DrawStats {
        &self.stats
    }

    pub fn last_texts(&self) -> &[String] {
        &self.last_texts
    }
}

impl Canvas for HeadlessPlatform {
    fn clear(&mut self, _color: Rgba) {
        self.stats.frames += 1;
        self.last_texts.clear();
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgba) {
        self.stats.rects += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.stats.circles += 1;
    }

    fn draw_text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Rgba) {
        self.stats.texts += 1;
        self.last_texts.push(text.to_string());
    }
}

impl Platform for HeadlessPlatform {
    fn poll_input(&mut self) -> TickInput {
        TickInput {
            idle_mode: true,
            ..Default::default()
        }
    }

    fn frame_delta_seconds(&mut self) -> f32 {
        self.dt
    }

    fn should_close(&self) -> bool {
        self.stats.frames >= self.frame_budget
    }
}
