//! Presentation
//!
//! Reads the session and issues draw calls through a `Canvas`. The canvas is
//! either the platform itself or a `VertexBatch` for GPU upload.

pub mod batch;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use batch::{TextLabel, VertexBatch};
pub use scene::draw_frame;
pub use vertex::Vertex;

use glam::Vec2;

use crate::palette::Rgba;
use crate::sim::Rect;

/// Draw primitives the presentation layer needs
pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);

    /// Rendered width of `text`; the default assumes a half-em monospace advance
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}
