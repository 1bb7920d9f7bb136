//! Backend-agnostic frame batching
//!
//! `VertexBatch` turns a frame's draw calls into one triangle list plus a list
//! of text labels, ready to upload to whatever GPU the platform owns.

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::palette::{self, Rgba};
use crate::sim::Rect;

/// Segments used for ball tessellation
pub const CIRCLE_SEGMENTS: u32 = 24;

/// A text draw call, kept for the platform's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct VertexBatch {
    pub clear_color: Rgba,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self {
            clear_color: palette::BACKGROUND,
            vertices: Vec::with_capacity(1024),
            labels: Vec::new(),
        }
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame, keeping allocations
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Raw vertex bytes in field coordinates
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertices mapped from field pixels to normalized device coordinates
    pub fn to_ndc(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| {
                let (x, y) = field_to_ndc(v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect()
    }
}

/// Field pixels (origin top-left, +y down) to NDC (-1..1, +y up)
pub fn field_to_ndc(x: f32, y: f32) -> (f32, f32) {
    (x / FIELD_WIDTH * 2.0 - 1.0, 1.0 - y / FIELD_HEIGHT * 2.0)
}

impl Canvas for VertexBatch {
    fn clear(&mut self, color: Rgba) {
        self.reset();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.vertices.extend_from_slice(&shapes::rect(&rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
