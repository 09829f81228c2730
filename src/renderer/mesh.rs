//! CPU tessellating surface
//!
//! Turns paint calls into a triangle list ready for a vertex buffer. Text is
//! kept as positioned runs for a glyph pass to pick up.

use glam::Vec2;

use super::Surface;
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Color, Vertex};

/// A piece of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

/// Surface that records geometry instead of drawing it
#[derive(Debug, Clone)]
pub struct MeshSurface {
    width: f32,
    height: f32,
    pub vertices: Vec<Vertex>,
    pub text: Vec<TextRun>,
    /// Triangles per circle
    pub circle_segments: u32,
}

impl MeshSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            vertices: Vec::new(),
            text: Vec::new(),
            circle_segments: CIRCLE_SEGMENTS,
        }
    }

    /// Drop the previous frame's geometry, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.text.clear();
    }

    /// Raw vertex bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Surface for MeshSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) {
        self.clear();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.vertices.extend_from_slice(&shapes::rect(x, y, w, h, color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.vertices.extend(shapes::circle(
            Vec2::new(x, y),
            r,
            color,
            self.circle_segments,
        ));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.text.push(TextRun {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}
