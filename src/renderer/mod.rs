//! Rendering
//!
//! The game paints through the small `Surface` trait: filled rects, filled
//! circles and text. Backends:
//! - `MeshSurface`: CPU tessellation into a vertex list (native, tests)
//! - `CanvasSurface`: HTML canvas 2D context (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod mesh;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use mesh::{MeshSurface, TextRun};
pub use vertex::{Color, Vertex};

use crate::settings::{Palette, Settings};
use crate::sim::GameState;

/// A 2D drawing target
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> (f32, f32);

    /// Called once before painting a frame
    fn begin_frame(&mut self) {}

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// `(x, y)` is the center
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);

    /// `(x, y)` is the text baseline origin
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// Paint the current state
///
/// Back to front: background, net, scores, paddles, ball.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S, settings: &Settings) {
    let palette: Palette = settings.palette();
    let field = state.field;

    surface.begin_frame();
    surface.fill_rect(0.0, 0.0, field.width, field.height, palette.background);

    if settings.show_net {
        for (x, y, w, h) in state.net().segments() {
            surface.fill_rect(x, y, w, h, palette.net);
        }
    }

    if settings.show_scores {
        let y = field.height / 5.0;
        surface.fill_text(
            &state.user.score.to_string(),
            field.width / 4.0,
            y,
            palette.text,
        );
        surface.fill_text(
            &state.com.score.to_string(),
            3.0 * field.width / 4.0,
            y,
            palette.text,
        );
    }

    for (paddle, color) in [
        (&state.user, palette.user_paddle),
        (&state.com, palette.com_paddle),
    ] {
        surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height, color);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, palette.ball);
}
