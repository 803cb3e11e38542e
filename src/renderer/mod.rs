//! Host drawing surface.
//!
//! *The terrain code never touches a pixel buffer directly.*
//! It talks to a type implementing [`Canvas`]: clear, draw a line, print a
//! string, and ask which keys are down.
//!
//! * [`FrameBuffer`] is the software implementation used by both binaries:
//!   the window host copies it to `minifb`, the snapshot tool to a PNG.
//! * Tests substitute recording canvases to inspect the draw calls.

mod font;
mod software;

pub use software::FrameBuffer;

use crate::{math::Color, sim::Keys};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgb = u32;

/// Everything the terrain app needs from its host.
///
/// Coordinates are in pixels, origin top-left, y down. Drawing outside the
/// surface is clipped, never an error.
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// True when every key in `keys` is currently held.
    fn is_held(&self, keys: Keys) -> bool;

    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    /// Draw a line between two points, both ends inclusive.
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);

    /// Print `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: i32, y: i32);
}

/// Convenience blanket-impl for polling the whole key set at once.
pub trait CanvasExt: Canvas {
    /// The subset of the directional keys that is held right now.
    fn held_keys(&self) -> Keys {
        Keys::all().iter().filter(|&k| self.is_held(k)).collect()
    }
}
impl<T: Canvas + ?Sized> CanvasExt for T {}
