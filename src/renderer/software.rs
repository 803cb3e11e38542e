//! ---------------------------------------------------------------------------
//! Software (CPU) canvas
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format, the layout
//!   `minifb::Window::update_with_buffer` expects.
//! * Vertical lines (all the terrain pass emits) take a straight column fill;
//!   anything else goes through Bresenham.
//! * Held keys are pushed in by the host once per frame.
//! ---------------------------------------------------------------------------

use crate::{
    math::Color,
    renderer::{Canvas, Rgb, font},
    sim::Keys,
};

/// Colour of overlay text.
const TEXT_COLOR: Rgb = 0x00_FFFFFF;

#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
    held: Keys,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
            held: Keys::empty(),
        }
    }

    /// Replace the set of held keys reported through [`Canvas::is_held`].
    pub fn set_held(&mut self, keys: Keys) {
        self.held = keys;
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Interleaved RGBA8 copy (alpha 255), ready for an image encoder.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&px| [(px >> 16) as u8, (px >> 8) as u8, px as u8, 0xFF])
            .collect()
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgb) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.pixels[y as usize * self.width + x as usize] = col;
        }
    }

    /// Fill rows `floor(y0) .. floor(y1)` of column `x` (top inclusive,
    /// bottom exclusive) so that stacked terrain spans tile without gaps.
    fn column(&mut self, x: f32, y0: f32, y1: f32, col: Rgb) {
        let x = x.floor();
        if x < 0.0 || x >= self.width as f32 {
            return;
        }
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let top = top.floor().max(0.0) as usize;
        let bottom = (bottom.floor().max(0.0) as usize).min(self.height);
        let x = x as usize;
        for y in top..bottom {
            self.pixels[y * self.width + x] = col;
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, col: Rgb) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/*──────────────────────── Canvas trait impl ────────────────────────*/
impl Canvas for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_held(&self, keys: Keys) -> bool {
        self.held.contains(keys)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgb_u32());
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let col = color.to_rgb_u32();
        if x0.floor() == x1.floor() {
            self.column(x0, y0, y1, col);
        } else {
            self.bresenham(
                x0.floor() as i32,
                y0.floor() as i32,
                x1.floor() as i32,
                y1.floor() as i32,
                col,
            );
        }
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        let mut pen = x;
        for c in text.chars() {
            for (gx, gy) in font::pixels(c) {
                self.put(pen + gx, y + gy, TEXT_COLOR);
            }
            pen += font::ADVANCE;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
