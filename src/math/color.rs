use std::ops::{Add, Div, Mul, Sub};

/// Linear RGBA colour with `f32` channels.
///
/// Channels are nominally in `[0, 1]` but arithmetic never clamps; call
/// [`Color::clamp`] (or [`Color::clamped`]) before quantising.
/// Every operator acts on all four channels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// What every read from an empty texture returns.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build from 8-bit channels (`v / 255`).
    #[inline]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Clamp then round every channel to the nearest 8-bit step.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [quantize(c.r), quantize(c.g), quantize(c.b), quantize(c.a)]
    }

    /// Frame-buffer pixel in `0x00RRGGBB` layout (alpha dropped).
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    #[inline]
    pub fn lerp(self, to: Color, fac: f32) -> Color {
        self * (1.0 - fac) + to * fac
    }

    /// Clamp all channels into `[0, 1]` in place.
    pub fn clamp(&mut self) {
        *self = self.clamped();
    }

    #[inline]
    pub fn clamped(self) -> Color {
        Color::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Channel-wise comparison with absolute tolerance `eps`.
    pub fn approx_eq(self, other: Color, eps: f32) -> bool {
        (self.r - other.r).abs() <= eps
            && (self.g - other.g).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.a - other.a).abs() <= eps
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

impl Add for Color {
    type Output = Color;
    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, o: Color) -> Color {
        Color::new(self.r - o.r, self.g - o.g, self.b - o.b, self.a - o.a)
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, o: Color) -> Color {
        Color::new(self.r * o.r, self.g * o.g, self.b * o.b, self.a * o.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

impl Div<f32> for Color {
    type Output = Color;
    fn div(self, s: f32) -> Color {
        Color::new(self.r / s, self.g / s, self.b / s, self.a / s)
    }
}
