// RGBA8 texel grid read by the terrain rasterizer.
// Heightmaps and colour maps tile infinitely: every coordinate wraps.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::math::Color;

/// Bytes per texel (R, G, B, A).
const CHANNELS: usize = 4;

/// Things that can go wrong when building a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureLoadError {
    /// File missing or unreadable.
    #[error("cannot read texture `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not an image format we can decode.
    #[error("cannot decode texture `{}`: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Raw pixel buffer length does not match `w * h * 4`.
    #[error("pixel buffer of {len} bytes does not fit a {width}x{height} RGBA8 texture")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// CPU-side storage: 4 interleaved 8-bit channels per texel, row-major,
/// origin top-left.
///
/// * `pixels.len() == w * h * 4` always holds.
/// * The default texture is 0×0: reads return [`Color::TRANSPARENT`],
///   writes are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texture {
    w: usize,
    h: usize,
    pixels: Vec<u8>,
}

impl Texture {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Blank (all-zero) texture of the given size.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            pixels: vec![0; w * h * CHANNELS],
        }
    }

    /// Wrap an already decoded RGBA8 buffer.
    pub fn from_rgba8(w: usize, h: usize, pixels: Vec<u8>) -> Result<Self, TextureLoadError> {
        if pixels.len() != w * h * CHANNELS {
            return Err(TextureLoadError::SizeMismatch {
                width: w,
                height: h,
                len: pixels.len(),
            });
        }
        Ok(Self { w, h, pixels })
    }

    /// Decode an image file (PNG) into RGBA8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TextureLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TextureLoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let tex = Self::decode_named(&bytes, path)?;
        info!("loaded texture {} ({}x{})", path.display(), tex.w, tex.h);
        Ok(tex)
    }

    /// Decode an in-memory image into RGBA8.
    pub fn decode(bytes: &[u8]) -> Result<Self, TextureLoadError> {
        Self::decode_named(bytes, Path::new("<memory>"))
    }

    fn decode_named(bytes: &[u8], path: &Path) -> Result<Self, TextureLoadError> {
        let img = image::load_from_memory(bytes)
            .map_err(|source| TextureLoadError::Decode {
                path: path.to_owned(),
                source,
            })?
            .into_rgba8();
        let (w, h) = img.dimensions();
        debug!("decoded {} as {w}x{h} RGBA8", path.display());
        Self::from_rgba8(w as usize, h as usize, img.into_raw())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of the texel at wrapped `(x, y)`, or `None` when empty.
    #[inline]
    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let x = x.rem_euclid(self.w as i64) as usize;
        let y = y.rem_euclid(self.h as i64) as usize;
        Some((x + y * self.w) * CHANNELS)
    }

    // ---------------------------------------------------------------------
    // Texel access
    // ---------------------------------------------------------------------

    /// Texel at integer pixel coordinates; any `x`, `y` is valid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Color {
        match self.offset(x, y) {
            Some(i) => Color::from_rgba8([
                self.pixels[i],
                self.pixels[i + 1],
                self.pixels[i + 2],
                self.pixels[i + 3],
            ]),
            None => Color::TRANSPARENT,
        }
    }

    /// Texel under a world-space point; coordinates are floored first.
    #[inline]
    pub fn get_f(&self, x: f32, y: f32) -> Color {
        self.get(x.floor() as i64, y.floor() as i64)
    }

    /// Store `color`, clamped and rounded to 8 bits per channel.
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + CHANNELS].copy_from_slice(&color.to_rgba8());
        }
    }

    /// Bilinear sample at normalised `(u, v)`; `(i / w, j / h)` hits texel
    /// `(i, j)` exactly. Neighbours past the edge wrap around.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = u * self.w as f32;
        let v = v * self.h as f32;

        let xf = u.floor();
        let yf = v.floor();
        let (x, y) = (xf as i64, yf as i64);

        let ur = u - xf;
        let vr = v - yf;
        let uo = 1.0 - ur;
        let vo = 1.0 - vr;

        (self.get(x, y) * uo + self.get(x + 1, y) * ur) * vo
            + (self.get(x, y + 1) * uo + self.get(x + 1, y + 1) * ur) * vr
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
