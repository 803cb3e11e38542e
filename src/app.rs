use std::path::Path;

use log::{debug, warn};

use crate::{
    config::Config,
    math::Color,
    renderer::{Canvas, CanvasExt},
    terrain::{FrameStats, Rasterizer, Scene},
    world::{Camera, Texture, TextureLoadError},
};

/// The terrain demo: two textures, a camera and the rasterizer that draws
/// them. Hosts call [`App::setup`] once, then alternate
/// [`App::update`] and [`App::draw`].
pub struct App {
    pub camera: Camera,
    pub background: Color,
    heightmap: Texture,
    colormap: Texture,
    rasterizer: Rasterizer,
    last_stats: FrameStats,
}

impl App {
    /// Load both textures named in `config`.
    ///
    /// A texture that fails to load is an error unless
    /// `config.allow_missing` is set, in which case a blank texture takes
    /// its place and a warning is logged.
    pub fn setup(config: &Config) -> Result<Self, TextureLoadError> {
        let heightmap = load_texture(&config.heightmap, config.allow_missing)?;
        let colormap = load_texture(&config.colormap, config.allow_missing)?;
        Ok(Self::new(heightmap, colormap, config))
    }

    /// Build from already decoded textures.
    pub fn new(heightmap: Texture, colormap: Texture, config: &Config) -> Self {
        Self {
            camera: config.camera,
            background: config.background,
            heightmap,
            colormap,
            rasterizer: Rasterizer::new(config.depth_step),
            last_stats: FrameStats::default(),
        }
    }

    #[inline]
    pub fn heightmap(&self) -> &Texture {
        &self.heightmap
    }

    #[inline]
    pub fn colormap(&self) -> &Texture {
        &self.colormap
    }

    #[inline]
    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Stats of the most recent [`App::draw`].
    #[inline]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Poll the canvas for held keys and advance the camera by `dt` seconds.
    pub fn update<C: Canvas + ?Sized>(&mut self, canvas: &C, dt: f32) {
        let held = canvas.held_keys();
        self.camera.update(held, dt);
    }

    /// Render the terrain and the position read-out.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        let scene = Scene {
            camera: &self.camera,
            heightmap: &self.heightmap,
            colormap: &self.colormap,
            background: self.background,
        };
        self.last_stats = self.rasterizer.draw(canvas, &scene);

        canvas.text(&format!("X: {:.6}", self.camera.pos.x), 10, 10);
        canvas.text(&format!("Y: {:.6}", self.camera.pos.y), 10, 20);
        self.last_stats
    }
}

fn load_texture(path: &Path, allow_missing: bool) -> Result<Texture, TextureLoadError> {
    match Texture::load(path) {
        Ok(tex) => Ok(tex),
        Err(e) if allow_missing => {
            warn!("{e}; using a blank texture instead");
            Ok(Texture::default())
        }
        Err(e) => {
            debug!("texture load failed: {e:?}");
            Err(e)
        }
    }
}
