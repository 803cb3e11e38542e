//! Start-up configuration: defaults from the classic demo, overridable from
//! the command line.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;

use crate::{
    math::Color,
    terrain::DepthStep,
    world::{Camera, Smoothing},
};

/// Everything [`crate::App::setup`] and the hosts need.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub heightmap: PathBuf,
    pub colormap: PathBuf,
    pub width: usize,
    pub height: usize,
    /// Initial camera state (position, attitude, speeds, render distance).
    pub camera: Camera,
    pub background: Color,
    pub depth_step: DepthStep,
    /// Substitute blank textures for ones that fail to load.
    pub allow_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heightmap: "terrain.png".into(),
            colormap: "color.png".into(),
            width: 800,
            height: 600,
            camera: Camera::default(),
            background: Color::rgb(0.45, 0.1, 0.05),
            depth_step: DepthStep::default(),
            allow_missing: false,
        }
    }
}

/// Command-line overrides shared by the window viewer and the snapshot tool.
#[derive(Parser, Debug)]
pub struct Args {
    /// Heightmap image; the red channel is the terrain height.
    #[arg(long)]
    pub heightmap: Option<PathBuf>,

    /// Colour map image, same tiling as the heightmap.
    #[arg(long)]
    pub colormap: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long)]
    pub height: Option<usize>,

    /// Horizontal field of view in degrees.
    #[arg(long)]
    pub fov: Option<f32>,

    /// Forward speed, texels per second.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Far end of the depth march.
    #[arg(long, value_parser = parse_finite)]
    pub distance: Option<f32>,

    /// Pixels per height unit at unit depth.
    #[arg(long)]
    pub scale_height: Option<f32>,

    /// Start position as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub start: Option<Vec3>,

    /// Per-slice growth of the depth step (0 = uniform slices).
    #[arg(long, value_parser = parse_finite)]
    pub depth_growth: Option<f32>,

    /// Frame-rate independent control smoothing.
    #[arg(long)]
    pub smooth_time: bool,

    /// Keep running with blank textures when an image fails to load.
    #[arg(long)]
    pub allow_missing: bool,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply every given override on top of [`Config::default`].
    pub fn into_config(self) -> Config {
        let mut cfg = Config::default();
        if let Some(p) = self.heightmap {
            cfg.heightmap = p;
        }
        if let Some(p) = self.colormap {
            cfg.colormap = p;
        }
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        if let Some(deg) = self.fov {
            cfg.camera.fov = deg.to_radians();
        }
        if let Some(s) = self.speed {
            cfg.camera.move_speed = s;
        }
        if let Some(d) = self.distance {
            cfg.camera.distance = d;
        }
        if let Some(s) = self.scale_height {
            cfg.camera.scale_height = s;
        }
        if let Some(pos) = self.start {
            cfg.camera.pos = pos;
        }
        if let Some(g) = self.depth_growth {
            cfg.depth_step.growth = g;
        }
        if self.smooth_time {
            cfg.camera.smoothing = Smoothing::time_constant_60hz();
        }
        cfg.allow_missing = self.allow_missing;
        cfg
    }
}

fn parse_finite(s: &str) -> Result<f32, String> {
    match s.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("`{s}` is not finite")),
        Err(e) => Err(format!("`{s}`: {e}")),
    }
}

/// `x,y,z` with exactly three finite components.
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("`{p}`: {e}")))
        .collect::<Result<Vec<f32>, String>>()?;
    match parts[..] {
        [x, y, z] if parts.iter().all(|c| c.is_finite()) => Ok(Vec3::new(x, y, z)),
        [_, _, _] => Err(format!("`{s}` has a non-finite component")),
        _ => Err(format!("expected x,y,z, got {} values", parts.len())),
    }
}

/// Route `log` records to stderr.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    use simplelog::LevelFilter::{Debug, Info, Off};
    simplelog::TermLogger::init(
        if verbose { Debug } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
