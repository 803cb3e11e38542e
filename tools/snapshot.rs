//! Render the terrain headless and save the last frame as a PNG.
//!
//! ```bash
//! cargo run --release --bin snapshot -- --out frame.png --frames 120 --hold left
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use voxel_terrain::{
    App,
    config::{Args, init_logging},
    math::Vec3Ext,
    renderer::FrameBuffer,
    sim::{DT, Keys},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Hold {
    Left,
    Right,
    Up,
    Down,
}

impl From<Hold> for Keys {
    fn from(h: Hold) -> Keys {
        match h {
            Hold::Left => Keys::LEFT,
            Hold::Right => Keys::RIGHT,
            Hold::Up => Keys::UP,
            Hold::Down => Keys::DOWN,
        }
    }
}

#[derive(Parser, Debug)]
struct Cli {
    #[command(flatten)]
    common: Args,

    /// Output image.
    #[arg(long, default_value = "snapshot.png")]
    out: PathBuf,

    /// Fixed updates to simulate before the frame is captured.
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Keys held for every simulated update.
    #[arg(long, value_enum)]
    hold: Vec<Hold>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose)?;
    let config = cli.common.into_config();

    let mut app = App::setup(&config).context("loading terrain textures")?;
    let (w, h) = (config.width, config.height);
    let mut fb = FrameBuffer::new(w, h);
    fb.set_held(cli.hold.into_iter().map(Keys::from).collect());

    for _ in 0..cli.frames {
        app.update(&fb, DT);
    }
    let stats = app.draw(&mut fb);

    let img = image::RgbaImage::from_raw(w as u32, h as u32, fb.to_rgba8())
        .context("frame buffer size does not match the image")?;
    img.save(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;

    info!(
        "wrote {} ({} slices, {} spans, camera at {:.1},{:.1},{:.1} heading {:.1} deg)",
        cli.out.display(),
        stats.slices,
        stats.spans,
        app.camera.pos.x,
        app.camera.pos.y,
        app.camera.pos.z,
        app.camera.heading().angle_z().to_degrees()
    );
    Ok(())
}
