//! Fly over a heightmap.
//!
//! Controls  ←/→ = bank and turn  ↑/↓ = nose down/up  Esc = quit
//!
//! ```bash
//! cargo run --release -- --heightmap terrain.png --colormap color.png
//! ```

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use minifb::{Key, Window, WindowOptions};

use voxel_terrain::{
    App,
    config::{Args, init_logging},
    renderer::FrameBuffer,
    sim::{DT, FrameClock, Keys, SIM_FPS},
};

/// Window keys feeding each directional flag.
const KEY_MAP: [(Key, Keys); 4] = [
    (Key::Left, Keys::LEFT),
    (Key::Right, Keys::RIGHT),
    (Key::Up, Keys::UP),
    (Key::Down, Keys::DOWN),
];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    let config = args.into_config();

    let mut app = App::setup(&config).context("loading terrain textures")?;
    let (w, h) = (config.width, config.height);
    let mut fb = FrameBuffer::new(w, h);

    let mut win = Window::new("Voxel Terrain", w, h, WindowOptions::default())?;
    win.set_target_fps(SIM_FPS as usize);
    info!("{w}x{h} window open, {SIM_FPS} updates/s");

    let mut clock = FrameClock::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated draw time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we logged last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let held = KEY_MAP
            .iter()
            .filter(|(key, _)| win.is_key_down(*key))
            .fold(Keys::empty(), |acc, &(_, flag)| acc | flag);
        fb.set_held(held);

        for _ in 0..clock.pump() {
            app.update(&fb, DT);
        }

        let t0 = Instant::now();
        app.draw(&mut fb);
        acc_time += t0.elapsed();
        acc_frames += 1;

        win.update_with_buffer(fb.pixels(), w, h)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let stats = app.last_stats();
            debug!(
                "avg draw: {avg_ms:.2} ms ({:.1} FPS), {} slices, {} spans",
                1000.0 / avg_ms,
                stats.slices,
                stats.spans
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
