use glam::Vec3;
use log::trace;

use crate::{
    math::Color,
    renderer::Canvas,
    terrain::DepthStep,
    world::{Camera, Texture},
};

/// Height units per heightmap channel step (channel 1.0 = 255 units).
const HEIGHT_RANGE: f32 = 255.0;

/// Everything one terrain frame reads.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub camera: &'a Camera,
    pub heightmap: &'a Texture,
    pub colormap: &'a Texture,
    /// Clear colour; distant terrain fades into it.
    pub background: Color,
}

/// What the last frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub slices: u32,
    pub spans: u32,
}

/// Front-to-back heightmap ray marcher.
///
/// Owns the per-column occlusion buffer; it is resized when the viewport
/// changes and reset at the start of every frame.
#[derive(Debug, Default)]
pub struct Rasterizer {
    occlusion: Vec<f32>,
    step: DepthStep,
}

impl Rasterizer {
    pub fn new(step: DepthStep) -> Self {
        Self {
            occlusion: Vec::new(),
            step,
        }
    }

    /// Topmost row drawn per column by the last frame.
    #[inline]
    pub fn occlusion(&self) -> &[f32] {
        &self.occlusion
    }

    fn begin_frame(&mut self, w: usize, h: usize) {
        self.occlusion.clear();
        self.occlusion.resize(w, h as f32);
    }

    /// Clear `canvas` and draw the terrain seen from `scene.camera`.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, scene: &Scene) -> FrameStats {
        let w = canvas.width();
        let h = canvas.height();
        canvas.clear(scene.background);
        self.begin_frame(w, h);

        let mut stats = FrameStats::default();
        if w == 0 || h == 0 {
            return stats;
        }

        let cam = scene.camera;
        let w_f = w as f32;
        let h_f = h as f32;

        let thf = cam.half_fov_tan();
        let plane = cam.plane();
        let perp = Vec3::new(-plane.y, plane.x, 0.0);
        let dir = cam.heading();
        let horizon = cam.horizon_row(h);
        let roll = cam.roll();

        for slice in self.step.slices(cam.distance) {
            stats.slices += 1;

            let sz = slice.z / thf;
            let lz = (sz - 1.0) / cam.distance * slice.dz;
            let invz = cam.scale_height / slice.z;

            // constant across the slice
            let fog = (1.0 / (lz * lz).exp()).clamp(0.0, 1.0);

            let center = cam.pos + dir * sz;
            let left = center - perp * sz;
            let right = center + perp * sz;

            for (x, top) in self.occlusion.iter_mut().enumerate() {
                let xf = x as f32 / w_f;
                let p = left.lerp(right, xf);

                let height = scene.heightmap.get_f(p.x, p.y).r;
                let row = (cam.pos.z - height * HEIGHT_RANGE) * invz
                    + horizon
                    + roll * (xf * 2.0 - 1.0);
                if !(0.0..=h_f).contains(&row) {
                    continue;
                }

                if row < *top {
                    let color = scene
                        .background
                        .lerp(scene.colormap.get_f(p.x, p.y), fog);
                    canvas.line(x as f32, row, x as f32, *top, color);
                    *top = row;
                    stats.spans += 1;
                }
            }
        }

        trace!("terrain: {} slices, {} spans", stats.slices, stats.spans);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Keys;
    use pretty_assertions::assert_eq;

    /// Canvas that records every span instead of drawing it.
    struct Recorder {
        w: usize,
        h: usize,
        clears: Vec<Color>,
        spans: Vec<(f32, f32, f32, Color)>,
    }

    impl Recorder {
        fn new(w: usize, h: usize) -> Self {
            Self {
                w,
                h,
                clears: Vec::new(),
                spans: Vec::new(),
            }
        }

        fn column(&self, x: usize) -> Vec<(f32, f32)> {
            self.spans
                .iter()
                .filter(|s| s.0 == x as f32)
                .map(|s| (s.1, s.2))
                .collect()
        }
    }

    impl Canvas for Recorder {
        fn width(&self) -> usize {
            self.w
        }
        fn height(&self) -> usize {
            self.h
        }
        fn is_held(&self, _keys: Keys) -> bool {
            false
        }
        fn clear(&mut self, color: Color) {
            self.clears.push(color);
        }
        fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
            assert_eq!(x0, x1, "terrain spans are vertical");
            self.spans.push((x0, y0, y1, color));
        }
        fn text(&mut self, _text: &str, _x: i32, _y: i32) {}
    }

    const BG: Color = Color::rgb(0.45, 0.1, 0.05);

    fn flat(value: u8, size: usize) -> Texture {
        Texture::from_rgba8(size, size, [value, value, value, 255].repeat(size * size)).unwrap()
    }

    fn hills(size: usize) -> Texture {
        let mut tex = Texture::new(size, size);
        for y in 0..size as i64 {
            for x in 0..size as i64 {
                let v = ((x as f32 * 0.21).sin() * (y as f32 * 0.13).cos() + 1.0) * 0.5;
                tex.set(x, y, Color::rgb(v, v, v));
            }
        }
        tex
    }

    fn draw(cam: &Camera, heightmap: &Texture, w: usize, h: usize) -> (Rasterizer, Recorder) {
        let colormap = flat(200, 8);
        let mut rast = Rasterizer::default();
        let mut rec = Recorder::new(w, h);
        rast.draw(
            &mut rec,
            &Scene {
                camera: cam,
                heightmap,
                colormap: &colormap,
                background: BG,
            },
        );
        (rast, rec)
    }

    #[test]
    fn flat_ground_below_eye_is_a_level_line_under_the_horizon() {
        let cam = Camera {
            pos: Vec3::new(160.0, 120.0, 200.0),
            ..Camera::default()
        };
        let (rast, rec) = draw(&cam, &flat(128, 16), 80, 60);

        assert_eq!(rec.clears, vec![BG]);
        let occ = rast.occlusion();
        assert_eq!(occ.len(), 80);
        let first = occ[0];
        assert!(occ.iter().all(|&o| (o - first).abs() < 1e-3), "{occ:?}");
        assert!(first > cam.horizon_row(60) && first < 60.0);
    }

    #[test]
    fn spans_per_column_only_climb() {
        let mut cam = Camera::default();
        cam.pos.z = 260.0;
        cam.rot = Vec3::new(0.8, 0.4, 12.0);
        let (rast, rec) = draw(&cam, &hills(64), 64, 48);

        for x in 0..64 {
            let col = rec.column(x);
            let mut prev = 48.0;
            for &(top, bottom) in &col {
                assert_eq!(bottom, prev, "column {x} span must start at the old top");
                assert!(top < prev, "column {x} drew below its occlusion");
                prev = top;
            }
            assert_eq!(rast.occlusion()[x], prev);
            assert!(rast.occlusion()[x] <= 48.0);
        }
    }

    #[test]
    fn terrain_above_eye_only_draws_above_the_horizon() {
        // camera below a flat plateau: every projected row sits above the horizon
        let cam = Camera::default();
        let (rast, rec) = draw(&cam, &flat(128, 16), 40, 30);
        let horizon = cam.horizon_row(30);
        assert!(!rec.spans.is_empty());
        assert!(rec.spans.iter().all(|s| s.1 < horizon));
        assert!(rast.occlusion().iter().all(|&o| o < horizon));
    }

    #[test]
    fn fog_fades_toward_background_with_depth() {
        let cam = Camera {
            pos: Vec3::new(0.0, 0.0, 400.0),
            ..Camera::default()
        };
        let (_, rec) = draw(&cam, &flat(0, 8), 16, 200);
        // spans are recorded front to back; later ones are farther away
        let column: Vec<Color> = rec.spans.iter().filter(|s| s.0 == 8.0).map(|s| s.3).collect();
        assert!(column.len() > 2);
        let (near_color, far_color) = (column[0], column[column.len() - 1]);
        let dist = |c: Color| (c.r - BG.r).abs() + (c.g - BG.g).abs() + (c.b - BG.b).abs();
        assert!(dist(far_color) < dist(near_color));
    }

    #[test]
    fn uniform_depth_step_visits_every_unit() {
        let cam = Camera {
            distance: 50.0,
            ..Camera::default()
        };
        let heightmap = flat(0, 4);
        let mut rast = Rasterizer::new(DepthStep {
            initial: 1.0,
            growth: 0.0,
        });
        let stats = rast.draw(
            &mut Recorder::new(8, 8),
            &Scene {
                camera: &cam,
                heightmap: &heightmap,
                colormap: &heightmap,
                background: BG,
            },
        );
        assert_eq!(stats.slices, 49);
    }

    #[test]
    fn empty_viewport_draws_nothing() {
        let (rast, rec) = draw(&Camera::default(), &flat(10, 4), 0, 0);
        assert!(rec.spans.is_empty());
        assert!(rast.occlusion().is_empty());
    }

    #[test]
    fn empty_heightmap_is_ground_level_zero() {
        let cam = Camera {
            pos: Vec3::new(0.0, 0.0, 50.0),
            ..Camera::default()
        };
        let (rast, _) = draw(&cam, &Texture::default(), 20, 20);
        assert!(rast.occlusion().iter().all(|&o| o > cam.horizon_row(20)));
    }

    #[test]
    fn occlusion_resets_between_frames() {
        let cam = Camera {
            pos: Vec3::new(0.0, 0.0, 200.0),
            ..Camera::default()
        };
        let heightmap = flat(128, 8);
        let colormap = flat(90, 8);
        let scene = Scene {
            camera: &cam,
            heightmap: &heightmap,
            colormap: &colormap,
            background: BG,
        };
        let mut rast = Rasterizer::default();
        let mut rec = Recorder::new(10, 10);
        let a = rast.draw(&mut rec, &scene);
        let first = rast.occlusion().to_vec();
        let b = rast.draw(&mut rec, &scene);
        assert_eq!(a, b);
        assert_eq!(rast.occlusion(), first.as_slice());
    }
}
