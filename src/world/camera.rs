use glam::Vec3;

use crate::{math::orientation, sim::Keys};

/// Bank angle (in screen pixels of skew) the roll blends toward while a
/// turn key is held.
const ROLL_TARGET: f32 = 70.0;
/// Yaw velocity target while turning (radians / second).
const YAW_TARGET: f32 = 1.0;
/// Pitch rate target while the stick is pushed or pulled (tilt / second).
const PITCH_TARGET: f32 = 2.0;
/// Every control value keeps this fraction of itself per update.
const DAMPING: f32 = 0.9;

/// How the yaw and pitch controls chase their targets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Smoothing {
    /// Fixed blend per update (0.1 yaw, 0.2 pitch) regardless of `dt`.
    /// The feel depends on the update rate; it matches the classic demo at
    /// 60 Hz.
    #[default]
    PerFrame,
    /// Blend `1 - exp(-dt / tau)` per update, independent of the update rate.
    TimeConstant { yaw_tau: f32, pitch_tau: f32 },
}

impl Smoothing {
    /// Time constants that reproduce `PerFrame` exactly at 60 Hz.
    pub fn time_constant_60hz() -> Self {
        let dt = 1.0 / 60.0_f32;
        Smoothing::TimeConstant {
            yaw_tau: -dt / (1.0 - 0.1_f32).ln(),
            pitch_tau: -dt / (1.0 - 0.2_f32).ln(),
        }
    }

    /// Blend factors `(yaw, pitch)` for an update of length `dt`.
    pub fn factors(self, dt: f32) -> (f32, f32) {
        match self {
            Smoothing::PerFrame => (0.1, 0.2),
            Smoothing::TimeConstant { yaw_tau, pitch_tau } => {
                (1.0 - (-dt / yaw_tau).exp(), 1.0 - (-dt / pitch_tau).exp())
            }
        }
    }
}

#[inline]
fn blend(from: f32, to: f32, t: f32) -> f32 {
    (1.0 - t) * from + to * t
}

/// Flying view-point over the heightmap.
///
/// * `pos`: x, y on the ground plane (texel units), z = altitude in height
///   units (a heightmap texel of 1.0 is 255 high).
/// * `rot`: x = tilt in `0..=2` (1 = level), y = yaw (radians, 0 looks
///   down +Y), z = roll expressed as screen-row skew across the view.
/// * `turning`: smoothed controls, x = pitch rate, y = yaw velocity,
///   z = roll target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub rot: Vec3,
    pub turning: Vec3,
    /// Horizontal field of view, radians.
    pub fov: f32,
    pub move_speed: f32,
    /// Tuning value carried with the camera; the update law does not read it.
    pub turn_speed: f32,
    /// Far end of the depth march, texel units.
    pub distance: f32,
    /// Pixels per height unit at depth 1.
    pub scale_height: f32,
    pub smoothing: Smoothing,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Vec3::new(160.0, 120.0, 120.0),
            rot: Vec3::new(1.0, 0.0, 0.0),
            turning: Vec3::ZERO,
            fov: 90_f32.to_radians(),
            move_speed: 60.0,
            turn_speed: 20.0,
            distance: 800.0,
            scale_height: 120.0,
            smoothing: Smoothing::PerFrame,
        }
    }
}

impl Camera {
    #[inline]
    pub fn tilt(&self) -> f32 {
        self.rot.x
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rot.y
    }

    #[inline]
    pub fn roll(&self) -> f32 {
        self.rot.z
    }

    /// Unit direction of flight (pitch included).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        orientation(self.tilt(), self.yaw()) * Vec3::Y
    }

    /// Ground-plane heading, the direction the depth slices advance along.
    #[inline]
    pub fn heading(&self) -> Vec3 {
        let (s, c) = self.yaw().sin_cos();
        Vec3::new(s, c, 0.0)
    }

    /// Half-width of the projection plane at unit depth, rotated with yaw.
    #[inline]
    pub fn plane(&self) -> Vec3 {
        Vec3::new(0.0, self.half_fov_tan(), 0.0).rotate_z(-self.yaw())
    }

    #[inline]
    pub fn half_fov_tan(&self) -> f32 {
        (self.fov * 0.5).tan()
    }

    /// Distance to the projection plane for a viewport `w` pixels wide.
    #[inline]
    pub fn plane_distance(&self, w: usize) -> f32 {
        (w as f32) * 0.5 / self.half_fov_tan()
    }

    /// Screen row of the horizon for a viewport `h` pixels tall.
    #[inline]
    pub fn horizon_row(&self, h: usize) -> f32 {
        self.tilt() * (h as f32) * 0.5
    }

    /*──────────────────────── per-frame update ──────────────────────*/

    /// Advance one update of length `dt` with `held` keys down.
    pub fn update(&mut self, held: Keys, dt: f32) {
        let dir = self.forward();
        let (yaw_fac, pitch_fac) = self.smoothing.factors(dt);

        if held.contains(Keys::LEFT) {
            self.turning.y = blend(self.turning.y, YAW_TARGET, yaw_fac);
            self.turning.z = blend(self.turning.z, ROLL_TARGET, dt);
        } else if held.contains(Keys::RIGHT) {
            self.turning.y = blend(self.turning.y, -YAW_TARGET, yaw_fac);
            self.turning.z = blend(self.turning.z, -ROLL_TARGET, dt);
        }

        // The pitch blend starts from the yaw velocity, not the pitch rate.
        if held.contains(Keys::DOWN) {
            self.turning.x = blend(self.turning.y, PITCH_TARGET, pitch_fac);
        } else if held.contains(Keys::UP) {
            self.turning.x = blend(self.turning.y, -PITCH_TARGET, pitch_fac);
        }

        self.pos += dir * dt * self.move_speed;
        self.rot.x = (self.rot.x + self.turning.x * dt).clamp(0.0, 2.0);
        self.rot.y += self.turning.y * dt;
        self.rot.z = self.turning.z;

        self.turning *= DAMPING;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DT;
    use std::f32::consts::FRAC_PI_2;

    const SIM_FRAMES: usize = 60;

    fn still_camera() -> Camera {
        Camera {
            move_speed: 0.0,
            ..Camera::default()
        }
    }

    #[test]
    fn forward_is_unit_for_any_tilt() {
        let mut cam = Camera::default();
        for tilt in [0.0, 0.5, 1.0, 1.7, 2.0] {
            cam.rot = Vec3::new(tilt, 0.8, 0.0);
            assert!((cam.forward().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn heading_matches_level_forward() {
        let mut cam = Camera::default();
        cam.rot.y = 0.6;
        assert!(cam.heading().abs_diff_eq(cam.forward(), 1e-5));
    }

    #[test]
    fn heading_angle_is_measured_from_x() {
        use crate::math::Vec3Ext;
        let mut cam = Camera::default();
        for yaw in [0.0, 0.6, -1.2] {
            cam.rot.y = yaw;
            assert!((cam.heading().angle_z() - (FRAC_PI_2 - yaw)).abs() < 1e-5);
        }
    }

    #[test]
    fn plane_is_scaled_heading() {
        let mut cam = Camera::default();
        cam.rot.y = 1.3;
        let plane = cam.plane();
        assert!(plane.abs_diff_eq(cam.heading() * cam.half_fov_tan(), 1e-5));
    }

    #[test]
    fn plane_distance_at_90_deg() {
        let cam = Camera::default();
        assert!((cam.plane_distance(800) - 400.0).abs() < 1e-3);
        assert_eq!(cam.horizon_row(600), 300.0);
    }

    #[test]
    fn level_flight_moves_along_heading() {
        let mut cam = Camera::default();
        cam.rot.y = FRAC_PI_2;
        let start = cam.pos;
        cam.update(Keys::empty(), 0.5);
        assert!((cam.pos - start).abs_diff_eq(Vec3::new(30.0, 0.0, 0.0), 1e-3));
    }

    #[test]
    fn turning_left_saturates_below_one_then_coasts() {
        let mut cam = still_camera();
        let mut peak: f32 = 0.0;
        for _ in 0..SIM_FRAMES {
            cam.update(Keys::LEFT, DT);
            peak = peak.max(cam.turning.y);
            assert!(cam.turning.y < 1.0);
        }
        assert!(peak > 0.4, "yaw velocity never built up: {peak}");
        assert!(cam.rot.y > 0.0 && cam.roll() > 0.0);

        for _ in 0..SIM_FRAMES {
            cam.update(Keys::empty(), DT);
        }
        assert!(cam.turning.y.abs() < 1e-2, "{}", cam.turning.y);
        assert!(cam.turning.z.abs() < 5e-2);
    }

    #[test]
    fn right_turns_the_other_way() {
        let mut cam = still_camera();
        for _ in 0..30 {
            cam.update(Keys::RIGHT, DT);
        }
        assert!(cam.turning.y < 0.0 && cam.rot.y < 0.0 && cam.roll() < 0.0);
    }

    #[test]
    fn tilt_stays_in_range() {
        let mut cam = still_camera();
        for _ in 0..600 {
            cam.update(Keys::DOWN, DT);
        }
        assert_eq!(cam.tilt(), 2.0);
        for _ in 0..600 {
            cam.update(Keys::UP, DT);
        }
        assert_eq!(cam.tilt(), 0.0);
    }

    #[test]
    fn time_constant_matches_per_frame_at_60hz() {
        let (yaw, pitch) = Smoothing::time_constant_60hz().factors(1.0 / 60.0);
        assert!((yaw - 0.1).abs() < 1e-5);
        assert!((pitch - 0.2).abs() < 1e-5);

        let mut a = still_camera();
        let mut b = Camera {
            smoothing: Smoothing::time_constant_60hz(),
            ..still_camera()
        };
        for _ in 0..45 {
            a.update(Keys::LEFT | Keys::DOWN, 1.0 / 60.0);
            b.update(Keys::LEFT | Keys::DOWN, 1.0 / 60.0);
        }
        assert!(a.rot.abs_diff_eq(b.rot, 1e-3));
    }

    #[test]
    fn time_constant_is_rate_independent() {
        let s = Smoothing::time_constant_60hz();
        let (one, _) = s.factors(1.0 / 30.0);
        let (half, _) = s.factors(1.0 / 60.0);
        // two half steps compound to one full step
        assert!(((1.0 - half) * (1.0 - half) - (1.0 - one)).abs() < 1e-5);
    }
}
