use glam::Mat3;
use std::f32::consts::FRAC_PI_4;

/// Map the camera tilt (`0.0 ..= 2.0`, 1.0 = level) onto a pitch angle in
/// `-45° ..= +45°`.
#[inline]
pub fn pitch_from_tilt(tilt: f32) -> f32 {
    (tilt - 1.0) * FRAC_PI_4
}

/// Camera orientation: pitch around X first, then heading around Z.
///
/// ```text
/// orientation = RotationZ(-yaw) * RotationX(pitch(tilt))
/// ```
///
/// Multiplying the canonical forward `(0, 1, 0)` by this gives the direction
/// of flight; yaw 0 looks down +Y and positive yaw turns toward +X.
#[inline]
pub fn orientation(tilt: f32, yaw: f32) -> Mat3 {
    Mat3::from_rotation_z(-yaw) * Mat3::from_rotation_x(pitch_from_tilt(tilt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn rotation_z_inverse_is_identity() {
        for theta in [0.0_f32, 0.1, 1.0, -2.7, 6.0, 100.0] {
            let m = Mat3::from_rotation_z(theta) * Mat3::from_rotation_z(-theta);
            assert!(m.abs_diff_eq(Mat3::IDENTITY, EPS), "theta = {theta}");
        }
    }

    #[test]
    fn transpose_of_rotation_is_inverse() {
        let m = orientation(0.3, 1.1);
        assert!((m * m.transpose()).abs_diff_eq(Mat3::IDENTITY, EPS));
    }

    #[test]
    fn level_camera_looks_along_y() {
        let dir = orientation(1.0, 0.0) * Vec3::Y;
        assert!(dir.abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn quarter_yaw_looks_along_x() {
        let dir = orientation(1.0, FRAC_PI_2) * Vec3::Y;
        assert!(dir.abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn tilt_extremes_pitch_45_degrees() {
        let down = orientation(0.0, 0.0) * Vec3::Y;
        let up = orientation(2.0, 0.0) * Vec3::Y;
        assert!(down.z < 0.0 && up.z > 0.0);
        assert!((down.y - down.z.abs()).abs() < EPS);
        assert!((down.length() - 1.0).abs() < EPS);
    }
}
