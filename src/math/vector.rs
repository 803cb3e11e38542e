use glam::Vec3;

/// Planar heading on top of [`glam::Vec3`].
///
/// Axis rotations are glam's own `rotate_x/y/z`: right-handed, angle in
/// radians. `normalize()` also comes from glam unchanged: a zero-length
/// input is a caller bug and yields NaNs.
pub trait Vec3Ext {
    /// Heading on the X-Y plane, `atan2(y, x)`.
    fn angle_z(self) -> f32;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn angle_z(self) -> f32 {
        self.y.atan2(self.x)
    }
}
