/// Sampling-density curve of the depth march.
///
/// Slices start `initial` apart and every slice widens the step by
/// `growth`, so nearby terrain is sampled densely and the far field
/// coarsely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStep {
    pub initial: f32,
    pub growth: f32,
}

impl Default for DepthStep {
    fn default() -> Self {
        Self {
            initial: 1.0,
            growth: 0.001,
        }
    }
}

/// One depth slice: distance `z` from the camera and the step `dz` that
/// was used to reach the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub z: f32,
    pub dz: f32,
}

impl DepthStep {
    /// Slices from `z = 1` while `z < distance`.
    ///
    /// The step grows *before* it is added, so the second slice sits at
    /// `1 + initial + growth`.
    pub fn slices(self, distance: f32) -> Slices {
        Slices {
            z: 1.0,
            dz: self.initial,
            growth: self.growth,
            distance,
        }
    }
}

/// Iterator returned by [`DepthStep::slices`].
#[derive(Clone, Debug)]
pub struct Slices {
    z: f32,
    dz: f32,
    growth: f32,
    distance: f32,
}

impl Iterator for Slices {
    type Item = Slice;

    fn next(&mut self) -> Option<Slice> {
        // non-positive or non-finite steps and distances never reach the far plane
        if !self.distance.is_finite() || !self.dz.is_finite() {
            return None;
        }
        if self.z >= self.distance || self.dz <= 0.0 {
            return None;
        }
        let slice = Slice {
            z: self.z,
            dz: self.dz,
        };
        self.dz += self.growth;
        self.z += self.dz;
        Some(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slices_follow_the_growing_step() {
        let s: Vec<Slice> = DepthStep::default().slices(800.0).take(3).collect();
        assert_eq!(s[0], Slice { z: 1.0, dz: 1.0 });
        assert!((s[1].z - 2.001).abs() < 1e-5);
        assert!((s[1].dz - 1.001).abs() < 1e-6);
        assert!((s[2].z - 3.003).abs() < 1e-4);
    }

    #[test]
    fn stops_before_distance() {
        let all: Vec<Slice> = DepthStep::default().slices(800.0).collect();
        let last = all.last().unwrap();
        assert!(last.z < 800.0);
        assert!(last.z + last.dz + 0.001 >= 800.0);
        // quadratic growth cuts the slice count well below the distance
        assert!(all.len() < 800 && all.len() > 500, "{}", all.len());
    }

    #[test]
    fn constant_step_is_linear() {
        let step = DepthStep {
            initial: 2.0,
            growth: 0.0,
        };
        let zs: Vec<f32> = step.slices(9.0).map(|s| s.z).collect();
        assert_eq!(zs, vec![1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn degenerate_step_yields_nothing() {
        let step = DepthStep {
            initial: 0.0,
            growth: 0.0,
        };
        assert_eq!(step.slices(100.0).count(), 0);
    }

    #[test]
    fn non_finite_input_yields_nothing() {
        let step = DepthStep::default();
        assert_eq!(step.slices(f32::NAN).count(), 0);
        assert_eq!(step.slices(f32::INFINITY).count(), 0);

        let nan_growth = DepthStep {
            initial: 1.0,
            growth: f32::NAN,
        };
        assert_eq!(nan_growth.slices(800.0).count(), 1);
    }
}
