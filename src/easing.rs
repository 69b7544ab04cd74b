//! Easing functions shaping the acceleration profile of a move.

/// Quintic smoothstep: `t^3 (t (6t - 15) + 10)`. First and second derivative
/// are zero at both ends, so a move ramps in and out without a velocity or
/// acceleration jump.
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Cubic ease in out. Softer than the quintic shape; the second derivative
/// does not vanish at the ends.
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Easing shape used for every joint of a rig. One rig keeps a single shape
/// for its whole lifetime; shapes are never mixed within one trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EaseProfile {
    /// Quintic smoothstep raised to the sharpness exponent. Sharpness 1.0 is
    /// plain smoothstep; larger values slow the ends down further and speed
    /// the middle up.
    #[default]
    Quintic,

    /// Cubic ease in out. The sharpness parameter is ignored.
    CubicInOut,
}

impl EaseProfile {
    /// Maps normalized time in [0, 1] to normalized progress in [0, 1],
    /// with `apply(0) = 0` and `apply(1) = 1`, monotonically non decreasing.
    /// The sign of `sharpness` is ignored.
    pub fn apply(&self, t: f64, sharpness: f64) -> f64 {
        match self {
            EaseProfile::Quintic => quintic(t).powf(sharpness.abs()),
            EaseProfile::CubicInOut => cubic_in_out(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_fixed() {
        for profile in [EaseProfile::Quintic, EaseProfile::CubicInOut] {
            for sharpness in [0.5, 1.0, 2.0] {
                assert_eq!(profile.apply(0.0, sharpness), 0.0);
                assert_eq!(profile.apply(1.0, sharpness), 1.0);
            }
        }
    }

    #[test]
    fn test_quintic_symmetric_at_midpoint() {
        assert_eq!(quintic(0.5), 0.5);
        assert_eq!(EaseProfile::Quintic.apply(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_monotonic_on_unit_interval() {
        for profile in [EaseProfile::Quintic, EaseProfile::CubicInOut] {
            let mut previous = 0.0;
            for i in 0..=1000 {
                let value = profile.apply(i as f64 / 1000.0, 1.5);
                assert!(value >= previous, "{:?} decreased at i = {}", profile, i);
                previous = value;
            }
        }
    }

    #[test]
    fn test_sharpness_slows_the_ramp_in() {
        // A larger exponent keeps progress lower in the first half.
        let plain = EaseProfile::Quintic.apply(0.25, 1.0);
        let sharp = EaseProfile::Quintic.apply(0.25, 2.0);
        assert!(sharp < plain);
    }

    #[test]
    fn test_negative_sharpness_treated_as_positive() {
        assert_eq!(
            EaseProfile::Quintic.apply(0.3, -2.0),
            EaseProfile::Quintic.apply(0.3, 2.0)
        );
    }
}
