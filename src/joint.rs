//! Single joint state and the motion sampling operation.

use crate::easing::EaseProfile;

/// One mechanism axis holding its current absolute angle in degrees.
///
/// `theta` always reflects the angle after the most recently completed move,
/// never a mid sequence value.
#[derive(Debug, Clone)]
pub struct Joint {
    /// Stable zero based position in base to tool order.
    pub id: usize,

    /// Display name, used for the header row of the recorded table.
    pub name: String,

    /// Current absolute angle, degrees.
    pub theta: f64,
}

impl Joint {
    pub fn new(id: usize, name: &str) -> Self {
        Joint {
            id,
            name: name.to_string(),
            theta: 0.0,
        }
    }

    /// Samples a relative move of `delta_theta` degrees spread over `steps`
    /// discrete steps. The sample at index `i` (1 based) corresponds to
    /// normalized time `i / steps`; the last sample lands exactly on
    /// `theta + delta_theta`.
    ///
    /// Negative step counts are treated as zero. The end angle is committed
    /// to `theta` once, after sampling, even when the returned sequence is
    /// empty. All inputs are accepted; there are no joint limits to violate
    /// and callers are trusted to pass sane angles.
    pub fn advance(
        &mut self,
        delta_theta: f64,
        sharpness: f64,
        steps: i32,
        profile: EaseProfile,
    ) -> Vec<f64> {
        let steps = steps.max(0) as usize;
        let start = self.theta;
        let end = start + delta_theta;

        let mut samples = Vec::with_capacity(steps);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            samples.push(start + (end - start) * profile.apply(t, sharpness));
        }

        self.theta = end;
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_sample_is_exact() {
        for steps in [1, 2, 7, 60] {
            let mut joint = Joint::new(0, "axis");
            let samples = joint.advance(38.5, 1.0, steps, EaseProfile::Quintic);
            assert_eq!(samples.len(), steps as usize);
            assert_eq!(*samples.last().unwrap(), 38.5);
            assert_eq!(joint.theta, 38.5);
        }
    }

    #[test]
    fn test_zero_steps_still_commits() {
        let mut joint = Joint::new(0, "axis");
        let samples = joint.advance(-90.0, 1.0, 0, EaseProfile::Quintic);
        assert!(samples.is_empty());
        assert_eq!(joint.theta, -90.0);
    }

    #[test]
    fn test_negative_steps_clamped_to_zero() {
        let mut joint = Joint::new(0, "axis");
        let samples = joint.advance(15.0, 1.0, -4, EaseProfile::Quintic);
        assert!(samples.is_empty());
        assert_eq!(joint.theta, 15.0);
    }

    #[test]
    fn test_positive_delta_samples_non_decreasing() {
        let mut joint = Joint::new(0, "axis");
        let samples = joint.advance(90.0, 2.0, 50, EaseProfile::Quintic);
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_negative_delta_samples_non_increasing() {
        let mut joint = Joint::new(0, "axis");
        let samples = joint.advance(-90.0, 1.0, 50, EaseProfile::CubicInOut);
        for pair in samples.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_moves_accumulate_from_committed_angle() {
        let mut joint = Joint::new(0, "axis");
        joint.advance(30.0, 1.0, 10, EaseProfile::Quintic);
        let samples = joint.advance(30.0, 1.0, 10, EaseProfile::Quintic);
        assert_eq!(joint.theta, 60.0);
        assert!(samples[0] > 30.0 - 1e-9);
        assert_eq!(*samples.last().unwrap(), 60.0);
    }
}
