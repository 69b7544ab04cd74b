//! The ordered joint collection of the mechanism, with hardcoded presets.

use crate::easing::EaseProfile;
use crate::joint::Joint;
use crate::motion_traits::{DOF, Pose};

/// Addresses of the six axes, base to tool order. The numeric value is the
/// joint's position in every pose and every recorded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointId {
    Base = 0,
    Body,
    Arm,
    Wrist,
    Tool,
    Disk,
}

impl JointId {
    pub const ALL: [JointId; DOF] = [
        JointId::Base,
        JointId::Body,
        JointId::Arm,
        JointId::Wrist,
        JointId::Tool,
        JointId::Disk,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Caller owned mechanism state: exactly one [Joint] per axis, fixed size and
/// order for the lifetime of a run, plus the easing shape every move planned
/// through this rig uses. There is no global instance anywhere; whoever plans
/// moves holds the rig.
#[derive(Debug, Clone)]
pub struct Rig {
    joints: [Joint; DOF],
    profile: EaseProfile,
}

impl Rig {
    /// A rig with the given display names, all joints at the zero angle.
    pub fn new(names: [&str; DOF], profile: EaseProfile) -> Self {
        Rig {
            joints: std::array::from_fn(|i| Joint::new(i, names[i])),
            profile,
        }
    }

    /// A rig starting from a known pose rather than from zero.
    pub fn with_start(names: [&str; DOF], start: Pose, profile: EaseProfile) -> Self {
        let mut rig = Rig::new(names, profile);
        for i in 0..DOF {
            rig.joints[i].theta = start[i];
        }
        rig
    }

    /// The six joint fleet of the classic Kuka demo, quintic easing.
    pub fn kuka() -> Self {
        Rig::new(
            [
                "KukaTheta-1",
                "KukaTheta-2",
                "KukaTheta-3",
                "KukaTheta-4",
                "KukaTheta-5",
                "KukaTheta-6",
            ],
            EaseProfile::Quintic,
        )
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    pub(crate) fn joint_mut(&mut self, id: JointId) -> &mut Joint {
        &mut self.joints[id.index()]
    }

    pub fn profile(&self) -> EaseProfile {
        self.profile
    }

    /// Current absolute angle of every joint, in joint order.
    pub fn pose(&self) -> Pose {
        std::array::from_fn(|i| self.joints[i].theta)
    }
}

/// The header label row: joint names space separated, with one trailing
/// space. This is the first line of the recorded table.
pub fn label(joints: &[Joint]) -> String {
    let mut result = String::new();
    for joint in joints {
        result.push_str(&joint.name);
        result.push(' ');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_is_dense_and_ordered() {
        let rig = Rig::kuka();
        for (i, joint) in rig.joints().iter().enumerate() {
            assert_eq!(joint.id, i);
            assert_eq!(joint.theta, 0.0);
        }
        assert_eq!(rig.joint(JointId::Disk).name, "KukaTheta-6");
    }

    #[test]
    fn test_label_keeps_order_and_trailing_space() {
        let rig = Rig::new(["a", "b", "c", "d", "e", "f"], EaseProfile::Quintic);
        assert_eq!(label(rig.joints()), "a b c d e f ");
    }

    #[test]
    fn test_with_start_applies_initial_pose() {
        let start = [10.0, -20.0, 0.0, 5.0, 0.0, 90.0];
        let rig = Rig::with_start(
            ["a", "b", "c", "d", "e", "f"],
            start,
            EaseProfile::CubicInOut,
        );
        assert_eq!(rig.pose(), start);
        assert_eq!(rig.profile(), EaseProfile::CubicInOut);
    }

    #[test]
    fn test_joint_id_indices_cover_the_row() {
        for (i, id) in JointId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
