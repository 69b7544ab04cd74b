//! Supports loading the rig definition from a JSON file (optional)

use std::path::Path;

use serde::Deserialize;

use crate::config_error::ConfigError;
use crate::easing::EaseProfile;
use crate::motion_traits::{DOF, POSE_AT_ZERO, Pose};
use crate::rig::Rig;

fn default_initial() -> Vec<f64> {
    vec![0.0; DOF]
}
fn default_profile() -> String {
    "quintic".to_string()
}

#[derive(Deserialize)]
struct Root {
    /// Display names, base to tool order, exactly one per axis.
    joints: Vec<String>,
    #[serde(default = "default_initial")]
    initial: Vec<f64>,
    #[serde(default = "default_profile")]
    profile: String,
}

impl Rig {
    /// Reads the rig definition from a JSON file. A file like this is
    /// supported:
    /// ```json
    /// {
    ///   "joints": ["KukaTheta-1", "KukaTheta-2", "KukaTheta-3",
    ///              "KukaTheta-4", "KukaTheta-5", "KukaTheta-6"],
    ///   "initial": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    ///   "profile": "quintic"
    /// }
    /// ```
    /// `initial` (starting angles in degrees) and `profile` (`quintic` or
    /// `cubic`) are optional.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let root: Root = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}", e)))?;

        if root.joints.len() != DOF {
            return Err(ConfigError::InvalidLength {
                expected: DOF,
                found: root.joints.len(),
            });
        }
        if root.initial.len() != DOF {
            return Err(ConfigError::InvalidLength {
                expected: DOF,
                found: root.initial.len(),
            });
        }
        for (i, angle) in root.initial.iter().enumerate() {
            if !angle.is_finite() {
                return Err(ConfigError::BadAngle(format!(
                    "initial[{}] must be finite (got {})",
                    i, angle
                )));
            }
        }

        let profile = match root.profile.as_str() {
            "quintic" => EaseProfile::Quintic,
            "cubic" => EaseProfile::CubicInOut,
            other => return Err(ConfigError::BadProfile(other.to_string())),
        };

        let mut initial: Pose = POSE_AT_ZERO;
        initial.copy_from_slice(&root.initial);
        let names: [&str; DOF] = std::array::from_fn(|i| root.joints[i].as_str());

        Ok(Rig::with_start(names, initial, profile))
    }
}
