//! Shared types of the motion pipeline and the trait at the recording seam.

use std::io;

/// Degrees of freedom. The mechanism topology is a fixed chain of six axes,
/// base to tool; the joint set never changes size or order after startup.
pub const DOF: usize = 6;

/// Full mechanism pose at one sampling instant: one absolute angle per joint,
/// in degrees, in base to tool order. One emitted trajectory row is one pose.
pub type Pose = [f64; DOF];

/// Pose with all joints at the zero angle.
pub const POSE_AT_ZERO: Pose = [0.0; DOF];

/// Receives the generated trajectory, one row per discrete time step, in
/// increasing time order. Implementations format and persist the rows; the
/// planner never needs to know where they go.
pub trait MotionSink {
    /// Accepts the header label row. Called once, before any row.
    fn write_header(&mut self, label: &str) -> io::Result<()>;

    /// Appends one full width row of absolute joint angles.
    fn write_row(&mut self, pose: &Pose) -> io::Result<()>;

    /// Flushes everything written so far. Must run on every exit path,
    /// including after a failed write, so earlier rows stay durable.
    fn close(&mut self) -> io::Result<()>;
}
