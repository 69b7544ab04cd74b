//! Synchronization of concurrent joint moves into full width rows.

use tracing::debug;

use crate::motion_traits::{DOF, Pose};
use crate::rig::{JointId, Rig};

/// One joint move to be executed within a batch. Transient; consumed by the
/// planner. Requests within one batch must address distinct joints (duplicate
/// ids are unsupported).
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest {
    pub joint: JointId,

    /// Signed relative displacement, degrees.
    pub delta_theta: f64,

    /// Ease sharpness exponent, see [crate::easing::EaseProfile].
    pub sharpness: f64,

    /// Requested number of samples. Negative counts are treated as zero.
    pub steps: i32,
}

impl Rig {
    /// Plans a batch of logically simultaneous moves and merges them into one
    /// time aligned trajectory: one row per step, every row covering all six
    /// joints in joint order.
    ///
    /// The batch is synchronized to the longest request. A joint whose own
    /// move finishes earlier holds its final angle for the remaining rows; a
    /// joint without a request holds its current angle throughout. An empty
    /// batch produces no rows and changes nothing.
    ///
    /// Every requested joint has its end angle committed even when the batch
    /// emits no rows at all (all step counts zero).
    pub fn plan_batch(&mut self, requests: &[MoveRequest]) -> Vec<Pose> {
        if requests.is_empty() {
            return Vec::new();
        }

        let max_steps = requests
            .iter()
            .map(|request| request.steps.max(0))
            .max()
            .unwrap_or(0) as usize;
        debug!("batch: {} requests, {} rows", requests.len(), max_steps);

        let profile = self.profile();
        let mut columns: [Option<Vec<f64>>; DOF] = std::array::from_fn(|_| None);
        for request in requests {
            let samples = self.joint_mut(request.joint).advance(
                request.delta_theta,
                request.sharpness,
                request.steps,
                profile,
            );
            columns[request.joint.index()] = Some(samples);
        }

        // Row assembly. Joints that finished early repeat their last sample;
        // a zero step request has no last sample and behaves like an absent
        // joint, a constant column at the committed angle.
        let mut rows = Vec::with_capacity(max_steps);
        for step in 0..max_steps {
            let mut row: Pose = [0.0; DOF];
            for (index, column) in columns.iter().enumerate() {
                row[index] = match column {
                    Some(samples) => samples
                        .get(step)
                        .or_else(|| samples.last())
                        .copied()
                        .unwrap_or(self.joints()[index].theta),
                    None => self.joints()[index].theta,
                };
            }
            rows.push(row);
        }
        rows
    }

    /// Plans a single joint move with the same row format as a batch: full
    /// mechanism width, every other joint held at its current angle.
    pub fn plan_single(&mut self, request: MoveRequest) -> Vec<Pose> {
        self.plan_batch(&[request])
    }
}
