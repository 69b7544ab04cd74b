//! Facade pairing the mechanism state with a recording sink.

use std::io;

use crate::motion_traits::{MotionSink, Pose};
use crate::rig::{JointId, Rig, label};
use crate::trajectory::MoveRequest;

/// Owns the rig and streams every planned row to the sink, so a sequence of
/// move calls builds up one continuous recorded trajectory. The header label
/// row is written on construction, before any row.
///
/// Moves are planned and recorded to completion before the next one starts;
/// there is no background execution and no cancellation.
pub struct Manipulator {
    rig: Rig,
    sink: Box<dyn MotionSink>,
}

impl Manipulator {
    pub fn new(rig: Rig, mut sink: Box<dyn MotionSink>) -> io::Result<Self> {
        sink.write_header(&label(rig.joints()))?;
        Ok(Manipulator { rig, sink })
    }

    /// Moves a single joint. Every other joint is held at its current angle,
    /// so the recorded rows have the same full mechanism width as a batch.
    pub fn move_joint(
        &mut self,
        joint: JointId,
        delta_theta: f64,
        sharpness: f64,
        steps: i32,
    ) -> io::Result<()> {
        let rows = self.rig.plan_single(MoveRequest {
            joint,
            delta_theta,
            sharpness,
            steps,
        });
        self.record(&rows)
    }

    /// Moves several joints at once, synchronized to the longest request.
    pub fn move_joints(&mut self, requests: &[MoveRequest]) -> io::Result<()> {
        let rows = self.rig.plan_batch(requests);
        self.record(&rows)
    }

    pub fn move_base(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Base, delta_theta, sharpness, steps)
    }

    pub fn move_body(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Body, delta_theta, sharpness, steps)
    }

    pub fn move_arm(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Arm, delta_theta, sharpness, steps)
    }

    pub fn move_wrist(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Wrist, delta_theta, sharpness, steps)
    }

    pub fn move_tool(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Tool, delta_theta, sharpness, steps)
    }

    pub fn move_disk(&mut self, delta_theta: f64, sharpness: f64, steps: i32) -> io::Result<()> {
        self.move_joint(JointId::Disk, delta_theta, sharpness, steps)
    }

    /// Current mechanism pose.
    pub fn pose(&self) -> Pose {
        self.rig.pose()
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// Flushes the sink. Call on every exit path, including after a failed
    /// move, so already recorded rows survive.
    pub fn close(&mut self) -> io::Result<()> {
        self.sink.close()
    }

    fn record(&mut self, rows: &[Pose]) -> io::Result<()> {
        for row in rows {
            self.sink.write_row(row)?;
        }
        Ok(())
    }
}
