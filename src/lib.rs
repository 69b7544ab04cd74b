//! Open loop joint trajectory generation for six axis robots.
//!
//! Given a starting joint configuration, a signed angular displacement per joint, an easing
//! profile and a step count, this crate computes smooth, monotonic sequences of intermediate
//! joint angles and merges concurrent joint moves into one time aligned table, a row of six
//! angles per discrete step. The table is plain text and suitable for open loop playback
//! or simulation.
//!
//! # Features
//!
//! - Quintic smoothstep easing with an adjustable sharpness exponent (zero velocity and
//!   acceleration at both ends of a move), or cubic ease in out as an alternative shape.
//! - Joints moving within one batch complete at their own natural step count. The
//!   synchronizer holds finished joints at their final angle and keeps unmoved joints at
//!   their current angle, so every emitted row covers the full mechanism.
//! - Step counts derived from wall clock durations against a fixed sampling interval and
//!   a target playback frame rate.
//! - Recording to a plain text angle table with a header row of joint names.
//! - Rig definitions (joint names, starting angles, easing shape) loadable from JSON files.
//!
//! This crate only produces angle versus step tables. It does not do inverse kinematics,
//! collision checking, joint limit enforcement, or talk to any hardware.
//!
//! ## Examples
//!
//! - **kuka_demo**: records the classic six joint demonstration sequence into `Kuka.dat`.

pub mod easing;
pub mod joint;
pub mod motion_traits;
pub mod rig;
pub mod timing;
pub mod trajectory;

pub mod manipulator;

#[cfg(feature = "allow_filesystem")]
pub mod recorder;

#[cfg(feature = "allow_filesystem")]
pub mod rig_config;
#[cfg(feature = "allow_filesystem")]
pub mod config_error;
