//! Conversion between wall clock durations and discrete step counts.

/// Nominal delay between two recorded samples, milliseconds.
pub const DEFAULT_STEP_DELAY_MS: f64 = 25.0;

/// Playback frame rate the recorded tables target.
pub const TARGET_FPS: f64 = 60.0;

/// Ratio between the target frame rate and the native sampling rate implied
/// by the step delay. With the defaults this is 1.5: three recorded rows per
/// two native samples.
pub const INTERPOLATION_FACTOR: f64 = TARGET_FPS / (1000.0 / DEFAULT_STEP_DELAY_MS);

/// Number of samples needed to spread a move over `duration_seconds` of
/// playback. Pure arithmetic, reproducible for the same input.
pub fn steps_for_duration(duration_seconds: f64) -> i32 {
    let total_time_ms = duration_seconds * 1000.0;
    let base_steps = (total_time_ms / DEFAULT_STEP_DELAY_MS).floor();
    (base_steps * INTERPOLATION_FACTOR).floor() as i32
}

/// Wall clock playback duration covered by `steps` samples. Inverse of
/// [steps_for_duration] on its image: deriving steps from the returned
/// duration yields `steps` again.
pub fn duration_for_steps(steps: i32) -> f64 {
    (steps.max(0) as f64 / INTERPOLATION_FACTOR) * DEFAULT_STEP_DELAY_MS / 1000.0
}
