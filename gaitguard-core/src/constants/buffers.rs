//! Ring Buffer Capacities
//!
//! Every rolling window in the engine is a fixed-capacity ring. Capacities are
//! compile-time constants so the whole per-session state has a known size.

/// Step event history kept by the aggregator.
///
/// 64 steps is roughly 35 s of walking at 110 steps/min, longer than any
/// rolling metric looks back.
pub const STEP_HISTORY_CAPACITY: usize = 64;

/// Samples kept by the feature engineer.
pub const FEATURE_WINDOW_CAPACITY: usize = 32;

/// Low-foot heights kept by the floor estimator.
///
/// At 60 Hz this is about one second of samples.
pub const FLOOR_WINDOW_CAPACITY: usize = 64;

/// Swing-phase heights kept per foot by the step detector.
///
/// A 0.5 s swing at 60 Hz is 30 samples; 128 covers slow swings at 120 Hz.
pub const SWING_SAMPLE_CAPACITY: usize = 128;

/// Samples kept per channel by the motion fusion manager.
///
/// About 2.5 s of inertial data at 100 Hz.
pub const MOTION_BUFFER_CAPACITY: usize = 256;

/// Risk factors and recommendations kept on an assessment.
pub const MAX_ASSESSMENT_NOTES: usize = 8;

/// Obstacles carried over into environmental factors.
pub const MAX_OBSTACLES: usize = 16;

/// Feature vectors kept by the feature log.
pub const FEATURE_LOG_CAPACITY: usize = 256;
