//! Constants for GaitGuard Core
//!
//! Centralized, documented constants used throughout the gait engine. Every
//! threshold that shapes a metric, a rejection rule or a score lives here so
//! that configs have a single source for their defaults.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Gait**: Physiologic bands, detection thresholds and rolling windows
//! - **Risk**: Scoring thresholds, penalty weights and level boundaries
//! - **Fusion**: Freshness windows, blend weights and confidence factors
//! - **Quality**: Signal-quality thresholds
//! - **Buffers**: Fixed ring capacities
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_M`, `_S`, `_PCT`, `_SPM`)
//! 3. Reference the clinical or empirical source where one exists

/// Physiologic bands, detection thresholds and rolling-window sizes.
pub mod gait;

/// Fall-risk scoring thresholds and penalty weights.
pub mod risk;

/// Sensor fusion windows, weights and confidence factors.
pub mod fusion;

/// Signal-quality thresholds.
pub mod quality;

/// Ring buffer capacities.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use gait::{
    CADENCE_WINDOW_S, MAX_STEP_LENGTH_M, MIN_STEP_LENGTH_M, OUTLIER_SIGMA,
    MIN_OUTLIER_SAMPLES, SECONDS_PER_MINUTE,
};

pub use risk::{
    LEVEL_MODERATE_MIN, LEVEL_HIGH_MIN, LEVEL_CRITICAL_MIN,
};

pub use fusion::{
    CADENCE_FRESHNESS_WINDOW_S, EXTERNAL_CADENCE_WEIGHT,
};

pub use buffers::{
    STEP_HISTORY_CAPACITY, FEATURE_WINDOW_CAPACITY, MOTION_BUFFER_CAPACITY,
};
