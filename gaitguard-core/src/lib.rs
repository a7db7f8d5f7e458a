//! Core gait analysis engine for GaitGuard
//!
//! Turns a stream of biomechanical samples captured while a person walks into
//! rolling gait metrics, a fall-risk score with confidence, and a fused
//! end-of-session assessment.
//!
//! Data flows one way:
//!
//! ```text
//! SpatialSample ─→ StepEventDetector ─→ StepEvent ─→ GaitMetricsAggregator ─┐
//!                        │                                                  ├─→ GaitMetrics ─→ RiskScorer ─┐
//!                  FloorEstimator                       GaitFeatureEngineer ┘                              │
//!                                                                                                          ↓
//!   CadenceFusionManager / MotionFusionManager (side inputs) ──────────────────→ GaitPostSessionFusion ─→ GaitAssessment
//! ```
//!
//! Key constraints:
//! - No heap allocation in the per-sample path (all windows are fixed-capacity rings)
//! - Missing data is `None`, never a sentinel zero
//! - Scores are clamped to [0, 100], confidences to [0, 1]
//!
//! ```no_run
//! use gaitguard_core::{GaitMetricsAggregator, StepEvent, Foot};
//!
//! let mut aggregator = GaitMetricsAggregator::default();
//! let aggregate = aggregator.ingest(StepEvent::new(1, Foot::Left, 0.0).with_step_length(0.62));
//! assert!(aggregate.cadence.is_none()); // one step is not a cadence
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! gait_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! gait_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! gait_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! gait_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! gait_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! gait_trace {
    ($($arg:tt)*) => {};
}

pub mod aggregator;
pub mod buffer;
pub mod calibration;
pub mod constants;
pub mod errors;
pub mod events;
pub mod features;
pub mod floor;
pub mod fusion;
pub mod geometry;
pub mod metrics;
pub mod quality;
pub mod risk;
pub mod session;
pub mod stats;
pub mod step_detection;
pub mod time;
pub mod traits;

#[cfg(feature = "std")]
pub mod shared;
#[cfg(feature = "std")]
pub mod telemetry;

// Public API
pub use aggregator::{AggregatorConfig, DoubleSupportSource, GaitMetricsAggregator, GaitRollingAggregate};
pub use calibration::{
    CalibrationBaseline, CalibrationConfig, CalibrationDeviations, CalibrationState, GaitCalibrationManager,
    CalibratedMetric, RiskPolarity,
};
pub use errors::{GaitError, GaitResult};
pub use events::{Foot, SpatialSample, StepEvent};
pub use features::{EngineeredFeatures, FeatureConfig, FeatureSample, GaitFeatureEngineer, HarmonicSource};
pub use floor::{FloorConfig, FloorEstimator};
pub use fusion::{
    CadenceFusion, CadenceFusionConfig, CadenceFusionManager, DetectedObstacle, EnvironmentReport,
    GaitAssessment, GaitPostSessionFusion, MotionFusionManager, MotionStats, PostureSummary,
};
pub use geometry::Vec3;
pub use metrics::{GaitMetrics, MobilityStatus};
pub use quality::{FrameQualityTracker, QualityLevel, QualityMetadata};
pub use risk::{GaitRiskAssessment, GaitRiskInputs, HeuristicRiskScorer, RiskLevel};
pub use session::{GaitSession, SessionConfig, SessionExtras};
pub use step_detection::{DetectorConfig, StepEventDetector};
pub use time::Timestamp;
pub use traits::{Reset, RiskScorer};

#[cfg(feature = "std")]
pub use shared::{Shared, SharedCadenceFusion, SharedMotionFusion};
#[cfg(feature = "std")]
pub use telemetry::TelemetryPayload;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
