//! Side-Input Fusion and Session Assembly
//!
//! ## Overview
//!
//! The main chain (detector → aggregator → scorer) only sees the spatial
//! session. This module holds everything that blends in other sources:
//!
//! ```text
//! wearable cadence ──→ CadenceFusionManager ──→ fused cadence ──┐
//! IMU / barometer  ──→ MotionFusionManager  ──→ quality stats ──┼─→ GaitPostSessionFusion ─→ GaitAssessment
//! posture / environment analysis ───────────────────────────────┘
//! ```
//!
//! ## Blending
//!
//! Cadence uses a freshness-gated weighted average:
//! ```text
//! fused = w·external + (1 − w)·derived     if age(external) ≤ window
//!       = derived                          otherwise
//! ```
//!
//! Session confidence is a product of independent factors, each monotonic in
//! its input (see [`confidence`]):
//! ```text
//! c = base × duration × noise × quality × posture      clamped to [0, 1]
//! ```
//!
//! ## Ownership
//!
//! The cadence and motion managers are ordinary values. A single shared
//! instance lives at the composition root (see `crate::shared` with `std`)
//! and is lent to each session; nothing here is global.

pub mod cadence;
pub mod confidence;
pub mod motion;
pub mod post_session;

pub use cadence::{CadenceFusion, CadenceFusionConfig, CadenceFusionManager};
pub use confidence::ConfidenceFactors;
pub use motion::{MotionFusionManager, MotionStats};
pub use post_session::{
    AsymmetryAnalysis, BalanceAnalysis, DetailedGaitAnalysis, DetectedObstacle, EnvironmentReport,
    EnvironmentalFactors, GaitAssessment, GaitCycleAnalysis, GaitPostSessionFusion, LightingCondition,
    Notes, Obstacle, ObstacleKind, PostSessionConfig, PostureSummary, SessionInputs, SurfaceType,
    TemporalSpatialAnalysis, VariabilityAnalysis,
};
