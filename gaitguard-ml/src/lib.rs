//! Learned Fall-Risk Scoring for GaitGuard
//!
//! ## Overview
//!
//! The heuristic scorer in `gaitguard-core` is deterministic, explainable and
//! always available. This crate adds an optional learned opinion on top of it
//! without ever making the session depend on a model being present.
//!
//! ## Fallback Contract
//!
//! [`GaitMLRiskScorer`] wraps any fallback [`RiskScorer`] and an
//! [`InferenceBackend`]:
//!
//! ```text
//! backend loaded?  ──no──→  fallback result, unchanged
//!        │yes
//! predict(inputs)  ──Err─→  fallback result, unchanged (warning logged)
//!        │Ok
//! score      = 0.5 × heuristic + 0.5 × backend  (+6 if toe clearance < 0.012 m)
//! confidence = max(heuristic, backend) + 0.05
//! both clamped; level derived from the clamped score
//! ```
//!
//! The scorer never panics and never returns an unclamped value, so callers
//! treat it exactly like the heuristic scorer.
//!
//! ## Backend
//!
//! [`LogisticBackend`] is a small logistic model over the eight risk inputs,
//! each normalized so that a positive value means "worse than typical".
//! Missing inputs contribute zero. It refuses to predict from fewer than
//! four inputs, which routes the session to the fallback.
//!
//! ```text
//! zᵢ = direction × (xᵢ − centerᵢ) / scaleᵢ
//! p  = σ(bias + Σ wᵢ zᵢ)
//! score = 100 × p
//! ```
//!
//! ## Feature Logging
//!
//! [`FeatureLog`] keeps the most recent `(inputs, assessment)` pairs in a
//! fixed ring for offline model training. With `std`, [`SharedFeatureLog`]
//! lets every scorer in the process append to one log.
//!
//! ## Memory Model
//!
//! ```text
//! LogisticBackend: 9 × f64                     = 72 B
//! FeatureLog:      256 records × ~200 B        ≈ 50 KB
//! ```
//!
//! No allocation happens while scoring.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "log")]
macro_rules! ml_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! ml_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! ml_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! ml_debug {
    ($($arg:tt)*) => {};
}

pub mod backend;
pub mod feature_log;
pub mod scorer;

pub use backend::{BackendPrediction, InferenceBackend, LogisticBackend, LogisticWeights};
pub use feature_log::{FeatureLog, FeatureRecord, FEATURE_LOG_CAPACITY};
#[cfg(feature = "std")]
pub use feature_log::SharedFeatureLog;
pub use scorer::{GaitMLRiskScorer, MLScorerConfig};

pub use gaitguard_core::{GaitError, GaitResult, GaitRiskAssessment, GaitRiskInputs, RiskScorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
