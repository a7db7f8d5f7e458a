//! Confidence Enrichment for Session Assessments
//!
//! ## Overview
//!
//! A risk score computed from a 20-second walk on a noisy floor estimate is
//! worth less than the same score from a five-minute walk with a clean
//! capture. The scorer's own confidence only knows how many inputs were
//! present; this module folds in what the session knows about itself.
//!
//! ## Factors
//!
//! Each factor is a multiplier on the base confidence and is monotonic in its
//! input:
//!
//! ```text
//! duration = 0.7 + 0.3 × (1 − e^(−d / 60))       d = session seconds     ↑ with d
//! noise    = 1 / (1 + σ / 0.01)                  σ = floor std (m)       ↓ with σ
//! quality  = 0.8 + 0.4 × q                       q ∈ [0, 1]              ↑ with q
//! posture  = 1.05 if posture data else 1.0
//!
//! confidence = clamp(base × duration × noise × quality × posture, 0, 1)
//! ```
//!
//! A short low-quality session lands below its base; a long clean session
//! with posture data lands above it.
//!
//! ## Implementation Notes
//!
//! - Non-finite inputs are treated as the least favourable value
//! - A missing floor deviation applies no noise penalty
//! - All arithmetic is `f64` with `libm::exp`, no allocation

use crate::constants::fusion::{
    DURATION_FACTOR_FLOOR, DURATION_TIME_CONSTANT_S, FLOOR_NOISE_SCALE_M, POSTURE_CONFIDENCE_BOOST,
    QUALITY_FACTOR_FLOOR, QUALITY_FACTOR_GAIN,
};

/// Multipliers applied to a base confidence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfidenceFactors {
    /// Session-length factor in [0.7, 1.0)
    pub duration: f64,
    /// Floor-noise factor in (0, 1]
    pub noise: f64,
    /// Signal-quality factor in [0.8, 1.2]
    pub quality: f64,
    /// Posture corroboration factor
    pub posture: f64,
}

impl Default for ConfidenceFactors {
    fn default() -> Self {
        Self {
            duration: 1.0,
            noise: 1.0,
            quality: 1.0,
            posture: 1.0,
        }
    }
}

impl ConfidenceFactors {
    /// Compute every factor for one session
    pub fn compute(
        duration_s: f64,
        floor_std_m: Option<f64>,
        quality_confidence: f64,
        has_posture: bool,
    ) -> Self {
        Self {
            duration: duration_factor(duration_s),
            noise: floor_std_m.map_or(1.0, noise_factor),
            quality: quality_factor(quality_confidence),
            posture: posture_factor(has_posture),
        }
    }

    /// Product of all factors
    pub fn combined(&self) -> f64 {
        self.duration * self.noise * self.quality * self.posture
    }

    /// Adjust a base confidence, clamped to [0, 1]
    pub fn apply(&self, base: f64) -> f64 {
        let adjusted = base * self.combined();
        if adjusted.is_nan() {
            0.0
        } else {
            adjusted.clamp(0.0, 1.0)
        }
    }
}

/// Saturating bonus for longer sessions
pub fn duration_factor(duration_s: f64) -> f64 {
    let d = if duration_s.is_finite() { duration_s.max(0.0) } else { 0.0 };
    DURATION_FACTOR_FLOOR + (1.0 - DURATION_FACTOR_FLOOR) * (1.0 - libm::exp(-d / DURATION_TIME_CONSTANT_S))
}

/// Penalty for a noisy floor estimate
pub fn noise_factor(floor_std_m: f64) -> f64 {
    if floor_std_m.is_nan() || floor_std_m == f64::INFINITY {
        return 0.0;
    }
    1.0 / (1.0 + floor_std_m.max(0.0) / FLOOR_NOISE_SCALE_M)
}

/// Linear map of signal quality
pub fn quality_factor(quality: f64) -> f64 {
    let q = if quality.is_finite() { quality.clamp(0.0, 1.0) } else { 0.0 };
    QUALITY_FACTOR_FLOOR + QUALITY_FACTOR_GAIN * q
}

/// Boost when posture data corroborates the session
pub fn posture_factor(has_posture: bool) -> f64 {
    if has_posture {
        POSTURE_CONFIDENCE_BOOST
    } else {
        1.0
    }
}
