//! Fusion Parameters
//!
//! Windows and weights for the side-input managers and for the confidence
//! enrichment done when a session is assembled into an assessment.

// ===== CADENCE FUSION =====

/// Maximum age (seconds) at which an external cadence report is trusted.
///
/// Companion wearables report cadence every 1–2 s; 5 s tolerates a couple of
/// dropped messages without trusting a value from a different walking bout.
pub const CADENCE_FRESHNESS_WINDOW_S: f64 = 5.0;

/// Weight of the external cadence in the blend when it is fresh.
///
/// The wrist/foot accelerometer counts every step; the depth-derived cadence
/// misses occluded strikes, so the external source is favoured.
pub const EXTERNAL_CADENCE_WEIGHT: f64 = 0.7;

// ===== CALIBRATION =====

/// Default length of the personal-baseline warm-up window (seconds).
pub const CALIBRATION_WINDOW_S: f64 = 30.0;

/// Samples required to freeze a baseline.
pub const CALIBRATION_MIN_SAMPLES: usize = 1;

// ===== SESSION CONFIDENCE =====

/// Duration factor for a zero-length session.
pub const DURATION_FACTOR_FLOOR: f64 = 0.7;

/// Time constant of the duration factor (seconds).
///
/// A one-minute walk reaches 63 % of the available duration bonus.
pub const DURATION_TIME_CONSTANT_S: f64 = 60.0;

/// Floor standard deviation (meters) at which the noise factor halves
/// confidence.
pub const FLOOR_NOISE_SCALE_M: f64 = 0.01;

/// Quality factor at zero signal quality.
pub const QUALITY_FACTOR_FLOOR: f64 = 0.8;

/// Quality factor gain across the full quality range.
pub const QUALITY_FACTOR_GAIN: f64 = 0.4;

/// Confidence multiplier when posture data corroborates the session.
pub const POSTURE_CONFIDENCE_BOOST: f64 = 1.05;

// ===== HAZARDS =====

/// Total sway (meters) above which "Excessive Sway" is flagged.
pub const EXCESSIVE_SWAY_M: f64 = 0.04;

/// Environmental hazard score (0–1) above which "Environmental Hazard" is flagged.
pub const ENVIRONMENT_HAZARD_THRESHOLD: f64 = 0.6;

// ===== LIGHTING =====

/// Illuminance (lux) below which lighting is dark.
pub const LIGHTING_DARK_LUX: f64 = 50.0;

/// Illuminance (lux) below which lighting is dim.
pub const LIGHTING_DIM_LUX: f64 = 200.0;

/// Illuminance (lux) at or above which lighting is bright.
pub const LIGHTING_BRIGHT_LUX: f64 = 1000.0;
