//! Fall-Risk Scoring Constants
//!
//! Each heuristic input is compared against a normal threshold and a "full
//! penalty" point. Between the two the penalty grows linearly; the weights of
//! all eight inputs sum to 100 so the score needs no rescaling.
//!
//! ```text
//! severity = clamp((value - threshold) / (full - threshold), 0, 1)
//! score    = Σ weightᵢ × severityᵢ
//! ```

// ===== WALKING SPEED =====

/// Walking speed below which risk starts to accrue (m/s).
///
/// Source: gait speed < 0.8 m/s predicts falls in community-dwelling adults
pub const SPEED_THRESHOLD: f64 = 0.8;
/// Walking speed at which the speed penalty is full (m/s).
pub const SPEED_FULL: f64 = 0.4;
/// Penalty weight for walking speed.
pub const SPEED_WEIGHT: f64 = 22.0;

// ===== CADENCE =====

/// Cadence below which risk starts to accrue (steps/min).
pub const CADENCE_THRESHOLD: f64 = 90.0;
/// Cadence at which the cadence penalty is full (steps/min).
pub const CADENCE_FULL: f64 = 60.0;
/// Penalty weight for cadence.
pub const CADENCE_WEIGHT: f64 = 8.0;

// ===== DOUBLE SUPPORT =====

/// Double-support percentage above which risk starts to accrue.
///
/// Healthy adults spend 20–25 % of the gait cycle in double support.
pub const DOUBLE_SUPPORT_THRESHOLD: f64 = 25.0;
/// Double-support percentage at which the penalty is full.
pub const DOUBLE_SUPPORT_FULL: f64 = 40.0;
/// Penalty weight for double support.
pub const DOUBLE_SUPPORT_WEIGHT: f64 = 15.0;

// ===== VARIABILITY =====

/// Step-length CV above which risk starts to accrue.
pub const STEP_LENGTH_CV_THRESHOLD: f64 = 0.05;
/// Step-length CV at which the penalty is full.
pub const STEP_LENGTH_CV_FULL: f64 = 0.15;
/// Penalty weight for step-length variability.
pub const STEP_LENGTH_CV_WEIGHT: f64 = 12.0;

/// Speed CV above which risk starts to accrue.
pub const SPEED_CV_THRESHOLD: f64 = 0.05;
/// Speed CV at which the penalty is full.
pub const SPEED_CV_FULL: f64 = 0.15;
/// Penalty weight for speed variability.
pub const SPEED_CV_WEIGHT: f64 = 10.0;

// ===== ASYMMETRY =====

/// Step-length asymmetry (%) above which risk starts to accrue.
pub const ASYMMETRY_THRESHOLD: f64 = 8.0;
/// Step-length asymmetry (%) at which the penalty is full.
pub const ASYMMETRY_FULL: f64 = 25.0;
/// Penalty weight for step-length asymmetry.
pub const ASYMMETRY_WEIGHT: f64 = 10.0;

// ===== TOE CLEARANCE =====

/// Toe clearance below which risk starts to accrue (meters).
pub const TOE_CLEARANCE_THRESHOLD: f64 = 0.015;
/// Toe clearance at which the penalty is full (meters).
pub const TOE_CLEARANCE_FULL: f64 = 0.005;
/// Penalty weight for toe clearance.
pub const TOE_CLEARANCE_WEIGHT: f64 = 13.0;

// ===== STABILITY =====

/// Stability index (0–1) below which risk starts to accrue.
pub const STABILITY_THRESHOLD: f64 = 0.7;
/// Stability index at which the penalty is full.
pub const STABILITY_FULL: f64 = 0.3;
/// Penalty weight for stability.
pub const STABILITY_WEIGHT: f64 = 10.0;

// ===== LEVELS =====

/// Lowest score classified as moderate risk.
pub const LEVEL_MODERATE_MIN: f64 = 25.0;
/// Lowest score classified as high risk.
pub const LEVEL_HIGH_MIN: f64 = 50.0;
/// Lowest score classified as critical risk.
pub const LEVEL_CRITICAL_MIN: f64 = 75.0;

/// Highest possible risk score.
pub const MAX_SCORE: f64 = 100.0;

// ===== CONFIDENCE =====

/// Number of heuristic inputs.
pub const RISK_INPUT_COUNT: usize = 8;

/// Confidence with no inputs present.
pub const BASE_CONFIDENCE: f64 = 0.5;

/// Confidence added when all inputs are present (scaled by coverage).
pub const COVERAGE_CONFIDENCE_GAIN: f64 = 0.45;
