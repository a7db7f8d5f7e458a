//! Gait Physiology and Detection Constants
//!
//! Bands and thresholds used to detect steps and to decide which measured
//! values are physiologically plausible. Values outside these bands are
//! treated as measurement artefacts, not as gait.

// ===== UNIT CONVERSIONS =====

/// Seconds per minute, for steps/second → steps/minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Percentage scale factor.
pub const PERCENT: f64 = 100.0;

// ===== STEP LENGTH BAND =====

/// Shortest plausible step length (meters).
///
/// Shuffling gait in frail adults bottoms out around 0.2 m. Anything shorter
/// is a weight shift or a tracking jitter, not a step.
///
/// Source: Clinical gait reference ranges for older adults
pub const MIN_STEP_LENGTH_M: f64 = 0.20;

/// Longest plausible step length (meters).
///
/// Running strides of tall adults exceed this, walking steps do not.
/// A value above it during a walking session is a tracking jump.
pub const MAX_STEP_LENGTH_M: f64 = 1.80;

/// Distance from the running mean, in standard deviations, beyond which a
/// step length is rejected as an outlier.
pub const OUTLIER_SIGMA: f64 = 3.0;

/// Raw step-length samples required before the σ rule is applied.
///
/// With fewer samples the running standard deviation is too unstable to
/// reject anything reliably.
pub const MIN_OUTLIER_SAMPLES: usize = 6;

/// Lower bound on the σ used by the outlier rule (meters).
///
/// A perfectly regular walk has σ → 0, which would reject every step that
/// differs by a millimetre. 1 cm is below the tracking noise of a depth sensor.
pub const OUTLIER_SIGMA_FLOOR_M: f64 = 0.01;

// ===== TOE CLEARANCE BAND =====

/// Lowest accepted toe clearance (meters). Negative means the foot went below
/// the floor estimate.
pub const MIN_TOE_CLEARANCE_M: f64 = 0.0;

/// Highest accepted toe clearance (meters).
///
/// Minimum toe clearance in normal walking is 1–3 cm; 20 cm only happens on
/// stairs or when the tracker loses the foot.
pub const MAX_TOE_CLEARANCE_M: f64 = 0.20;

// ===== ROLLING WINDOWS =====

/// Trailing window for cadence (seconds).
pub const CADENCE_WINDOW_S: f64 = 10.0;

/// Minimum stride-time samples for the stride-time coefficient of variation.
pub const MIN_STRIDE_CV_SAMPLES: usize = 5;

/// Smoothing constant for the toe-clearance EWMA baseline.
///
/// With α = 0.15 the residual of a step change is 0.85ⁿ; it falls under 5 %
/// after 19 samples.
pub const CLEARANCE_EWMA_ALPHA: f64 = 0.15;

/// Fraction of the clearance baseline below which a swing counts as a dip.
pub const NEAR_TRIP_CLEARANCE_RATIO: f64 = 0.60;

/// Relative cadence increase that, together with a clearance dip, marks a
/// near-trip (a hurried recovery step).
pub const NEAR_TRIP_CADENCE_JUMP: f64 = 0.05;

/// Lower bound of the harmonic ratio when derived from stride-time CV.
///
/// The stride-time path yields values in (1.0, 2.0].
pub const HARMONIC_STRIDE_BASE: f64 = 1.0;

/// Lower bound of the harmonic ratio when derived from an external step-length CV.
///
/// The external path yields values in (2.5, 3.5], disjoint from the
/// stride-time path so consumers can tell the sources apart.
pub const HARMONIC_EXTERNAL_BASE: f64 = 2.5;

/// CV multiplier in the harmonic ratio: `base + 1 / (1 + scale × cv)`.
///
/// With 10, a CV of 0.05 (upper normal) gives two thirds of the range.
pub const HARMONIC_CV_SCALE: f64 = 10.0;

// ===== STEP DETECTION =====

/// Foot height above floor (meters) at which the foot counts as lifted.
pub const LIFT_THRESHOLD_M: f64 = 0.02;

/// Foot height above floor (meters) at or below which a lifted foot has landed.
pub const CONTACT_THRESHOLD_M: f64 = 0.01;

/// Minimum interval between two accepted strikes (seconds).
///
/// 0.25 s is 240 steps/min, above any walking cadence.
pub const MIN_STEP_INTERVAL_S: f64 = 0.25;

/// Forward component, as a fraction of horizontal displacement, required to
/// project a step onto the heading.
pub const HEADING_PROJECTION_MIN_RATIO: f64 = 0.30;

/// Swing samples required before a toe clearance is reported.
pub const MIN_SWING_SAMPLES: usize = 4;

// ===== FLOOR ESTIMATION =====

/// Samples required before the floor estimate is reported.
pub const FLOOR_MIN_SAMPLES: usize = 10;

/// Quantile of the low-foot window taken as floor height.
pub const FLOOR_QUANTILE: f64 = 0.10;

/// Height above the floor estimate (meters) beyond which a sample is treated
/// as a lifted foot and excluded from the noise estimate.
pub const FLOOR_SPIKE_GATE_M: f64 = 0.05;

// ===== MOBILITY STATUS =====

/// Walking speed (m/s) for independent community ambulation.
///
/// Source: Perry et al., gait speed classification
pub const MOBILITY_INDEPENDENT_SPEED: f64 = 1.0;

/// Walking speed (m/s) for limited community ambulation.
pub const MOBILITY_LIMITED_SPEED: f64 = 0.8;

/// Walking speed (m/s) for household ambulation.
pub const MOBILITY_HOUSEHOLD_SPEED: f64 = 0.4;
