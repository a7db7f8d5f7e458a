//! Signal-Quality Thresholds
//!
//! Used to turn raw quality metadata into a single confidence value that the
//! post-session fusion can consume.

/// Frame drop percentage at which quality reaches zero.
///
/// Beyond a third of dropped frames strike timing is unreliable.
pub const FRAME_DROP_ZERO_QUALITY_PCT: f64 = 33.0;

/// Acceleration-magnitude variance ((m/s²)²) at which the device-motion
/// penalty is full.
///
/// Normal walking with a chest- or hand-held device stays under 4; shaking
/// the device pushes it well beyond.
pub const ACCEL_VARIANCE_FULL_PENALTY: f64 = 16.0;

/// Maximum share of quality removed by device motion.
pub const ACCEL_PENALTY_MAX: f64 = 0.3;

/// High signal-quality threshold.
///
/// Above this the session counts as well-captured.
pub const QUALITY_THRESHOLD_HIGH: f64 = 0.8;

/// Acceptable signal-quality threshold.
pub const QUALITY_THRESHOLD_ACCEPTABLE: f64 = 0.5;
