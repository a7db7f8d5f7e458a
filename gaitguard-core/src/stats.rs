//! Descriptive Statistics Shared by the Gait Components
//!
//! ## Design Principles
//!
//! - **Pure functions** over iterators of `f64`, no allocation
//! - **Absence over sentinels**: every function returns `None` when its
//!   precondition is not met (too few samples, zero mean), never `0.0`
//! - **Non-finite values are skipped**, so one NaN cannot poison a window
//!
//! ## Conventions
//!
//! Standard deviations use Bessel's correction (divide by N − 1), so anything
//! derived from a spread needs at least two samples:
//!
//! ```text
//! mean = Σx / N
//! s    = √( Σ(x − mean)² / (N − 1) )
//! CV   = s / mean            (requires N ≥ 2 and mean > 0)
//! ```

use libm::{fabs, sqrt};

/// True for values that can enter an average
#[inline]
pub fn is_usable(value: f64) -> bool {
    value.is_finite()
}

/// True for finite, non-negative magnitudes such as clearances and CVs
#[inline]
pub fn is_usable_magnitude(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// True for durations that can enter an average (finite and non-negative)
#[inline]
pub fn is_usable_duration(value: f64) -> bool {
    is_usable_magnitude(value)
}

/// Arithmetic mean of the finite values, `None` when there are none
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| is_usable(*v))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean and sample standard deviation (N − 1) of the finite values
///
/// Returns `None` with fewer than two finite values.
pub fn mean_and_std<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    // Welford's online update keeps this single-pass and numerically stable
    let mut count = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;

    for value in values.into_iter().filter(|v| is_usable(*v)) {
        count += 1;
        let delta = value - mean;
        mean += delta / count as f64;
        m2 += delta * (value - mean);
    }

    if count < 2 {
        return None;
    }

    Some((mean, sqrt(m2 / (count - 1) as f64)))
}

/// Sample variance (N − 1) of the finite values, `None` below two values
pub fn sample_variance<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    mean_and_std(values).map(|(_, std)| std * std)
}

/// Coefficient of variation `s / mean`
///
/// Requires at least two finite values and a strictly positive mean.
pub fn coefficient_of_variation<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (mean, std) = mean_and_std(values)?;
    if mean > 0.0 {
        Some(std / mean)
    } else {
        None
    }
}

/// Relative asymmetry in percent: `|a − b| / ((a + b) / 2) × 100`
///
/// `None` when either side is missing or the sides sum to zero.
pub fn asymmetry_pct(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    let (left, right) = (left?, right?);
    let sum = left + right;
    if !sum.is_finite() || sum == 0.0 {
        return None;
    }
    Some(fabs(left - right) / (sum / 2.0) * 100.0)
}

/// Linear severity of `value` between a normal `threshold` and a `full` point
///
/// Works for both polarities: when `full < threshold` lower values are worse.
/// The result is clamped to [0, 1]; a non-finite value has no severity.
pub fn band_severity(value: f64, threshold: f64, full: f64) -> f64 {
    if !value.is_finite() || threshold == full {
        return 0.0;
    }
    ((value - threshold) / (full - threshold)).clamp(0.0, 1.0)
}
