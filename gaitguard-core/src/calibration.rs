//! Personal Baseline Calibration
//!
//! ## State Machine
//!
//! ```text
//!            start_if_needed(now)              window elapsed
//!   Idle ─────────────────────────→ Collecting ──────────────→ Complete
//!     ↑                                                            │
//!     └──────────────────────────── reset() ───────────────────────┘
//! ```
//!
//! While collecting, every [`GaitMetrics`] snapshot contributes its speed,
//! step length, cadence and double support to running means. Completion is
//! checked before a sample is accumulated, so a sample arriving at or after
//! `start + window` closes the window without being counted. A caller with no
//! sample to offer can close an elapsed window with [`GaitCalibrationManager::tick`].
//!
//! Once complete, the baseline is frozen for the session and every new
//! snapshot can be expressed as signed percentage deviations from it.

use heapless::Vec;

use crate::{
    constants::{
        fusion::{CALIBRATION_MIN_SAMPLES, CALIBRATION_WINDOW_S},
        gait::PERCENT,
    },
    errors::{GaitError, GaitResult},
    metrics::GaitMetrics,
    time::Timestamp,
    traits::Reset,
};

/// Calibration configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConfig {
    /// Length of the collection window (seconds)
    pub window_s: f64,
    /// Snapshots required before the window may close
    pub min_samples: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            window_s: CALIBRATION_WINDOW_S,
            min_samples: CALIBRATION_MIN_SAMPLES,
        }
    }
}

/// Calibration lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalibrationState {
    /// Not started
    #[default]
    Idle,
    /// Accumulating snapshots
    Collecting,
    /// Baseline frozen
    Complete,
}

/// Frozen personal baseline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalibrationBaseline {
    /// Mean walking speed (m/s)
    pub speed: Option<f64>,
    /// Mean step length (meters)
    pub step_length: Option<f64>,
    /// Mean cadence (steps/min)
    pub cadence: Option<f64>,
    /// Mean double support (%)
    pub double_support: Option<f64>,
    /// Snapshots that contributed
    pub sample_count: usize,
}

/// Direction in which a metric gets worse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskPolarity {
    /// Increases indicate degradation
    HigherIsWorse,
    /// Decreases indicate degradation
    LowerIsWorse,
}

/// A metric tracked against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalibratedMetric {
    /// Walking speed
    Speed,
    /// Step length
    StepLength,
    /// Cadence
    Cadence,
    /// Double-support share
    DoubleSupport,
}

impl CalibratedMetric {
    /// All tracked metrics
    pub const ALL: [CalibratedMetric; 4] = [
        CalibratedMetric::Speed,
        CalibratedMetric::StepLength,
        CalibratedMetric::Cadence,
        CalibratedMetric::DoubleSupport,
    ];

    /// Degradation direction
    pub fn polarity(self) -> RiskPolarity {
        match self {
            CalibratedMetric::DoubleSupport => RiskPolarity::HigherIsWorse,
            _ => RiskPolarity::LowerIsWorse,
        }
    }
}

/// Signed percentage deviations from the baseline
///
/// `(value − baseline) / baseline × 100`, so a slower walk is negative for
/// speed and a longer double support is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalibrationDeviations {
    /// Speed deviation (%)
    pub speed: Option<f64>,
    /// Step-length deviation (%)
    pub step_length: Option<f64>,
    /// Cadence deviation (%)
    pub cadence: Option<f64>,
    /// Double-support deviation (%)
    pub double_support: Option<f64>,
}

impl CalibrationDeviations {
    /// Deviation for one metric
    pub fn get(&self, metric: CalibratedMetric) -> Option<f64> {
        match metric {
            CalibratedMetric::Speed => self.speed,
            CalibratedMetric::StepLength => self.step_length,
            CalibratedMetric::Cadence => self.cadence,
            CalibratedMetric::DoubleSupport => self.double_support,
        }
    }

    /// Metrics that moved in their worse direction
    pub fn degraded_metrics(&self) -> Vec<CalibratedMetric, 4> {
        CalibratedMetric::ALL
            .iter()
            .copied()
            .filter(|m| match (self.get(*m), m.polarity()) {
                (Some(d), RiskPolarity::LowerIsWorse) => d < 0.0,
                (Some(d), RiskPolarity::HigherIsWorse) => d > 0.0,
                (None, _) => false,
            })
            .collect()
    }
}

/// Running sum of one metric
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Personal baseline capture and comparison
#[derive(Debug, Clone, Default)]
pub struct GaitCalibrationManager {
    config: CalibrationConfig,
    state: CalibrationState,
    started: Option<Timestamp>,
    samples: usize,
    speed: Accumulator,
    step_length: Accumulator,
    cadence: Accumulator,
    double_support: Accumulator,
    baseline: Option<CalibrationBaseline>,
}

impl GaitCalibrationManager {
    /// Create an idle manager
    pub fn new(config: CalibrationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current state
    pub fn state(&self) -> CalibrationState {
        self.state
    }

    /// Frozen baseline, `None` until complete
    pub fn baseline(&self) -> Option<&CalibrationBaseline> {
        self.baseline.as_ref()
    }

    /// Begin collecting if idle; returns true when collection started now
    pub fn start_if_needed(&mut self, now: Timestamp) -> bool {
        if self.state != CalibrationState::Idle || !now.is_finite() {
            return false;
        }
        self.state = CalibrationState::Collecting;
        self.started = Some(now);
        gait_debug!("calibration: collecting from t={:.2} for {:.1} s", now, self.config.window_s);
        true
    }

    /// Offer a snapshot taken at `now`
    pub fn ingest(&mut self, metrics: &GaitMetrics, now: Timestamp) -> CalibrationState {
        if self.state != CalibrationState::Collecting || !now.is_finite() {
            return self.state;
        }
        if self.close_if_elapsed(now) {
            return self.state;
        }

        self.samples += 1;
        self.speed.add(metrics.walking_speed);
        self.step_length.add(metrics.step_length);
        self.cadence.add(metrics.cadence);
        self.double_support.add(metrics.double_support_pct);
        self.state
    }

    /// Close an elapsed window without offering a snapshot
    pub fn tick(&mut self, now: Timestamp) -> CalibrationState {
        if self.state == CalibrationState::Collecting && now.is_finite() {
            self.close_if_elapsed(now);
        }
        self.state
    }

    /// Percentage deviations of `metrics` from the frozen baseline
    pub fn deviations(&self, metrics: &GaitMetrics) -> GaitResult<CalibrationDeviations> {
        let baseline = self.baseline.as_ref().ok_or(GaitError::CalibrationIncomplete)?;
        Ok(CalibrationDeviations {
            speed: deviation(metrics.walking_speed, baseline.speed),
            step_length: deviation(metrics.step_length, baseline.step_length),
            cadence: deviation(metrics.cadence, baseline.cadence),
            double_support: deviation(metrics.double_support_pct, baseline.double_support),
        })
    }

    fn close_if_elapsed(&mut self, now: Timestamp) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        if now - started < self.config.window_s || self.samples < self.config.min_samples {
            return false;
        }

        let baseline = CalibrationBaseline {
            speed: self.speed.mean(),
            step_length: self.step_length.mean(),
            cadence: self.cadence.mean(),
            double_support: self.double_support.mean(),
            sample_count: self.samples,
        };
        gait_debug!(
            "calibration: complete after {} samples (speed {:?}, cadence {:?})",
            baseline.sample_count,
            baseline.speed,
            baseline.cadence
        );
        self.baseline = Some(baseline);
        self.state = CalibrationState::Complete;
        true
    }
}

impl Reset for GaitCalibrationManager {
    fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

fn deviation(value: Option<f64>, baseline: Option<f64>) -> Option<f64> {
    match (value, baseline) {
        (Some(v), Some(b)) if v.is_finite() && b.is_finite() && b != 0.0 => Some((v - b) / b * PERCENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(speed: f64, step: f64, cadence: f64, ds: f64) -> GaitMetrics {
        GaitMetrics {
            walking_speed: Some(speed),
            step_length: Some(step),
            cadence: Some(cadence),
            double_support_pct: Some(ds),
            ..GaitMetrics::default()
        }
    }

    #[test]
    fn baseline_is_mean_of_window() {
        let mut calibration = GaitCalibrationManager::default();
        assert!(calibration.start_if_needed(0.0));
        assert!(!calibration.start_if_needed(1.0));

        calibration.ingest(&metrics(1.0, 0.65, 110.0, 20.0), 5.0);
        calibration.ingest(&metrics(0.9, 0.60, 106.0, 22.0), 10.0);
        assert_eq!(calibration.state(), CalibrationState::Collecting);

        assert_eq!(calibration.tick(30.0), CalibrationState::Complete);
        let baseline = calibration.baseline().unwrap();
        assert!((baseline.speed.unwrap() - 0.95).abs() < 1e-4);
        assert_eq!(baseline.sample_count, 2);
    }

    #[test]
    fn closing_sample_is_not_counted() {
        let mut calibration = GaitCalibrationManager::default();
        calibration.start_if_needed(0.0);
        calibration.ingest(&metrics(1.0, 0.65, 110.0, 20.0), 1.0);
        calibration.ingest(&metrics(0.2, 0.30, 60.0, 40.0), 31.0);
        let baseline = calibration.baseline().unwrap();
        assert_eq!(baseline.speed, Some(1.0));
        assert_eq!(baseline.sample_count, 1);
    }

    #[test]
    fn deviations_unavailable_before_complete() {
        let mut calibration = GaitCalibrationManager::default();
        let m = metrics(1.0, 0.6, 100.0, 25.0);
        assert_eq!(calibration.deviations(&m), Err(GaitError::CalibrationIncomplete));
        calibration.start_if_needed(0.0);
        calibration.ingest(&m, 1.0);
        assert_eq!(calibration.deviations(&m), Err(GaitError::CalibrationIncomplete));
    }

    #[test]
    fn worse_sample_has_risk_signed_deviations() {
        let mut calibration = GaitCalibrationManager::default();
        calibration.start_if_needed(0.0);
        calibration.ingest(&metrics(1.0, 0.65, 110.0, 20.0), 1.0);
        calibration.ingest(&metrics(0.9, 0.60, 106.0, 22.0), 2.0);
        calibration.tick(31.0);

        let worse = metrics(0.7, 0.50, 95.0, 30.0);
        let deviations = calibration.deviations(&worse).unwrap();
        assert!(deviations.speed.unwrap() < 0.0);
        assert!(deviations.step_length.unwrap() < 0.0);
        assert!(deviations.cadence.unwrap() < 0.0);
        assert!(deviations.double_support.unwrap() > 0.0);
        assert_eq!(deviations.degraded_metrics().len(), 4);
    }

    #[test]
    fn unobserved_metric_has_no_baseline() {
        let mut calibration = GaitCalibrationManager::default();
        calibration.start_if_needed(0.0);
        let partial = GaitMetrics {
            walking_speed: Some(1.1),
            ..GaitMetrics::default()
        };
        calibration.ingest(&partial, 1.0);
        calibration.tick(30.0);

        let baseline = calibration.baseline().unwrap();
        assert!(baseline.cadence.is_none());
        let deviations = calibration.deviations(&metrics(1.1, 0.6, 100.0, 25.0)).unwrap();
        assert!(deviations.cadence.is_none());
        assert_eq!(deviations.speed, Some(0.0));
    }

    #[test]
    fn empty_window_stays_open() {
        let mut calibration = GaitCalibrationManager::default();
        calibration.start_if_needed(0.0);
        assert_eq!(calibration.tick(60.0), CalibrationState::Collecting);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut calibration = GaitCalibrationManager::new(CalibrationConfig {
            window_s: 5.0,
            min_samples: 1,
        });
        calibration.start_if_needed(0.0);
        calibration.ingest(&metrics(1.0, 0.6, 100.0, 25.0), 1.0);
        calibration.tick(6.0);
        calibration.reset();
        assert_eq!(calibration.state(), CalibrationState::Idle);
        assert!(calibration.baseline().is_none());
        assert_eq!(calibration.deviations(&GaitMetrics::default()), Err(GaitError::CalibrationIncomplete));
    }
}
