//! Rolling Gait Metrics Aggregation
//!
//! ## Overview
//!
//! The aggregator consumes [`StepEvent`]s one at a time and, after each one,
//! produces a [`GaitRollingAggregate`]: the recent step history plus every
//! derived gait metric that the history supports. Metrics the data cannot
//! support are `None`.
//!
//! All rolling state lives in rings of the same capacity
//! (`STEP_HISTORY_CAPACITY`), so no metric is ever computed over more steps
//! than the history holds.
//!
//! ## Metrics
//!
//! ```text
//! cadence          = (n − 1) / span × 60          over the trailing 10 s
//! step length      = mean(accepted lengths)
//! stride time      = Δt of the two latest same-foot strikes (left, else right)
//! stride length    = mean(stride lengths)  or  2 × step length
//! walking speed    = stride length / stride time
//! stance %, swing% = mean stance, mean swing normalised to sum to 100
//! double support % = mean(explicit interval) / stride time × 100     [Explicit]
//!                    max(0, 100 − (stance% + swing%))                [Residual]
//! CV               = s / mean  (N − 1; needs ≥ 2 samples, mean > 0)
//! asymmetry        = |L − R| / ((L + R) / 2) × 100
//! ```
//!
//! ## Step-Length Outliers
//!
//! A length is rejected when it is outside the physiologic band
//! (0.20–1.80 m) or, once six in-band lengths are in the window, more than
//! 3σ from their mean (σ floored at 1 cm). Rejected lengths are left out of
//! every length-based average, but the `StepEvent` itself is still stored:
//! its timing is valid even if its length is not.
//!
//! ## Double Support
//!
//! Two formulas exist and they are not numerically equivalent. The explicit
//! path is used whenever any event in the history carries a double-support
//! interval and a stride time exists; the residual path is the fallback.
//! [`GaitRollingAggregate::double_support_source`] records which one fired.

use heapless::Vec;

use crate::{
    buffer::RingBuffer,
    constants::{
        buffers::STEP_HISTORY_CAPACITY,
        gait::{
            CADENCE_WINDOW_S, MAX_STEP_LENGTH_M, MAX_TOE_CLEARANCE_M, MIN_OUTLIER_SAMPLES,
            MIN_STEP_LENGTH_M, MIN_TOE_CLEARANCE_M, OUTLIER_SIGMA, OUTLIER_SIGMA_FLOOR_M, PERCENT,
            SECONDS_PER_MINUTE,
        },
    },
    events::{Foot, StepEvent},
    stats,
    traits::Reset,
};

/// Aggregator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatorConfig {
    /// Trailing window for cadence (seconds)
    pub cadence_window_s: f64,
    /// Shortest plausible step length (meters)
    pub min_step_length_m: f64,
    /// Longest plausible step length (meters)
    pub max_step_length_m: f64,
    /// Rejection distance from the running mean, in σ
    pub outlier_sigma: f64,
    /// In-band lengths required before the σ rule applies
    pub min_outlier_samples: usize,
    /// Lower bound on σ for the outlier rule (meters)
    pub sigma_floor_m: f64,
    /// Lowest accepted toe clearance (meters)
    pub min_toe_clearance_m: f64,
    /// Highest accepted toe clearance (meters)
    pub max_toe_clearance_m: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            cadence_window_s: CADENCE_WINDOW_S,
            min_step_length_m: MIN_STEP_LENGTH_M,
            max_step_length_m: MAX_STEP_LENGTH_M,
            outlier_sigma: OUTLIER_SIGMA,
            min_outlier_samples: MIN_OUTLIER_SAMPLES,
            sigma_floor_m: OUTLIER_SIGMA_FLOOR_M,
            min_toe_clearance_m: MIN_TOE_CLEARANCE_M,
            max_toe_clearance_m: MAX_TOE_CLEARANCE_M,
        }
    }
}

/// Which formula produced the double-support percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DoubleSupportSource {
    /// Mean explicit double-support interval over stride time
    Explicit,
    /// 100 minus the stance and swing percentages
    Residual,
}

/// Snapshot of rolling gait metrics after one ingest
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitRollingAggregate {
    /// Recent strikes, oldest first (outliers included)
    pub history: Vec<StepEvent, STEP_HISTORY_CAPACITY>,
    /// Steps per minute over the trailing window
    pub cadence: Option<f64>,
    /// Mean accepted step length (meters)
    pub step_length: Option<f64>,
    /// Mean stride length (meters)
    pub stride_length: Option<f64>,
    /// Latest same-foot strike interval (seconds)
    pub stride_time: Option<f64>,
    /// Stride length over stride time (m/s)
    pub walking_speed: Option<f64>,
    /// Mean interval between consecutive strikes (seconds)
    pub step_time: Option<f64>,
    /// Stance share of the gait cycle (%)
    pub stance_pct: Option<f64>,
    /// Swing share of the gait cycle (%)
    pub swing_pct: Option<f64>,
    /// Double-support share of the gait cycle (%)
    pub double_support_pct: Option<f64>,
    /// Formula behind `double_support_pct`
    pub double_support_source: Option<DoubleSupportSource>,
    /// Step-time coefficient of variation
    pub step_time_cv: Option<f64>,
    /// Step-length coefficient of variation
    pub step_length_cv: Option<f64>,
    /// Stride-speed coefficient of variation
    pub speed_cv: Option<f64>,
    /// Left/right step-length asymmetry (%)
    pub step_length_asymmetry: Option<f64>,
    /// Left/right step-time asymmetry (%)
    pub step_time_asymmetry: Option<f64>,
    /// Mean accepted toe clearance (meters)
    pub toe_clearance: Option<f64>,
    /// Step lengths rejected since the last reset
    pub outliers_rejected: u32,
}

/// One step length as seen by the outlier rule
#[derive(Debug, Clone, Copy, PartialEq)]
struct LengthSample {
    value: f64,
    foot: Foot,
    in_band: bool,
    accepted: bool,
}

/// Rolling gait metrics over a bounded step history
#[derive(Debug, Clone)]
pub struct GaitMetricsAggregator {
    config: AggregatorConfig,
    history: RingBuffer<StepEvent, STEP_HISTORY_CAPACITY>,
    lengths: RingBuffer<LengthSample, STEP_HISTORY_CAPACITY>,
    clearances: RingBuffer<f64, STEP_HISTORY_CAPACITY>,
    speeds: RingBuffer<f64, STEP_HISTORY_CAPACITY>,
    outliers_rejected: u32,
}

impl Default for GaitMetricsAggregator {
    fn default() -> Self {
        Self::new(AggregatorConfig::default())
    }
}

impl GaitMetricsAggregator {
    /// Create an empty aggregator
    pub fn new(config: AggregatorConfig) -> Self {
        Self {
            config,
            history: RingBuffer::new(),
            lengths: RingBuffer::new(),
            clearances: RingBuffer::new(),
            speeds: RingBuffer::new(),
            outliers_rejected: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Number of strikes in the history
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when no strike has been ingested since the last reset
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Record one strike and return the updated metrics
    ///
    /// An event with a non-finite timestamp carries no usable timing and is
    /// dropped; the returned snapshot then reflects the unchanged history.
    pub fn ingest(&mut self, event: StepEvent) -> GaitRollingAggregate {
        if !event.timestamp.is_finite() {
            gait_warn!("aggregator: step #{} has non-finite timestamp, dropped", event.id);
            return self.snapshot();
        }

        self.history.push(event);

        if let Some(length) = event.step_length {
            let sample = self.classify_length(length, event.foot);
            if !sample.accepted {
                self.outliers_rejected = self.outliers_rejected.saturating_add(1);
                gait_debug!(
                    "aggregator: step #{} length {:.3} m rejected (in band: {})",
                    event.id,
                    length,
                    sample.in_band
                );
            }
            self.lengths.push(sample);
        }

        if let Some(clearance) = event.toe_clearance {
            if clearance.is_finite()
                && clearance >= self.config.min_toe_clearance_m
                && clearance <= self.config.max_toe_clearance_m
            {
                self.clearances.push(clearance);
            } else {
                gait_debug!("aggregator: toe clearance {} outside band, excluded", clearance);
            }
        }

        if let Some(speed) = self.walking_speed() {
            self.speeds.push(speed);
        }

        self.snapshot()
    }

    /// Metrics for the current history without ingesting anything
    pub fn snapshot(&self) -> GaitRollingAggregate {
        let stride_time = self.stride_time();
        let stride_length = self.stride_length();
        let (stance_pct, swing_pct) = self.phase_percentages();
        let (double_support_pct, double_support_source) =
            self.double_support(stride_time, stance_pct, swing_pct);

        GaitRollingAggregate {
            history: self.history.iter().copied().collect(),
            cadence: self.cadence(),
            step_length: self.mean_step_length(),
            stride_length,
            stride_time,
            walking_speed: speed_from(stride_length, stride_time),
            step_time: stats::mean(self.step_intervals()),
            stance_pct,
            swing_pct,
            double_support_pct,
            double_support_source,
            step_time_cv: stats::coefficient_of_variation(self.step_intervals()),
            step_length_cv: stats::coefficient_of_variation(self.accepted_lengths(None)),
            speed_cv: stats::coefficient_of_variation(self.speeds.iter().copied()),
            step_length_asymmetry: stats::asymmetry_pct(
                stats::mean(self.accepted_lengths(Some(Foot::Left))),
                stats::mean(self.accepted_lengths(Some(Foot::Right))),
            ),
            step_time_asymmetry: stats::asymmetry_pct(
                self.half_stride_interval(Foot::Left),
                self.half_stride_interval(Foot::Right),
            ),
            toe_clearance: stats::mean(self.clearances.iter().copied()),
            outliers_rejected: self.outliers_rejected,
        }
    }

    /// Decide whether a new step length may enter the averages
    fn classify_length(&self, value: f64, foot: Foot) -> LengthSample {
        let in_band = value.is_finite()
            && value >= self.config.min_step_length_m
            && value <= self.config.max_step_length_m;

        let mut accepted = in_band;
        if in_band {
            let raw = self.lengths.iter().filter(|s| s.in_band).map(|s| s.value);
            if self.lengths.iter().filter(|s| s.in_band).count() >= self.config.min_outlier_samples {
                if let Some((mean, std)) = stats::mean_and_std(raw) {
                    let sigma = std.max(self.config.sigma_floor_m);
                    accepted = libm::fabs(value - mean) <= self.config.outlier_sigma * sigma;
                }
            }
        }

        LengthSample {
            value,
            foot,
            in_band,
            accepted,
        }
    }

    fn accepted_lengths(&self, foot: Option<Foot>) -> impl Iterator<Item = f64> + '_ {
        self.lengths
            .iter()
            .filter(move |s| s.accepted && foot.map_or(true, |f| s.foot == f))
            .map(|s| s.value)
    }

    fn mean_step_length(&self) -> Option<f64> {
        stats::mean(self.accepted_lengths(None))
    }

    fn cadence(&self) -> Option<f64> {
        let latest = self.history.last()?.timestamp;
        let window_start = latest - self.config.cadence_window_s;

        let mut count = 0usize;
        let mut earliest = latest;
        for event in self.history.iter().rev() {
            if event.timestamp < window_start {
                break;
            }
            count += 1;
            earliest = earliest.min(event.timestamp);
        }

        let span = latest - earliest;
        if count < 2 || span <= 0.0 {
            return None;
        }
        Some((count - 1) as f64 / span * SECONDS_PER_MINUTE)
    }

    /// Positive intervals between consecutive strikes
    fn step_intervals(&self) -> impl Iterator<Item = f64> + '_ {
        self.history
            .iter()
            .zip(self.history.iter().skip(1))
            .map(|(a, b)| b.timestamp - a.timestamp)
            .filter(|dt| *dt > 0.0)
    }

    /// Strike times of one foot, newest first
    fn strikes(&self, foot: Foot) -> impl Iterator<Item = f64> + '_ {
        self.history
            .iter()
            .rev()
            .filter(move |e| e.foot == foot)
            .map(|e| e.timestamp)
    }

    /// Interval between the two newest strikes of `foot`
    ///
    /// Right after ingesting a strike of `foot` this is the stride that strike
    /// completed.
    pub fn latest_stride_time(&self, foot: Foot) -> Option<f64> {
        let mut strikes = self.strikes(foot);
        let newest = strikes.next()?;
        let previous = strikes.next()?;
        let dt = newest - previous;
        (dt > 0.0).then_some(dt)
    }

    fn stride_time(&self) -> Option<f64> {
        self.latest_stride_time(Foot::Left)
            .or_else(|| self.latest_stride_time(Foot::Right))
    }

    /// Mean half same-foot interval for one foot (step-time proxy)
    fn half_stride_interval(&self, foot: Foot) -> Option<f64> {
        let newest_first = self.strikes(foot);
        let older = self.strikes(foot).skip(1);
        stats::mean(
            newest_first
                .zip(older)
                .map(|(newer, older)| newer - older)
                .filter(|dt| *dt > 0.0)
                .map(|dt| dt / 2.0),
        )
    }

    fn stride_length(&self) -> Option<f64> {
        let (min, max) = (2.0 * self.config.min_step_length_m, 2.0 * self.config.max_step_length_m);
        let recorded = stats::mean(
            self.history
                .iter()
                .filter_map(|e| e.stride_length)
                .filter(|l| l.is_finite() && *l >= min && *l <= max),
        );
        recorded.or_else(|| self.mean_step_length().map(|step| step * 2.0))
    }

    fn walking_speed(&self) -> Option<f64> {
        speed_from(self.stride_length(), self.stride_time())
    }

    fn phase_percentages(&self) -> (Option<f64>, Option<f64>) {
        let stance = stats::mean(
            self.history
                .iter()
                .filter_map(|e| e.stance_duration)
                .filter(|d| stats::is_usable_duration(*d)),
        );
        let swing = stats::mean(
            self.history
                .iter()
                .filter_map(|e| e.swing_duration)
                .filter(|d| stats::is_usable_duration(*d)),
        );

        match (stance, swing) {
            (Some(stance), Some(swing)) if stance + swing > 0.0 => {
                let cycle = stance + swing;
                (Some(stance / cycle * PERCENT), Some(swing / cycle * PERCENT))
            }
            _ => (None, None),
        }
    }

    fn double_support(
        &self,
        stride_time: Option<f64>,
        stance_pct: Option<f64>,
        swing_pct: Option<f64>,
    ) -> (Option<f64>, Option<DoubleSupportSource>) {
        let explicit = stats::mean(
            self.history
                .iter()
                .filter_map(|e| e.double_support)
                .filter(|d| stats::is_usable_duration(*d)),
        );

        if let (Some(interval), Some(stride)) = (explicit, stride_time) {
            if stride > 0.0 {
                return (Some(interval / stride * PERCENT), Some(DoubleSupportSource::Explicit));
            }
        }

        match (stance_pct, swing_pct) {
            (Some(stance), Some(swing)) => (
                Some((PERCENT - (stance + swing)).max(0.0)),
                Some(DoubleSupportSource::Residual),
            ),
            _ => (None, None),
        }
    }
}

impl Reset for GaitMetricsAggregator {
    fn reset(&mut self) {
        self.history.clear();
        self.lengths.clear();
        self.clearances.clear();
        self.speeds.clear();
        self.outliers_rejected = 0;
    }
}

fn speed_from(stride_length: Option<f64>, stride_time: Option<f64>) -> Option<f64> {
    match (stride_length, stride_time) {
        (Some(length), Some(time)) if time > 0.0 => Some(length / time),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foot_for(i: usize) -> Foot {
        if i % 2 == 0 {
            Foot::Left
        } else {
            Foot::Right
        }
    }

    /// Alternating strikes at a fixed interval with a fixed step length
    fn steady_walk(aggregator: &mut GaitMetricsAggregator, steps: usize, interval: f64, length: f64) -> GaitRollingAggregate {
        let mut last = GaitRollingAggregate::default();
        for i in 0..steps {
            let event = StepEvent::new(i as u64, foot_for(i), i as f64 * interval).with_step_length(length);
            last = aggregator.ingest(event);
        }
        last
    }

    #[test]
    fn single_event_has_no_rates() {
        let mut aggregator = GaitMetricsAggregator::default();
        let aggregate = aggregator.ingest(StepEvent::new(0, Foot::Left, 0.0).with_step_length(0.6));
        assert_eq!(aggregate.history.len(), 1);
        assert!(aggregate.cadence.is_none());
        assert!(aggregate.stride_time.is_none());
        assert!(aggregate.walking_speed.is_none());
        assert!(aggregate.step_length_cv.is_none());
        assert_eq!(aggregate.step_length, Some(0.6));
    }

    #[test]
    fn cadence_and_speed_for_regular_walk() {
        let mut aggregator = GaitMetricsAggregator::default();
        let aggregate = steady_walk(&mut aggregator, 10, 0.6, 0.6);

        assert!((aggregate.cadence.unwrap() - 100.0).abs() < 2.0);
        assert!((aggregate.stride_time.unwrap() - 1.2).abs() < 1e-9);
        assert!((aggregate.stride_length.unwrap() - 1.2).abs() < 1e-9);
        assert!((aggregate.walking_speed.unwrap() - 1.0).abs() < 0.05);
        assert!((aggregate.step_time.unwrap() - 0.6).abs() < 1e-9);
        assert!(aggregate.step_time_asymmetry.unwrap() < 1e-9);
    }

    #[test]
    fn cadence_uses_trailing_window_only() {
        let mut aggregator = GaitMetricsAggregator::default();
        // Slow start: one step every 2 s
        for i in 0..5 {
            aggregator.ingest(StepEvent::new(i, foot_for(i as usize), i as f64 * 2.0));
        }
        // Then 0.5 s steps for 12 s
        let mut aggregate = GaitRollingAggregate::default();
        for i in 0..25 {
            let t = 8.0 + 0.5 * (i + 1) as f64;
            aggregate = aggregator.ingest(StepEvent::new(10 + i, foot_for(i as usize + 1), t));
        }
        assert!((aggregate.cadence.unwrap() - 120.0).abs() < 1e-6);
    }

    #[test]
    fn physiologic_outlier_is_rejected_but_kept() {
        let mut aggregator = GaitMetricsAggregator::default();
        steady_walk(&mut aggregator, 8, 0.6, 0.6);
        let aggregate = aggregator.ingest(StepEvent::new(99, Foot::Left, 4.8).with_step_length(2.2));

        assert!((aggregate.step_length.unwrap() - 0.6).abs() < 0.05);
        assert_eq!(aggregate.outliers_rejected, 1);
        assert_eq!(aggregate.history.len(), 9);
        assert_eq!(aggregate.history.last().unwrap().step_length, Some(2.2));
    }

    #[test]
    fn sigma_outlier_needs_six_samples() {
        let lengths = [0.60, 0.62, 0.59, 0.61, 0.60];
        let mut aggregator = GaitMetricsAggregator::default();
        for (i, l) in lengths.iter().enumerate() {
            aggregator.ingest(StepEvent::new(i as u64, foot_for(i), i as f64 * 0.6).with_step_length(*l));
        }
        // Five raw samples: in band, so accepted despite being far off
        let early = aggregator.ingest(StepEvent::new(5, Foot::Right, 3.0).with_step_length(1.2));
        assert_eq!(early.outliers_rejected, 0);

        // Now ≥ 6 in-band samples: a jump well beyond 3σ is rejected
        let mut aggregator = GaitMetricsAggregator::default();
        for i in 0..8 {
            let l = lengths[i % lengths.len()];
            aggregator.ingest(StepEvent::new(i as u64, foot_for(i), i as f64 * 0.6).with_step_length(l));
        }
        let late = aggregator.ingest(StepEvent::new(8, Foot::Left, 4.8).with_step_length(1.2));
        assert_eq!(late.outliers_rejected, 1);
        assert!((late.step_length.unwrap() - 0.60).abs() < 0.01);
    }

    #[test]
    fn short_steps_below_band_rejected() {
        let mut aggregator = GaitMetricsAggregator::default();
        let aggregate = aggregator.ingest(StepEvent::new(0, Foot::Left, 0.0).with_step_length(0.05));
        assert!(aggregate.step_length.is_none());
        assert_eq!(aggregate.outliers_rejected, 1);
    }

    #[test]
    fn variability_and_asymmetry() {
        let mut aggregator = GaitMetricsAggregator::default();
        let mut aggregate = GaitRollingAggregate::default();
        for i in 0..12 {
            let length = if i % 2 == 0 { 0.66 } else { 0.60 };
            let event = StepEvent::new(i, foot_for(i as usize), i as f64 * 0.6).with_step_length(length);
            aggregate = aggregator.ingest(event);
        }
        let asymmetry = aggregate.step_length_asymmetry.unwrap();
        assert!((asymmetry - 9.5238).abs() < 1e-3);
        assert!(aggregate.step_length_cv.unwrap() > 0.0);
        assert!(aggregate.step_time_cv.unwrap() < 1e-9);
    }

    #[test]
    fn explicit_double_support_takes_precedence() {
        let mut aggregator = GaitMetricsAggregator::default();
        let mut aggregate = GaitRollingAggregate::default();
        for i in 0..6 {
            let event = StepEvent::new(i, foot_for(i as usize), i as f64 * 0.6)
                .with_step_length(0.6)
                .with_phases(0.8, 0.4)
                .with_double_support(0.24);
            aggregate = aggregator.ingest(event);
        }
        assert_eq!(aggregate.double_support_source, Some(DoubleSupportSource::Explicit));
        assert!((aggregate.double_support_pct.unwrap() - 20.0).abs() < 1e-9);
        assert!((aggregate.stance_pct.unwrap() - 66.6667).abs() < 1e-3);
        assert!((aggregate.swing_pct.unwrap() - 33.3333).abs() < 1e-3);
    }

    #[test]
    fn residual_double_support_without_explicit_data() {
        let mut aggregator = GaitMetricsAggregator::default();
        let mut aggregate = GaitRollingAggregate::default();
        for i in 0..4 {
            let event = StepEvent::new(i, foot_for(i as usize), i as f64 * 0.6).with_phases(0.7, 0.5);
            aggregate = aggregator.ingest(event);
        }
        assert_eq!(aggregate.double_support_source, Some(DoubleSupportSource::Residual));
        let ds = aggregate.double_support_pct.unwrap();
        assert!(ds >= 0.0 && ds < 1e-9);
    }

    #[test]
    fn negative_and_nan_durations_are_excluded() {
        let mut aggregator = GaitMetricsAggregator::default();
        aggregator.ingest(StepEvent::new(0, Foot::Left, 0.0).with_phases(-0.5, f64::NAN));
        let aggregate = aggregator.ingest(StepEvent::new(1, Foot::Right, 0.6).with_phases(0.6, 0.4));
        assert!((aggregate.stance_pct.unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn nan_timestamp_is_dropped() {
        let mut aggregator = GaitMetricsAggregator::default();
        aggregator.ingest(StepEvent::new(0, Foot::Left, 0.0));
        let aggregate = aggregator.ingest(StepEvent::new(1, Foot::Right, f64::NAN));
        assert_eq!(aggregate.history.len(), 1);
    }

    #[test]
    fn toe_clearance_excludes_out_of_band() {
        let mut aggregator = GaitMetricsAggregator::default();
        aggregator.ingest(StepEvent::new(0, Foot::Left, 0.0).with_toe_clearance(0.02));
        aggregator.ingest(StepEvent::new(1, Foot::Right, 0.6).with_toe_clearance(0.5));
        let aggregate = aggregator.ingest(StepEvent::new(2, Foot::Left, 1.2).with_toe_clearance(0.03));
        assert!((aggregate.toe_clearance.unwrap() - 0.025).abs() < 1e-12);
    }

    #[test]
    fn history_is_capped() {
        let mut aggregator = GaitMetricsAggregator::default();
        let aggregate = steady_walk(&mut aggregator, STEP_HISTORY_CAPACITY + 20, 0.5, 0.6);
        assert_eq!(aggregate.history.len(), STEP_HISTORY_CAPACITY);
        assert_eq!(aggregate.history[0].id, 20);
    }

    #[test]
    fn reset_clears_everything() {
        let mut aggregator = GaitMetricsAggregator::default();
        steady_walk(&mut aggregator, 10, 0.6, 0.6);
        aggregator.reset();
        let aggregate = aggregator.snapshot();
        assert!(aggregate.history.is_empty());
        assert!(aggregate.step_length.is_none());
        assert!(aggregate.speed_cv.is_none());
        assert_eq!(aggregate.outliers_rejected, 0);
    }
}
