//! Engineered Gait Features
//!
//! Slower-moving features derived from a rolling stream of per-step samples.
//! Where the aggregator answers "what is the gait right now", the feature
//! engineer tracks how the gait is drifting: how stable stride timing is,
//! what the person's usual toe clearance is, and whether clearance dips have
//! coincided with sudden speed-ups (near trips).
//!
//! ## Features
//!
//! ```text
//! stride-time CV   = s / mean over window stride times        (≥ 5 samples)
//! clearance base   = α·c + (1 − α)·base,  α = 0.15            (seeded by first c)
//! harmonic ratio   = 1.0 + 1 / (1 + 10·cv_stride)   ∈ (1.0, 2.0]   stride-time path
//!                  = 2.5 + 1 / (1 + 10·cv_external) ∈ (2.5, 3.5]   external path
//! near trip        = c < 0.6·base_prev  AND  cadence > 1.05·cadence_prev
//! ```
//!
//! `cadence_prev` is the cadence of the immediately preceding sample. When
//! that sample carried no cadence, no speed-up can be judged and the next
//! sample cannot count as a near trip.
//!
//! The two harmonic-ratio ranges never overlap, so a consumer can always tell
//! which signal fed the estimate (also reported as [`HarmonicSource`]).

use crate::{
    buffer::RingBuffer,
    constants::{
        buffers::FEATURE_WINDOW_CAPACITY,
        gait::{
            CLEARANCE_EWMA_ALPHA, HARMONIC_CV_SCALE, HARMONIC_EXTERNAL_BASE, HARMONIC_STRIDE_BASE,
            MIN_STRIDE_CV_SAMPLES, NEAR_TRIP_CADENCE_JUMP, NEAR_TRIP_CLEARANCE_RATIO,
        },
    },
    stats,
    time::Timestamp,
    traits::Reset,
};

/// Feature engineer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureConfig {
    /// EWMA smoothing constant for the clearance baseline
    pub ewma_alpha: f64,
    /// Stride times required for a stride-time CV
    pub min_stride_cv_samples: usize,
    /// Clearance fraction of baseline below which a dip counts
    pub near_trip_clearance_ratio: f64,
    /// Relative cadence increase that counts as a speed-up
    pub near_trip_cadence_jump: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            ewma_alpha: CLEARANCE_EWMA_ALPHA,
            min_stride_cv_samples: MIN_STRIDE_CV_SAMPLES,
            near_trip_clearance_ratio: NEAR_TRIP_CLEARANCE_RATIO,
            near_trip_cadence_jump: NEAR_TRIP_CADENCE_JUMP,
        }
    }
}

/// One input to the feature engineer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureSample {
    /// Sample time
    pub timestamp: Timestamp,
    /// Stride completed at this sample (seconds), `None` when none completed
    pub stride_time: Option<f64>,
    /// Latest cadence (steps/min)
    pub cadence: Option<f64>,
    /// Latest toe clearance (meters)
    pub toe_clearance: Option<f64>,
    /// Step-length CV from an external source, if one is available
    pub step_length_cv: Option<f64>,
}

/// Signal that fed the harmonic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HarmonicSource {
    /// Stride-time CV over the feature window
    StrideTime,
    /// Externally supplied step-length CV
    ExternalStepLength,
}

/// Snapshot of engineered features
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EngineeredFeatures {
    /// Stride-time coefficient of variation
    pub stride_time_cv: Option<f64>,
    /// Smoothness proxy, see module docs for ranges
    pub harmonic_ratio: Option<f64>,
    /// Which signal produced `harmonic_ratio`
    pub harmonic_source: Option<HarmonicSource>,
    /// Smoothed toe-clearance baseline (meters)
    pub clearance_baseline: Option<f64>,
    /// Near-trip events since the last reset
    pub near_trip_count: u32,
    /// Samples currently in the window
    pub sample_count: usize,
}

/// Rolling feature derivation
#[derive(Debug, Clone)]
pub struct GaitFeatureEngineer {
    config: FeatureConfig,
    window: RingBuffer<FeatureSample, FEATURE_WINDOW_CAPACITY>,
    clearance_baseline: Option<f64>,
    previous_cadence: Option<f64>,
    near_trips: u32,
}

impl Default for GaitFeatureEngineer {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

impl GaitFeatureEngineer {
    /// Create an engineer with an empty window
    pub fn new(config: FeatureConfig) -> Self {
        Self {
            config: FeatureConfig {
                ewma_alpha: config.ewma_alpha.clamp(f64::EPSILON, 1.0),
                ..config
            },
            window: RingBuffer::new(),
            clearance_baseline: None,
            previous_cadence: None,
            near_trips: 0,
        }
    }

    /// Ingest one sample and return the updated features
    pub fn ingest(&mut self, sample: FeatureSample) -> EngineeredFeatures {
        let clearance = sample.toe_clearance.filter(|c| stats::is_usable_magnitude(*c));
        let cadence = sample.cadence.filter(|c| c.is_finite() && *c > 0.0);

        // Both conditions are judged against state from before this sample
        if self.is_near_trip(clearance, cadence) {
            self.near_trips = self.near_trips.saturating_add(1);
            gait_debug!(
                "features: near trip at t={:.2} (clearance {:?}, baseline {:?})",
                sample.timestamp,
                clearance,
                self.clearance_baseline
            );
        }

        if let Some(c) = clearance {
            let alpha = self.config.ewma_alpha;
            self.clearance_baseline = Some(match self.clearance_baseline {
                Some(base) => alpha * c + (1.0 - alpha) * base,
                None => c,
            });
        }
        self.previous_cadence = cadence;

        self.window.push(sample);
        self.features()
    }

    /// Current features without ingesting
    pub fn features(&self) -> EngineeredFeatures {
        let stride_time_cv = self.stride_time_cv();
        let (harmonic_ratio, harmonic_source) = self.harmonic_ratio(stride_time_cv);

        EngineeredFeatures {
            stride_time_cv,
            harmonic_ratio,
            harmonic_source,
            clearance_baseline: self.clearance_baseline,
            near_trip_count: self.near_trips,
            sample_count: self.window.len(),
        }
    }

    fn is_near_trip(&self, clearance: Option<f64>, cadence: Option<f64>) -> bool {
        match (clearance, self.clearance_baseline, cadence, self.previous_cadence) {
            (Some(c), Some(base), Some(now), Some(before)) => {
                c < self.config.near_trip_clearance_ratio * base
                    && now > before * (1.0 + self.config.near_trip_cadence_jump)
            }
            _ => false,
        }
    }

    fn stride_time_cv(&self) -> Option<f64> {
        let strides = || {
            self.window
                .iter()
                .filter_map(|s| s.stride_time)
                .filter(|t| t.is_finite() && *t > 0.0)
        };
        if strides().count() < self.config.min_stride_cv_samples {
            return None;
        }
        stats::coefficient_of_variation(strides())
    }

    fn harmonic_ratio(&self, stride_time_cv: Option<f64>) -> (Option<f64>, Option<HarmonicSource>) {
        let external = self
            .window
            .last()
            .and_then(|s| s.step_length_cv)
            .filter(|cv| stats::is_usable_magnitude(*cv));

        if let Some(cv) = external {
            return (
                Some(HARMONIC_EXTERNAL_BASE + smoothness(cv)),
                Some(HarmonicSource::ExternalStepLength),
            );
        }
        match stride_time_cv {
            Some(cv) => (
                Some(HARMONIC_STRIDE_BASE + smoothness(cv)),
                Some(HarmonicSource::StrideTime),
            ),
            None => (None, None),
        }
    }
}

impl Reset for GaitFeatureEngineer {
    fn reset(&mut self) {
        self.window.clear();
        self.clearance_baseline = None;
        self.previous_cadence = None;
        self.near_trips = 0;
    }
}

/// Maps a non-negative CV into (0, 1]; 1 for perfectly regular gait
#[inline]
fn smoothness(cv: f64) -> f64 {
    1.0 / (1.0 + HARMONIC_CV_SCALE * cv)
}
