//! Floor Height Estimation
//!
//! ## Overview
//!
//! Toe clearance and strike detection are measured relative to the ground,
//! but the spatial session only reports foot positions. The floor estimator
//! derives a stable ground reference from those positions.
//!
//! ## Algorithm
//!
//! On every call the lower of the two foot heights is pushed into a bounded
//! window. While walking, at least one foot is almost always on the ground, so
//! the lower foot tracks the floor except during brief flight or tracker
//! glitches.
//!
//! ```text
//! low      = min(left_y, right_y)          (non-finite sides ignored)
//! floor_y  = Q₀.₁₀(window)                 (10th percentile, nearest-rank)
//! floor_std = s({ v ∈ window : v ≤ floor_y + 5 cm })
//! ```
//!
//! The low quantile makes the estimate ignore upward spikes (a foot lifted
//! while the other is occluded) as long as they stay under 90 % of the
//! window. The spike gate keeps those same samples out of the noise estimate.
//!
//! ## Readiness
//!
//! Both readings are `None` until `FLOOR_MIN_SAMPLES` lows have been seen.
//! There is no default of zero: a floor at y = 0 is a real answer only when
//! the data says so. `floor_std` additionally needs two samples inside the
//! spike gate, so with a small `min_samples` (or a window dominated by
//! spikes) `floor_y` can be `Some` while `floor_std` is still `None`.

use heapless::Vec;

use crate::{
    buffer::RingBuffer,
    constants::{
        buffers::FLOOR_WINDOW_CAPACITY,
        gait::{FLOOR_MIN_SAMPLES, FLOOR_QUANTILE, FLOOR_SPIKE_GATE_M},
    },
    stats,
    traits::Reset,
};

/// Floor estimator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorConfig {
    /// Samples needed before the estimate is reported
    pub min_samples: usize,
    /// Quantile of the low-foot window used as floor height
    pub quantile: f64,
    /// Height above the estimate beyond which samples are excluded from noise
    pub spike_gate_m: f64,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            min_samples: FLOOR_MIN_SAMPLES,
            quantile: FLOOR_QUANTILE,
            spike_gate_m: FLOOR_SPIKE_GATE_M,
        }
    }
}

/// Incremental ground-height estimator
#[derive(Debug, Clone)]
pub struct FloorEstimator {
    config: FloorConfig,
    window: RingBuffer<f64, FLOOR_WINDOW_CAPACITY>,
}

impl Default for FloorEstimator {
    fn default() -> Self {
        Self::new(FloorConfig::default())
    }
}

impl FloorEstimator {
    /// Create an estimator
    pub fn new(config: FloorConfig) -> Self {
        Self {
            config: FloorConfig {
                quantile: config.quantile.clamp(0.0, 1.0),
                min_samples: config.min_samples.clamp(1, FLOOR_WINDOW_CAPACITY),
                ..config
            },
            window: RingBuffer::new(),
        }
    }

    /// Feed the current vertical position of both feet
    ///
    /// A non-finite side is ignored; if both are non-finite the call is a no-op.
    pub fn ingest(&mut self, left_y: f64, right_y: f64) {
        let low = match (left_y.is_finite(), right_y.is_finite()) {
            (true, true) => left_y.min(right_y),
            (true, false) => left_y,
            (false, true) => right_y,
            (false, false) => {
                gait_warn!("floor: both foot heights non-finite, sample dropped");
                return;
            }
        };
        self.window.push(low);
    }

    /// Number of low-foot samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    /// True once enough samples have been seen to report an estimate
    pub fn is_ready(&self) -> bool {
        self.window.len() >= self.config.min_samples
    }

    /// Estimated floor height, `None` until ready
    pub fn floor_y(&self) -> Option<f64> {
        if !self.is_ready() {
            return None;
        }

        let mut sorted: Vec<f64, FLOOR_WINDOW_CAPACITY> = self.window.iter().copied().collect();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));

        let rank = (self.config.quantile * (sorted.len() - 1) as f64) as usize;
        sorted.get(rank).copied()
    }

    /// Standard deviation of floor-contact samples
    ///
    /// `None` until ready, and also while fewer than two window samples lie
    /// within the spike gate of `floor_y`.
    pub fn floor_std(&self) -> Option<f64> {
        let floor = self.floor_y()?;
        let gate = floor + self.config.spike_gate_m;

        stats::mean_and_std(self.window.iter().copied().filter(|v| *v <= gate)).map(|(_, std)| std)
    }

    /// Height of `y` above the floor estimate
    pub fn height_above_floor(&self, y: f64) -> Option<f64> {
        if !y.is_finite() {
            return None;
        }
        self.floor_y().map(|floor| y - floor)
    }
}

impl Reset for FloorEstimator {
    fn reset(&mut self) {
        self.window.clear();
    }
}
