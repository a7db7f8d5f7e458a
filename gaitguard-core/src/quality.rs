//! Capture Quality Metadata
//!
//! ## Overview
//!
//! Two things degrade a capture without showing up in the gait numbers
//! themselves: dropped depth frames (strikes go unseen) and a shaking device
//! (positions jitter). [`FrameQualityTracker`] counts the first;
//! [`crate::MotionFusionManager`] measures the second. [`QualityMetadata`]
//! bundles both for outbound payloads and reduces them to one confidence.
//!
//! ## Quality Confidence
//!
//! ```text
//! frames  = 1 − min(1, drop% / 33)
//! motion  = 1 − 0.3 × min(1, accel_var / 16)       (1 when unknown)
//! quality = frames × motion                        ∈ [0, 1]
//! ```
//!
//! A capture with no frames at all has quality 0.

use crate::{
    constants::{
        gait::PERCENT,
        quality::{
            ACCEL_PENALTY_MAX, ACCEL_VARIANCE_FULL_PENALTY, FRAME_DROP_ZERO_QUALITY_PCT,
            QUALITY_THRESHOLD_ACCEPTABLE, QUALITY_THRESHOLD_HIGH,
        },
    },
    fusion::motion::MotionFusionManager,
    traits::Reset,
};

/// Counts delivered and dropped frames and tracks point density
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameQualityTracker {
    received: u64,
    dropped: u64,
    density_min: Option<f64>,
    density_max: Option<f64>,
    density_sum: f64,
    density_count: u64,
}

impl FrameQualityTracker {
    /// Empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delivered frame and its point density (points/m²)
    ///
    /// A missing, non-finite or negative density still counts the frame.
    pub fn record_frame(&mut self, point_density: Option<f64>) {
        self.received += 1;
        let Some(point_density) = point_density.filter(|d| d.is_finite() && *d >= 0.0) else {
            return;
        };
        self.density_min = Some(self.density_min.map_or(point_density, |m| m.min(point_density)));
        self.density_max = Some(self.density_max.map_or(point_density, |m| m.max(point_density)));
        self.density_sum += point_density;
        self.density_count += 1;
    }

    /// Record frames the capture source reported as dropped
    pub fn record_dropped(&mut self, frames: u64) {
        self.dropped = self.dropped.saturating_add(frames);
    }

    /// Frames delivered
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Share of expected frames that were dropped (%), `None` before any frame
    pub fn frame_drop_pct(&self) -> Option<f64> {
        let expected = self.received + self.dropped;
        (expected > 0).then(|| self.dropped as f64 / expected as f64 * PERCENT)
    }

    /// Lowest recorded density
    pub fn density_min(&self) -> Option<f64> {
        self.density_min
    }

    /// Highest recorded density
    pub fn density_max(&self) -> Option<f64> {
        self.density_max
    }

    /// Mean recorded density
    pub fn density_avg(&self) -> Option<f64> {
        (self.density_count > 0).then(|| self.density_sum / self.density_count as f64)
    }
}

impl Reset for FrameQualityTracker {
    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Coarse quality class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QualityLevel {
    /// At least 0.8
    High,
    /// At least 0.5
    Acceptable,
    /// Below 0.5
    Poor,
}

/// Quality metadata attached to outbound payloads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QualityMetadata {
    /// Dropped frames (%)
    pub frame_drop_pct: Option<f64>,
    /// Lowest point density
    pub point_density_min: Option<f64>,
    /// Highest point density
    pub point_density_max: Option<f64>,
    /// Mean point density
    pub point_density_avg: Option<f64>,
    /// Acceleration-magnitude variance
    pub accel_var: Option<f64>,
    /// Mean rotation-rate magnitude
    pub mean_rot_rate: Option<f64>,
    /// Altitude range (meters)
    pub micro_elev_m: Option<f64>,
}

impl QualityMetadata {
    /// Snapshot both quality sources
    pub fn collect(frames: &FrameQualityTracker, motion: &MotionFusionManager) -> Self {
        let stats = motion.stats();
        Self {
            frame_drop_pct: frames.frame_drop_pct(),
            point_density_min: frames.density_min(),
            point_density_max: frames.density_max(),
            point_density_avg: frames.density_avg(),
            accel_var: stats.accel_variance,
            mean_rot_rate: stats.mean_rotation_rate,
            micro_elev_m: stats.micro_elevation_change,
        }
    }

    /// Single quality value in [0, 1]
    pub fn quality_confidence(&self) -> f64 {
        let Some(drop_pct) = self.frame_drop_pct.filter(|d| d.is_finite()) else {
            return 0.0;
        };
        let frames = 1.0 - (drop_pct / FRAME_DROP_ZERO_QUALITY_PCT).clamp(0.0, 1.0);
        let motion = self.accel_var.filter(|v| v.is_finite()).map_or(1.0, |var| {
            1.0 - ACCEL_PENALTY_MAX * (var / ACCEL_VARIANCE_FULL_PENALTY).clamp(0.0, 1.0)
        });
        (frames * motion).clamp(0.0, 1.0)
    }

    /// Quality class of [`quality_confidence`](Self::quality_confidence)
    pub fn level(&self) -> QualityLevel {
        let q = self.quality_confidence();
        if q >= QUALITY_THRESHOLD_HIGH {
            QualityLevel::High
        } else if q >= QUALITY_THRESHOLD_ACCEPTABLE {
            QualityLevel::Acceptable
        } else {
            QualityLevel::Poor
        }
    }
}
