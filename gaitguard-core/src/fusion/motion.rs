//! Inertial and barometric side channel
//!
//! Keeps the most recent device-motion samples and exposes descriptive
//! statistics for quality metadata. There is no fusion decision here: a
//! shaking device or a staircase shows up in these numbers and the quality
//! layer decides what to make of it.
//!
//! ```text
//! accel_var     = s²(|a|)              over the ring, N − 1, needs ≥ 2
//! mean_rot_rate = mean(|ω|)
//! micro_elev_m  = max(alt) − min(alt)
//! ```

use crate::{
    buffer::RingBuffer,
    constants::buffers::MOTION_BUFFER_CAPACITY,
    geometry::Vec3,
    stats,
    traits::Reset,
};

/// Descriptive motion statistics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MotionStats {
    /// Variance of acceleration magnitude ((m/s²)²)
    pub accel_variance: Option<f64>,
    /// Mean rotation-rate magnitude (rad/s)
    pub mean_rotation_rate: Option<f64>,
    /// Altitude range over the buffer (meters)
    pub micro_elevation_change: Option<f64>,
}

/// Bounded buffers of raw device-motion samples
#[derive(Debug, Clone, Default)]
pub struct MotionFusionManager {
    acceleration: RingBuffer<f64, MOTION_BUFFER_CAPACITY>,
    rotation_rate: RingBuffer<f64, MOTION_BUFFER_CAPACITY>,
    altitude: RingBuffer<f64, MOTION_BUFFER_CAPACITY>,
}

impl MotionFusionManager {
    /// Empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one acceleration sample (m/s²); non-finite samples are dropped
    pub fn record_acceleration(&mut self, acceleration: Vec3) {
        if acceleration.is_finite() {
            self.acceleration.push(acceleration.norm());
        }
    }

    /// Record one rotation-rate sample (rad/s); non-finite samples are dropped
    pub fn record_rotation_rate(&mut self, rotation_rate: Vec3) {
        if rotation_rate.is_finite() {
            self.rotation_rate.push(rotation_rate.norm());
        }
    }

    /// Record one relative altitude reading (meters); non-finite readings are dropped
    pub fn record_altitude(&mut self, altitude_m: f64) {
        if altitude_m.is_finite() {
            self.altitude.push(altitude_m);
        }
    }

    /// Variance of acceleration magnitude, `None` below two samples
    pub fn accel_variance(&self) -> Option<f64> {
        stats::sample_variance(self.acceleration.iter().copied())
    }

    /// Mean rotation-rate magnitude, `None` without samples
    pub fn mean_rotation_rate(&self) -> Option<f64> {
        stats::mean(self.rotation_rate.iter().copied())
    }

    /// Altitude range over the buffer, `None` without samples
    pub fn micro_elevation_change(&self) -> Option<f64> {
        let mut values = self.altitude.iter().copied();
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(max - min)
    }

    /// All statistics at once
    pub fn stats(&self) -> MotionStats {
        MotionStats {
            accel_variance: self.accel_variance(),
            mean_rotation_rate: self.mean_rotation_rate(),
            micro_elevation_change: self.micro_elevation_change(),
        }
    }

    /// Samples held per channel as `(acceleration, rotation, altitude)`
    pub fn sample_counts(&self) -> (usize, usize, usize) {
        (self.acceleration.len(), self.rotation_rate.len(), self.altitude.len())
    }
}

impl Reset for MotionFusionManager {
    fn reset(&mut self) {
        self.acceleration.clear();
        self.rotation_rate.clear();
        self.altitude.clear();
    }
}
