//! Gait Events
//!
//! ## Event Types
//!
//! Two records cross component boundaries on the hot path:
//!
//! - [`SpatialSample`]: one decoded frame from the spatial-sensing session
//!   (both foot positions plus the device heading). Produced by the capture
//!   source, consumed by [`crate::StepEventDetector`].
//! - [`StepEvent`]: one detected foot strike. Produced by the detector (or by
//!   any other strike source), consumed by [`crate::GaitMetricsAggregator`].
//!
//! ## StepEvent lifecycle
//!
//! ```text
//! detector ──new()──→ StepEvent ──ingest()──→ aggregator history (ring, cap 64)
//!                        │                           │
//!                   never mutated              evicted oldest-first
//! ```
//!
//! A `StepEvent` is built once with the optional measurements that were
//! available at the strike and is never changed afterwards. Fields that could
//! not be measured stay `None`; the aggregator treats them as missing rather
//! than zero.

use crate::{geometry::Vec3, time::Timestamp};

/// Which foot struck the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Foot {
    /// Left foot
    Left,
    /// Right foot
    Right,
}

impl Foot {
    /// The other foot
    pub fn opposite(self) -> Self {
        match self {
            Foot::Left => Foot::Right,
            Foot::Right => Foot::Left,
        }
    }

    /// Index into per-foot arrays (left = 0, right = 1)
    pub fn index(self) -> usize {
        match self {
            Foot::Left => 0,
            Foot::Right => 1,
        }
    }
}

/// One detected foot strike
///
/// Lengths are meters, durations seconds. `double_support` is the explicit
/// interval both feet were on the ground before this foot last lifted off;
/// when present it takes precedence over the stance/swing residual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepEvent {
    /// Identity, unique within a session
    pub id: u64,
    /// Striking foot
    pub foot: Foot,
    /// Strike time (monotonic seconds)
    pub timestamp: Timestamp,
    /// Foot position at strike
    pub position: Option<Vec3>,
    /// Distance from the opposite foot at strike
    pub step_length: Option<f64>,
    /// Distance from this foot's previous strike
    pub stride_length: Option<f64>,
    /// Stance duration of this foot's previous cycle
    pub stance_duration: Option<f64>,
    /// Swing duration that ended with this strike
    pub swing_duration: Option<f64>,
    /// Minimum toe clearance during the swing that ended with this strike
    pub toe_clearance: Option<f64>,
    /// Explicit double-support interval
    pub double_support: Option<f64>,
}

impl StepEvent {
    /// Strike with no measurements beyond foot and time
    pub fn new(id: u64, foot: Foot, timestamp: Timestamp) -> Self {
        Self {
            id,
            foot,
            timestamp,
            position: None,
            step_length: None,
            stride_length: None,
            stance_duration: None,
            swing_duration: None,
            toe_clearance: None,
            double_support: None,
        }
    }

    /// Attach the strike position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a step length
    pub fn with_step_length(mut self, meters: f64) -> Self {
        self.step_length = Some(meters);
        self
    }

    /// Attach a stride length
    pub fn with_stride_length(mut self, meters: f64) -> Self {
        self.stride_length = Some(meters);
        self
    }

    /// Attach stance and swing durations
    pub fn with_phases(mut self, stance: f64, swing: f64) -> Self {
        self.stance_duration = Some(stance);
        self.swing_duration = Some(swing);
        self
    }

    /// Attach a toe clearance
    pub fn with_toe_clearance(mut self, meters: f64) -> Self {
        self.toe_clearance = Some(meters);
        self
    }

    /// Attach an explicit double-support interval
    pub fn with_double_support(mut self, seconds: f64) -> Self {
        self.double_support = Some(seconds);
        self
    }
}

/// One decoded frame from the spatial-sensing session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialSample {
    /// Frame time (monotonic seconds)
    pub timestamp: Timestamp,
    /// Left foot position
    pub left_foot: Vec3,
    /// Right foot position
    pub right_foot: Vec3,
    /// Device forward direction; only its horizontal part is used
    pub heading: Vec3,
    /// Depth points per square meter on the floor, if the source reports it
    pub point_density: Option<f64>,
}

impl SpatialSample {
    /// Build a frame
    pub fn new(timestamp: Timestamp, left_foot: Vec3, right_foot: Vec3, heading: Vec3) -> Self {
        Self {
            timestamp,
            left_foot,
            right_foot,
            heading,
            point_density: None,
        }
    }

    /// Attach the frame's point density
    pub fn with_point_density(mut self, density: f64) -> Self {
        self.point_density = Some(density);
        self
    }

    /// Position of the given foot
    pub fn foot(&self, foot: Foot) -> Vec3 {
        match foot {
            Foot::Left => self.left_foot,
            Foot::Right => self.right_foot,
        }
    }
}
