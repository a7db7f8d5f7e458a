//! Foot-Strike Detection from Spatial Samples
//!
//! ## Overview
//!
//! The detector turns a continuous stream of foot positions into discrete
//! [`StepEvent`]s. It owns a [`FloorEstimator`] and measures every foot
//! height relative to it.
//!
//! ## Detection Rule
//!
//! Each foot runs a two-state machine:
//!
//! ```text
//!            h > LIFT (2 cm)                 h ≤ CONTACT (1 cm)
//! GROUNDED ─────────────────→ AIRBORNE ──────────────────────→ GROUNDED
//!    │        record lift-off      │ record swing heights           │
//!    │        stance, double       │                                └─ strike candidate
//!    │        support                                                    (debounced)
//! ```
//!
//! A strike candidate becomes a `StepEvent` unless it is closer than
//! `MIN_STEP_INTERVAL_S` to the previous strike, or is a repeat of the same
//! foot closer than twice that interval (feet alternate in walking). At
//! most one event is emitted per frame. A suppressed strike still becomes its
//! foot's latest contact, so the next stance and stride are measured from it.
//!
//! ## Step Length Projection
//!
//! Displacement between two foot positions is projected onto the device
//! heading only when the forward component carries at least 30 % of the
//! horizontal displacement. Otherwise plain horizontal distance is used:
//! projecting a mostly-sideways displacement onto a noisy heading would turn
//! lateral sway into forward step length.
//!
//! ```text
//! d = (foot − other).horizontal
//! f = |d · ĥ|
//! length = f         if f ≥ 0.3·|d|
//!          |d|       otherwise
//! ```
//!
//! ## Derived Phases
//!
//! - swing = strike − lift-off of the same foot
//! - stance = lift-off − previous strike of the same foot (previous cycle)
//! - double support = lift-off − latest strike of the other foot, when that
//!   strike falls inside this foot's stance
//! - toe clearance = lowest height over the middle half of the swing samples

use crate::{
    buffer::RingBuffer,
    constants::{
        buffers::SWING_SAMPLE_CAPACITY,
        gait::{
            CONTACT_THRESHOLD_M, HEADING_PROJECTION_MIN_RATIO, LIFT_THRESHOLD_M,
            MIN_STEP_INTERVAL_S, MIN_SWING_SAMPLES,
        },
    },
    events::{Foot, SpatialSample, StepEvent},
    floor::FloorEstimator,
    geometry::Vec3,
    time::Timestamp,
    traits::Reset,
};

/// Step detector configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Height above floor at which a foot counts as lifted (meters)
    pub lift_threshold_m: f64,
    /// Height above floor at or below which a lifted foot has landed (meters)
    pub contact_threshold_m: f64,
    /// Minimum interval between accepted strikes (seconds)
    pub min_step_interval_s: f64,
    /// Forward share of displacement required for heading projection
    pub projection_min_ratio: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            lift_threshold_m: LIFT_THRESHOLD_M,
            contact_threshold_m: CONTACT_THRESHOLD_M,
            min_step_interval_s: MIN_STEP_INTERVAL_S,
            projection_min_ratio: HEADING_PROJECTION_MIN_RATIO,
        }
    }
}

/// Per-foot tracking state
#[derive(Debug, Clone, Default)]
struct FootTrack {
    airborne: bool,
    lift_off: Option<Timestamp>,
    last_strike: Option<(Timestamp, Vec3)>,
    stance_duration: Option<f64>,
    double_support: Option<f64>,
    swing_heights: RingBuffer<f64, SWING_SAMPLE_CAPACITY>,
}

impl FootTrack {
    /// Lowest height over the middle half of the swing
    fn toe_clearance(&self) -> Option<f64> {
        let n = self.swing_heights.len();
        if n < MIN_SWING_SAMPLES {
            return None;
        }
        let start = n / 4;
        let end = n - n / 4;
        self.swing_heights
            .iter()
            .skip(start)
            .take(end - start)
            .copied()
            .reduce(f64::min)
    }
}

/// Outcome of one foot's state update
enum FootTransition {
    None,
    Strike,
}

/// Emits `StepEvent`s from a stream of `SpatialSample`s
#[derive(Debug, Clone)]
pub struct StepEventDetector {
    config: DetectorConfig,
    floor: FloorEstimator,
    feet: [FootTrack; 2],
    last_emitted: Option<(Foot, Timestamp)>,
    next_id: u64,
}

impl Default for StepEventDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl StepEventDetector {
    /// Create a detector with its own floor estimator
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            floor: FloorEstimator::default(),
            feet: [FootTrack::default(), FootTrack::default()],
            last_emitted: None,
            next_id: 1,
        }
    }

    /// The floor estimator feeding this detector
    pub fn floor(&self) -> &FloorEstimator {
        &self.floor
    }

    /// Number of strikes emitted so far
    pub fn steps_emitted(&self) -> u64 {
        self.next_id - 1
    }

    /// Process one frame, returning a strike if one was detected
    pub fn process(&mut self, sample: &SpatialSample) -> Option<StepEvent> {
        if !sample.timestamp.is_finite() || !sample.left_foot.is_finite() || !sample.right_foot.is_finite() {
            gait_warn!("step detector: non-finite sample at t={}, dropped", sample.timestamp);
            return None;
        }

        self.floor.ingest(sample.left_foot.y, sample.right_foot.y);
        if !self.floor.is_ready() {
            return None;
        }

        let mut emitted = None;
        for foot in [Foot::Left, Foot::Right] {
            if let FootTransition::Strike = self.update_foot(foot, sample) {
                if emitted.is_some() {
                    gait_trace!("step detector: {:?} strike at t={} shares a frame, suppressed", foot, sample.timestamp);
                } else if self.passes_debounce(foot, sample.timestamp) {
                    emitted = Some(self.emit(foot, sample));
                }
                // Suppressed strikes still anchor the next stance and stride
                self.feet[foot.index()].last_strike = Some((sample.timestamp, sample.foot(foot)));
            }
        }
        emitted
    }

    fn update_foot(&mut self, foot: Foot, sample: &SpatialSample) -> FootTransition {
        let height = match self.floor.height_above_floor(sample.foot(foot).y) {
            Some(h) => h,
            None => return FootTransition::None,
        };
        let t = sample.timestamp;
        let other_strike = self.feet[foot.opposite().index()].last_strike.map(|(ts, _)| ts);
        let track = &mut self.feet[foot.index()];

        if !track.airborne {
            if height > self.config.lift_threshold_m {
                track.airborne = true;
                track.lift_off = Some(t);
                track.swing_heights.clear();
                track.swing_heights.push(height);

                let own_strike = track.last_strike.map(|(ts, _)| ts);
                track.stance_duration = own_strike.map(|ts| t - ts).filter(|d| *d >= 0.0);
                track.double_support = match (own_strike, other_strike) {
                    (Some(own), Some(other)) if other > own && other <= t => Some(t - other),
                    _ => None,
                };
            }
            return FootTransition::None;
        }

        if height <= self.config.contact_threshold_m {
            track.airborne = false;
            FootTransition::Strike
        } else {
            track.swing_heights.push(height);
            FootTransition::None
        }
    }

    fn passes_debounce(&self, foot: Foot, t: Timestamp) -> bool {
        let (last_foot, last_t) = match self.last_emitted {
            Some(last) => last,
            None => return true,
        };
        let interval = t - last_t;
        let min_interval = if last_foot == foot {
            2.0 * self.config.min_step_interval_s
        } else {
            self.config.min_step_interval_s
        };
        if interval < min_interval {
            gait_trace!("step detector: {:?} strike at t={} debounced ({}s)", foot, t, interval);
            return false;
        }
        true
    }

    /// Build the event for an accepted strike; the caller records the strike
    fn emit(&mut self, foot: Foot, sample: &SpatialSample) -> StepEvent {
        let t = sample.timestamp;
        let position = sample.foot(foot);
        let other_position = sample.foot(foot.opposite());
        let ratio = self.config.projection_min_ratio;
        let track = &self.feet[foot.index()];

        let mut event = StepEvent::new(self.next_id, foot, t).with_position(position);
        event.step_length = projected_length(position.sub(other_position), sample.heading, ratio);
        event.stride_length = track
            .last_strike
            .and_then(|(_, previous)| projected_length(position.sub(previous), sample.heading, ratio));
        event.swing_duration = track.lift_off.map(|lift| t - lift).filter(|d| *d >= 0.0);
        event.stance_duration = track.stance_duration;
        event.double_support = track.double_support;
        event.toe_clearance = track.toe_clearance();

        self.last_emitted = Some((foot, t));
        self.next_id += 1;

        gait_debug!("step detector: {:?} strike #{} at t={:.3}", foot, event.id, t);
        event
    }
}

impl Reset for StepEventDetector {
    fn reset(&mut self) {
        self.floor.reset();
        self.feet = [FootTrack::default(), FootTrack::default()];
        self.last_emitted = None;
        self.next_id = 1;
    }
}

/// Length of a displacement, projected onto the heading when the forward part
/// carries at least `min_ratio` of it
///
/// Falls back to horizontal Euclidean distance when the heading is unusable
/// or the displacement is mostly lateral. `None` for non-finite input.
pub fn projected_length(displacement: Vec3, heading: Vec3, min_ratio: f64) -> Option<f64> {
    let horizontal = displacement.horizontal();
    let total = horizontal.norm();
    if !total.is_finite() {
        return None;
    }

    let forward_axis = match heading.horizontal().normalized() {
        Some(axis) => axis,
        None => return Some(total),
    };

    let forward = libm::fabs(horizontal.dot(forward_axis));
    if forward >= min_ratio * total {
        Some(forward)
    } else {
        Some(total)
    }
}
