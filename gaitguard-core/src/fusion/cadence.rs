//! Cadence fusion with a companion wearable
//!
//! The wearable counts steps from its accelerometer and reports a cadence
//! every second or two. The depth-derived cadence misses occluded strikes, so
//! while the wearable report is fresh the two are blended with the external
//! value favoured. Once the report is older than the freshness window the
//! derived cadence passes through untouched.

use crate::{
    constants::fusion::{CADENCE_FRESHNESS_WINDOW_S, EXTERNAL_CADENCE_WEIGHT},
    time::{age, Timestamp},
    traits::Reset,
};

/// Cadence fusion configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CadenceFusionConfig {
    /// Maximum trusted age of an external report (seconds)
    pub freshness_window_s: f64,
    /// Weight of the external cadence when fresh, in [0, 1]
    pub external_weight: f64,
}

impl Default for CadenceFusionConfig {
    fn default() -> Self {
        Self {
            freshness_window_s: CADENCE_FRESHNESS_WINDOW_S,
            external_weight: EXTERNAL_CADENCE_WEIGHT,
        }
    }
}

/// Outcome of one fusion call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CadenceFusion {
    /// Cadence to use downstream (steps/min)
    pub cadence: Option<f64>,
    /// True when the external report contributed
    pub applied: bool,
    /// Age of the external report at fusion time, if one exists
    pub external_age: Option<f64>,
}

/// Latest external cadence and its freshness gate
#[derive(Debug, Clone, Default)]
pub struct CadenceFusionManager {
    config: CadenceFusionConfig,
    external: Option<(f64, Timestamp)>,
    last_applied: bool,
}

impl CadenceFusionManager {
    /// Create a manager with no external report
    pub fn new(config: CadenceFusionConfig) -> Self {
        Self {
            config: CadenceFusionConfig {
                external_weight: config.external_weight.clamp(0.0, 1.0),
                ..config
            },
            external: None,
            last_applied: false,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CadenceFusionConfig {
        &self.config
    }

    /// Store a report from the wearable; non-finite or non-positive values are ignored
    pub fn record_external(&mut self, cadence: f64, timestamp: Timestamp) -> bool {
        if !cadence.is_finite() || cadence <= 0.0 || !timestamp.is_finite() {
            gait_warn!("cadence: external report {} at t={} ignored", cadence, timestamp);
            return false;
        }
        self.external = Some((cadence, timestamp));
        true
    }

    /// Latest external report as `(cadence, timestamp)`
    pub fn external(&self) -> Option<(f64, Timestamp)> {
        self.external
    }

    /// Blend `derived` with the external report if it is fresh at `now`
    ///
    /// A report timestamped after `now` (clock skew between devices) counts
    /// as fresh.
    pub fn fuse(&mut self, derived: Option<f64>, now: Timestamp) -> CadenceFusion {
        let derived = derived.filter(|c| c.is_finite() && *c > 0.0);
        let external_age = self.external.and_then(|(_, t)| age(t, now));

        let fresh = self.external.zip(external_age).and_then(|((cadence, _), age)| {
            (age <= self.config.freshness_window_s).then_some(cadence)
        });

        let fusion = match (fresh, derived) {
            (Some(external), Some(derived)) => {
                let w = self.config.external_weight;
                CadenceFusion {
                    cadence: Some(w * external + (1.0 - w) * derived),
                    applied: true,
                    external_age,
                }
            }
            (Some(external), None) => CadenceFusion {
                cadence: Some(external),
                applied: true,
                external_age,
            },
            (None, derived) => CadenceFusion {
                cadence: derived,
                applied: false,
                external_age,
            },
        };

        gait_trace!(
            "cadence: derived {:?} -> {:?} (applied {}, age {:?})",
            derived,
            fusion.cadence,
            fusion.applied,
            external_age
        );
        self.last_applied = fusion.applied;
        fusion
    }

    /// Whether the most recent [`fuse`](Self::fuse) call used the external value
    pub fn last_fusion_applied(&self) -> bool {
        self.last_applied
    }
}

impl Reset for CadenceFusionManager {
    fn reset(&mut self) {
        self.external = None;
        self.last_applied = false;
    }
}
