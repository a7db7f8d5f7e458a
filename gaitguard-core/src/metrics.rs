//! Gait metrics snapshot
//!
//! [`GaitMetrics`] is the wide bag of values handed to scoring and to the
//! post-session assembler. It is a merge of the rolling aggregate and the
//! engineered features plus a few fields filled in later (fused cadence,
//! stability, risk level).

use crate::{
    aggregator::GaitRollingAggregate,
    constants::gait::{MOBILITY_HOUSEHOLD_SPEED, MOBILITY_INDEPENDENT_SPEED, MOBILITY_LIMITED_SPEED},
    features::{EngineeredFeatures, HarmonicSource},
    risk::RiskLevel,
};

/// Functional mobility class derived from walking speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MobilityStatus {
    /// ≥ 1.0 m/s
    Independent,
    /// ≥ 0.8 m/s, community ambulation with limits
    Limited,
    /// ≥ 0.4 m/s, household ambulation
    Household,
    /// < 0.4 m/s
    Impaired,
    /// No speed available
    #[default]
    Unknown,
}

impl MobilityStatus {
    /// Classify a walking speed in m/s
    pub fn from_speed(speed: Option<f64>) -> Self {
        match speed {
            Some(s) if !s.is_finite() => Self::Unknown,
            Some(s) if s >= MOBILITY_INDEPENDENT_SPEED => Self::Independent,
            Some(s) if s >= MOBILITY_LIMITED_SPEED => Self::Limited,
            Some(s) if s >= MOBILITY_HOUSEHOLD_SPEED => Self::Household,
            Some(_) => Self::Impaired,
            None => Self::Unknown,
        }
    }
}

/// Merged gait metrics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitMetrics {
    /// Walking speed (m/s)
    pub walking_speed: Option<f64>,
    /// Cadence (steps/min), fused with an external source when one is fresh
    pub cadence: Option<f64>,
    /// Mean step length (meters)
    pub step_length: Option<f64>,
    /// Mean stride length (meters)
    pub stride_length: Option<f64>,
    /// Latest stride time (seconds)
    pub stride_time: Option<f64>,
    /// Stance share of the cycle (%)
    pub stance_pct: Option<f64>,
    /// Swing share of the cycle (%)
    pub swing_pct: Option<f64>,
    /// Double-support share of the cycle (%)
    pub double_support_pct: Option<f64>,
    /// Step-length asymmetry (%)
    pub step_length_asymmetry: Option<f64>,
    /// Step-time asymmetry (%)
    pub step_time_asymmetry: Option<f64>,
    /// Step-time CV
    pub step_time_cv: Option<f64>,
    /// Step-length CV
    pub step_length_cv: Option<f64>,
    /// Stride-speed CV
    pub speed_cv: Option<f64>,
    /// Stride-time CV from the feature window
    pub stride_time_cv: Option<f64>,
    /// Mean toe clearance (meters)
    pub toe_clearance: Option<f64>,
    /// Smoothed toe-clearance baseline (meters)
    pub clearance_baseline: Option<f64>,
    /// Smoothness proxy
    pub harmonic_ratio: Option<f64>,
    /// Source of `harmonic_ratio`
    pub harmonic_source: Option<HarmonicSource>,
    /// Trunk sway proxy (meters)
    pub sway: Option<f64>,
    /// Postural stability index in [0, 1], higher is steadier
    pub stability_index: Option<f64>,
    /// Near-trip events this session
    pub near_trip_count: u32,
    /// Mobility class from walking speed
    pub mobility_status: MobilityStatus,
    /// Risk level, filled in after scoring
    pub risk_level: Option<RiskLevel>,
}

impl GaitMetrics {
    /// Merge a rolling aggregate with engineered features
    pub fn from_parts(
        aggregate: &GaitRollingAggregate,
        features: &EngineeredFeatures,
        sway: Option<f64>,
    ) -> Self {
        Self {
            walking_speed: aggregate.walking_speed,
            cadence: aggregate.cadence,
            step_length: aggregate.step_length,
            stride_length: aggregate.stride_length,
            stride_time: aggregate.stride_time,
            stance_pct: aggregate.stance_pct,
            swing_pct: aggregate.swing_pct,
            double_support_pct: aggregate.double_support_pct,
            step_length_asymmetry: aggregate.step_length_asymmetry,
            step_time_asymmetry: aggregate.step_time_asymmetry,
            step_time_cv: aggregate.step_time_cv,
            step_length_cv: aggregate.step_length_cv,
            speed_cv: aggregate.speed_cv,
            stride_time_cv: features.stride_time_cv,
            toe_clearance: aggregate.toe_clearance,
            clearance_baseline: features.clearance_baseline,
            harmonic_ratio: features.harmonic_ratio,
            harmonic_source: features.harmonic_source,
            sway: sway.filter(|s| s.is_finite() && *s >= 0.0),
            stability_index: None,
            near_trip_count: features.near_trip_count,
            mobility_status: MobilityStatus::from_speed(aggregate.walking_speed),
            risk_level: None,
        }
    }

    /// Replace the cadence (used for the fused value)
    pub fn with_cadence(mut self, cadence: Option<f64>) -> Self {
        self.cadence = cadence;
        self
    }

    /// Attach a postural stability index, clamped to [0, 1]
    pub fn with_stability_index(mut self, index: Option<f64>) -> Self {
        self.stability_index = index.filter(|i| i.is_finite()).map(|i| i.clamp(0.0, 1.0));
        self
    }

    /// Attach the scored risk level
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobility_thresholds() {
        assert_eq!(MobilityStatus::from_speed(Some(1.2)), MobilityStatus::Independent);
        assert_eq!(MobilityStatus::from_speed(Some(1.0)), MobilityStatus::Independent);
        assert_eq!(MobilityStatus::from_speed(Some(0.85)), MobilityStatus::Limited);
        assert_eq!(MobilityStatus::from_speed(Some(0.5)), MobilityStatus::Household);
        assert_eq!(MobilityStatus::from_speed(Some(0.2)), MobilityStatus::Impaired);
        assert_eq!(MobilityStatus::from_speed(None), MobilityStatus::Unknown);
        assert_eq!(MobilityStatus::from_speed(Some(f64::NAN)), MobilityStatus::Unknown);
    }

    #[test]
    fn merge_copies_both_sources() {
        let aggregate = GaitRollingAggregate {
            walking_speed: Some(0.9),
            cadence: Some(104.0),
            toe_clearance: Some(0.02),
            ..GaitRollingAggregate::default()
        };
        let features = EngineeredFeatures {
            harmonic_ratio: Some(1.8),
            harmonic_source: Some(HarmonicSource::StrideTime),
            near_trip_count: 2,
            ..EngineeredFeatures::default()
        };
        let metrics = GaitMetrics::from_parts(&aggregate, &features, Some(0.02))
            .with_cadence(Some(110.0))
            .with_stability_index(Some(1.4))
            .with_risk_level(RiskLevel::Moderate);

        assert_eq!(metrics.walking_speed, Some(0.9));
        assert_eq!(metrics.cadence, Some(110.0));
        assert_eq!(metrics.harmonic_ratio, Some(1.8));
        assert_eq!(metrics.near_trip_count, 2);
        assert_eq!(metrics.sway, Some(0.02));
        assert_eq!(metrics.stability_index, Some(1.0));
        assert_eq!(metrics.mobility_status, MobilityStatus::Limited);
        assert_eq!(metrics.risk_level, Some(RiskLevel::Moderate));
    }
}
