//! Fall-Risk Scoring
//!
//! ## Overview
//!
//! The heuristic scorer maps eight gait inputs to a 0–100 score. Each input
//! has a normal threshold and a "full" point; between the two its severity
//! rises linearly from 0 to 1. The score is the weighted sum of severities,
//! with weights summing to 100.
//!
//! ```text
//! input            threshold   full     weight
//! walking speed    0.8 m/s     0.4      22
//! cadence          90 spm      60        8
//! double support   25 %        40       15
//! step-length CV   0.05        0.15     12
//! speed CV         0.05        0.15     10
//! asymmetry        8 %         25       10
//! toe clearance    0.015 m     0.005    13
//! stability        0.7         0.3      10
//! ```
//!
//! A missing or non-finite input contributes nothing to the score and lowers
//! the confidence: `confidence = 0.5 + 0.45 × present / 8`.
//!
//! ## Levels
//!
//! ```text
//! low  [0, 25)   moderate [25, 50)   high [50, 75)   critical [75, 100]
//! ```

use crate::{
    constants::risk::*,
    metrics::GaitMetrics,
    stats,
    traits::RiskScorer,
};

/// Discrete fall-risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Score below 25
    Low,
    /// Score in [25, 50)
    Moderate,
    /// Score in [50, 75)
    High,
    /// Score of 75 or more
    Critical,
}

impl RiskLevel {
    /// Level for a score; NaN maps to `Low` after clamping
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= LEVEL_CRITICAL_MIN {
            Self::Critical
        } else if score >= LEVEL_HIGH_MIN {
            Self::High
        } else if score >= LEVEL_MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Inputs to a risk scorer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitRiskInputs {
    /// Walking speed (m/s)
    pub walking_speed: Option<f64>,
    /// Cadence (steps/min)
    pub cadence: Option<f64>,
    /// Double-support share (%)
    pub double_support: Option<f64>,
    /// Step-length CV
    pub step_length_cv: Option<f64>,
    /// Stride-speed CV
    pub speed_cv: Option<f64>,
    /// Step-length asymmetry (%)
    pub asymmetry_step_length: Option<f64>,
    /// Toe clearance (meters)
    pub toe_clearance: Option<f64>,
    /// Stability index in [0, 1]
    pub stability_index: Option<f64>,
}

impl GaitRiskInputs {
    /// Pick the scoring inputs out of a metrics snapshot
    pub fn from_metrics(metrics: &GaitMetrics) -> Self {
        Self {
            walking_speed: metrics.walking_speed,
            cadence: metrics.cadence,
            double_support: metrics.double_support_pct,
            step_length_cv: metrics.step_length_cv,
            speed_cv: metrics.speed_cv,
            asymmetry_step_length: metrics.step_length_asymmetry,
            toe_clearance: metrics.toe_clearance,
            stability_index: metrics.stability_index,
        }
    }

    /// Inputs in fixed order
    pub fn as_array(&self) -> [Option<f64>; RISK_INPUT_COUNT] {
        [
            self.walking_speed,
            self.cadence,
            self.double_support,
            self.step_length_cv,
            self.speed_cv,
            self.asymmetry_step_length,
            self.toe_clearance,
            self.stability_index,
        ]
    }

    /// Number of finite inputs
    pub fn present_count(&self) -> usize {
        self.as_array()
            .iter()
            .filter(|v| v.map_or(false, stats::is_usable))
            .count()
    }
}

/// Result of one scoring call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitRiskAssessment {
    /// Risk score in [0, 100]
    pub score: f64,
    /// Level derived from `score`
    pub level: RiskLevel,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl GaitRiskAssessment {
    /// Build an assessment, clamping both values and deriving the level
    pub fn new(score: f64, confidence: f64) -> Self {
        let score = clamp_score(score);
        Self {
            score,
            level: RiskLevel::from_score(score),
            confidence: clamp_unit(confidence),
        }
    }

    /// Same score with a different confidence (clamped)
    pub fn with_confidence(self, confidence: f64) -> Self {
        Self::new(self.score, confidence)
    }
}

/// Clamp to [0, 100]; NaN becomes 0
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, MAX_SCORE)
    }
}

/// Clamp to [0, 1]; NaN becomes 0
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One weighted penalty band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyBand {
    /// Value where the penalty starts
    pub threshold: f64,
    /// Value where the penalty is full
    pub full: f64,
    /// Points at full severity
    pub weight: f64,
}

impl PenaltyBand {
    const fn new(threshold: f64, full: f64, weight: f64) -> Self {
        Self { threshold, full, weight }
    }

    fn penalty(&self, value: Option<f64>) -> f64 {
        value.map_or(0.0, |v| stats::band_severity(v, self.threshold, self.full) * self.weight)
    }
}

/// Deterministic weighted-penalty scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicRiskScorer {
    bands: [PenaltyBand; RISK_INPUT_COUNT],
}

impl Default for HeuristicRiskScorer {
    fn default() -> Self {
        Self {
            bands: [
                PenaltyBand::new(SPEED_THRESHOLD, SPEED_FULL, SPEED_WEIGHT),
                PenaltyBand::new(CADENCE_THRESHOLD, CADENCE_FULL, CADENCE_WEIGHT),
                PenaltyBand::new(DOUBLE_SUPPORT_THRESHOLD, DOUBLE_SUPPORT_FULL, DOUBLE_SUPPORT_WEIGHT),
                PenaltyBand::new(STEP_LENGTH_CV_THRESHOLD, STEP_LENGTH_CV_FULL, STEP_LENGTH_CV_WEIGHT),
                PenaltyBand::new(SPEED_CV_THRESHOLD, SPEED_CV_FULL, SPEED_CV_WEIGHT),
                PenaltyBand::new(ASYMMETRY_THRESHOLD, ASYMMETRY_FULL, ASYMMETRY_WEIGHT),
                PenaltyBand::new(TOE_CLEARANCE_THRESHOLD, TOE_CLEARANCE_FULL, TOE_CLEARANCE_WEIGHT),
                PenaltyBand::new(STABILITY_THRESHOLD, STABILITY_FULL, STABILITY_WEIGHT),
            ],
        }
    }
}

impl HeuristicRiskScorer {
    /// Scorer with the default bands
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom bands, in [`GaitRiskInputs::as_array`] order
    pub fn with_bands(bands: [PenaltyBand; RISK_INPUT_COUNT]) -> Self {
        Self { bands }
    }

    /// Per-input penalties in [`GaitRiskInputs::as_array`] order
    pub fn penalties(&self, inputs: &GaitRiskInputs) -> [f64; RISK_INPUT_COUNT] {
        let values = inputs.as_array();
        let mut out = [0.0; RISK_INPUT_COUNT];
        for ((slot, band), value) in out.iter_mut().zip(self.bands.iter()).zip(values.iter()) {
            *slot = band.penalty(*value);
        }
        out
    }
}

impl RiskScorer for HeuristicRiskScorer {
    fn score(&self, inputs: &GaitRiskInputs) -> GaitRiskAssessment {
        let score: f64 = self.penalties(inputs).iter().sum();
        let coverage = inputs.present_count() as f64 / RISK_INPUT_COUNT as f64;
        GaitRiskAssessment::new(score, BASE_CONFIDENCE + COVERAGE_CONFIDENCE_GAIN * coverage)
    }

    fn is_backend_loaded(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> GaitRiskInputs {
        GaitRiskInputs {
            walking_speed: Some(1.25),
            cadence: Some(112.0),
            double_support: Some(20.0),
            step_length_cv: Some(0.03),
            speed_cv: Some(0.03),
            asymmetry_step_length: Some(3.0),
            toe_clearance: Some(0.025),
            stability_index: Some(0.9),
        }
    }

    #[test]
    fn weights_sum_to_max_score() {
        let scorer = HeuristicRiskScorer::default();
        let total: f64 = scorer.bands.iter().map(|b| b.weight).sum();
        assert!((total - MAX_SCORE).abs() < 1e-9);
    }

    #[test]
    fn healthy_gait_scores_low() {
        let assessment = HeuristicRiskScorer::new().score(&healthy());
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!((assessment.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn worst_case_is_critical_and_clamped() {
        let inputs = GaitRiskInputs {
            walking_speed: Some(0.1),
            cadence: Some(40.0),
            double_support: Some(55.0),
            step_length_cv: Some(0.4),
            speed_cv: Some(0.4),
            asymmetry_step_length: Some(40.0),
            toe_clearance: Some(0.0),
            stability_index: Some(0.0),
        };
        let assessment = HeuristicRiskScorer::new().score(&inputs);
        assert!((assessment.score - 100.0).abs() < 1e-9);
        assert_eq!(assessment.level, RiskLevel::Critical);
    }

    #[test]
    fn slow_speed_penalty_is_linear() {
        let inputs = GaitRiskInputs {
            walking_speed: Some(0.6),
            ..healthy()
        };
        let assessment = HeuristicRiskScorer::new().score(&inputs);
        assert!((assessment.score - 11.0).abs() < 1e-9);
    }

    #[test]
    fn missing_inputs_lower_confidence_not_score() {
        let assessment = HeuristicRiskScorer::new().score(&GaitRiskInputs::default());
        assert_eq!(assessment.score, 0.0);
        assert!((assessment.confidence - 0.5).abs() < 1e-9);

        let nan = GaitRiskInputs {
            walking_speed: Some(f64::NAN),
            ..GaitRiskInputs::default()
        };
        assert_eq!(nan.present_count(), 0);
        assert_eq!(HeuristicRiskScorer::new().score(&nan).score, 0.0);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(RiskLevel::from_score(24.999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn assessment_clamps() {
        let assessment = GaitRiskAssessment::new(140.0, 1.3);
        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.confidence, 1.0);
        let assessment = GaitRiskAssessment::new(-3.0, f64::NAN);
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.confidence, 0.0);
    }

    #[test]
    fn heuristic_has_no_backend() {
        assert!(!HeuristicRiskScorer::new().is_backend_loaded());
    }
}
