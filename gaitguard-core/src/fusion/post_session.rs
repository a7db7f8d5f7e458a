//! End-of-session assembly
//!
//! [`GaitPostSessionFusion::build_assessment`] is a pure function over one
//! session's results: the last metrics snapshot, the risk assessment, optional
//! posture and environment analyses, and what the session knows about its own
//! quality. It produces the immutable [`GaitAssessment`] handed to storage,
//! transport and display.
//!
//! Derived notes are fixed strings. Each list holds at most
//! `MAX_ASSESSMENT_NOTES` entries and never the same entry twice.

use heapless::Vec;

use crate::{
    constants::{
        buffers::{MAX_ASSESSMENT_NOTES, MAX_OBSTACLES},
        fusion::{
            ENVIRONMENT_HAZARD_THRESHOLD, EXCESSIVE_SWAY_M, LIGHTING_BRIGHT_LUX, LIGHTING_DARK_LUX,
            LIGHTING_DIM_LUX,
        },
        risk::{
            ASYMMETRY_THRESHOLD, DOUBLE_SUPPORT_THRESHOLD, SPEED_CV_THRESHOLD, SPEED_THRESHOLD,
            STEP_LENGTH_CV_THRESHOLD, TOE_CLEARANCE_THRESHOLD,
        },
    },
    fusion::confidence::ConfidenceFactors,
    metrics::GaitMetrics,
    risk::{GaitRiskAssessment, RiskLevel},
    time::Timestamp,
};

/// Fixed-capacity list of note strings
pub type Notes = Vec<&'static str, MAX_ASSESSMENT_NOTES>;

/// Risk factor: total sway above threshold
pub const FACTOR_EXCESSIVE_SWAY: &str = "Excessive Sway";
/// Risk factor: environment hazard score above threshold
pub const FACTOR_ENVIRONMENTAL_HAZARD: &str = "Environmental Hazard";
/// Risk factor: slow gait
pub const FACTOR_SLOW_SPEED: &str = "Slow Walking Speed";
/// Risk factor: long double support
pub const FACTOR_DOUBLE_SUPPORT: &str = "Prolonged Double Support";
/// Risk factor: low toe clearance
pub const FACTOR_LOW_CLEARANCE: &str = "Low Toe Clearance";
/// Risk factor: step-length or speed variability
pub const FACTOR_VARIABILITY: &str = "High Gait Variability";
/// Risk factor: left/right asymmetry
pub const FACTOR_ASYMMETRY: &str = "Gait Asymmetry";
/// Risk factor: near trips observed
pub const FACTOR_NEAR_TRIPS: &str = "Near-Trip Events";

const REC_BALANCE_TRAINING: &str = "Add daily balance training such as tandem stance or single-leg stands";
const REC_HAZARDS: &str = "Reduce home hazards: improve lighting and clear walkways of obstacles";
const REC_WALKING_PROGRAM: &str = "Follow a progressive walking program to build speed and endurance";
const REC_FOOTWEAR: &str = "Wear well-fitting footwear and focus on lifting the feet when walking";
const REC_NEAR_TRIPS: &str = "Review recent near trips with a clinician";

/// Posture analysis summary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PostureSummary {
    /// Medio-lateral sway (meters)
    pub sway_ml_m: f64,
    /// Antero-posterior sway (meters)
    pub sway_ap_m: f64,
    /// Total sway (meters)
    pub total_sway_m: f64,
    /// Stability index in [0, 1], higher is steadier
    pub stability_index: f64,
}

/// Obstacle as reported by the environment analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedObstacle<'a> {
    /// Free-text label from the detector
    pub label: &'a str,
    /// Distance from the walker (meters)
    pub distance_m: f64,
    /// Height above the floor (meters)
    pub height_m: f64,
}

/// Environment analysis result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentReport<'a> {
    /// Free-text surface classification
    pub surface: &'a str,
    /// Measured illuminance (lux)
    pub lighting_lux: f64,
    /// Obstacles in the walking path
    pub obstacles: &'a [DetectedObstacle<'a>],
    /// Overall hazard score in [0, 1]
    pub hazard_score: f64,
}

/// Walking surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceType {
    /// Hard flat floor (tile, wood, concrete)
    Hard,
    /// Carpet or rugs
    Carpet,
    /// Uneven ground (grass, gravel)
    Uneven,
    /// Stairs or ramp
    Stairs,
    /// Wet or slippery
    Wet,
    /// Unrecognised label
    Unknown,
}

impl SurfaceType {
    /// Classify a free-text surface label (ASCII case-insensitive)
    pub fn from_label(label: &str) -> Self {
        const TABLE: &[(&str, SurfaceType)] = &[
            ("hard", SurfaceType::Hard),
            ("tile", SurfaceType::Hard),
            ("wood", SurfaceType::Hard),
            ("hardwood", SurfaceType::Hard),
            ("concrete", SurfaceType::Hard),
            ("carpet", SurfaceType::Carpet),
            ("rug", SurfaceType::Carpet),
            ("uneven", SurfaceType::Uneven),
            ("grass", SurfaceType::Uneven),
            ("gravel", SurfaceType::Uneven),
            ("stairs", SurfaceType::Stairs),
            ("ramp", SurfaceType::Stairs),
            ("wet", SurfaceType::Wet),
            ("slippery", SurfaceType::Wet),
        ];
        let label = label.trim();
        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map_or(SurfaceType::Unknown, |(_, surface)| *surface)
    }
}

/// Lighting class from illuminance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LightingCondition {
    /// Below 50 lux
    Dark,
    /// 50 to 200 lux
    Dim,
    /// 200 to 1000 lux
    Normal,
    /// 1000 lux or more
    Bright,
    /// No usable reading
    Unknown,
}

impl LightingCondition {
    /// Classify an illuminance in lux
    pub fn from_lux(lux: f64) -> Self {
        match lux {
            l if !l.is_finite() || l < 0.0 => Self::Unknown,
            l if l < LIGHTING_DARK_LUX => Self::Dark,
            l if l < LIGHTING_DIM_LUX => Self::Dim,
            l if l < LIGHTING_BRIGHT_LUX => Self::Normal,
            _ => Self::Bright,
        }
    }
}

/// Obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObstacleKind {
    /// Furniture
    Furniture,
    /// Step or threshold
    Step,
    /// Cable or cord
    Cable,
    /// Rug edge
    Rug,
    /// Anything else
    Other,
}

impl ObstacleKind {
    /// Classify a free-text obstacle label (ASCII case-insensitive)
    pub fn from_label(label: &str) -> Self {
        const TABLE: &[(&str, ObstacleKind)] = &[
            ("furniture", ObstacleKind::Furniture),
            ("chair", ObstacleKind::Furniture),
            ("table", ObstacleKind::Furniture),
            ("step", ObstacleKind::Step),
            ("threshold", ObstacleKind::Step),
            ("cable", ObstacleKind::Cable),
            ("cord", ObstacleKind::Cable),
            ("rug", ObstacleKind::Rug),
        ];
        let label = label.trim();
        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map_or(ObstacleKind::Other, |(_, kind)| *kind)
    }
}

/// Obstacle carried into the assessment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Obstacle {
    /// Classified kind
    pub kind: ObstacleKind,
    /// Distance from the walker (meters)
    pub distance_m: f64,
    /// Height above the floor (meters)
    pub height_m: f64,
}

impl From<&DetectedObstacle<'_>> for Obstacle {
    fn from(detected: &DetectedObstacle<'_>) -> Self {
        Self {
            kind: ObstacleKind::from_label(detected.label),
            distance_m: detected.distance_m,
            height_m: detected.height_m,
        }
    }
}

/// Environment section of an assessment
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvironmentalFactors {
    /// Surface class
    pub surface: SurfaceType,
    /// Lighting class
    pub lighting: LightingCondition,
    /// Obstacles, 1:1 with the report up to capacity
    pub obstacles: Vec<Obstacle, MAX_OBSTACLES>,
    /// Hazard score in [0, 1]
    pub hazard_score: f64,
}

impl EnvironmentalFactors {
    /// Map an environment report into assessment enums
    pub fn from_report(report: &EnvironmentReport<'_>) -> Self {
        if report.obstacles.len() > MAX_OBSTACLES {
            gait_warn!(
                "post-session: {} obstacles reported, keeping the first {}",
                report.obstacles.len(),
                MAX_OBSTACLES
            );
        }
        Self {
            surface: SurfaceType::from_label(report.surface),
            lighting: LightingCondition::from_lux(report.lighting_lux),
            obstacles: report.obstacles.iter().take(MAX_OBSTACLES).map(Obstacle::from).collect(),
            hazard_score: if report.hazard_score.is_finite() {
                report.hazard_score.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }
}

/// Gait-cycle timing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitCycleAnalysis {
    /// Stance (%)
    pub stance_pct: Option<f64>,
    /// Swing (%)
    pub swing_pct: Option<f64>,
    /// Double support (%)
    pub double_support_pct: Option<f64>,
    /// Stride time (seconds)
    pub stride_time: Option<f64>,
    /// Cadence (steps/min)
    pub cadence: Option<f64>,
}

/// Balance from posture data
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BalanceAnalysis {
    /// Medio-lateral sway (meters)
    pub sway_ml_m: Option<f64>,
    /// Antero-posterior sway (meters)
    pub sway_ap_m: Option<f64>,
    /// Total sway (meters)
    pub total_sway_m: Option<f64>,
    /// Stability index in [0, 1]
    pub stability_index: Option<f64>,
}

/// Temporal-spatial parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemporalSpatialAnalysis {
    /// Walking speed (m/s)
    pub walking_speed: Option<f64>,
    /// Step length (meters)
    pub step_length: Option<f64>,
    /// Stride length (meters)
    pub stride_length: Option<f64>,
    /// Toe clearance (meters)
    pub toe_clearance: Option<f64>,
}

/// Left/right asymmetry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AsymmetryAnalysis {
    /// Step-length asymmetry (%)
    pub step_length_pct: Option<f64>,
    /// Step-time asymmetry (%)
    pub step_time_pct: Option<f64>,
}

/// Variability coefficients
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariabilityAnalysis {
    /// Step-time CV
    pub step_time_cv: Option<f64>,
    /// Step-length CV
    pub step_length_cv: Option<f64>,
    /// Stride-speed CV
    pub speed_cv: Option<f64>,
    /// Stride-time CV
    pub stride_time_cv: Option<f64>,
}

/// Detailed breakdown of a session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetailedGaitAnalysis {
    /// Cycle timing
    pub gait_cycle: GaitCycleAnalysis,
    /// Balance
    pub balance: BalanceAnalysis,
    /// Temporal-spatial parameters
    pub temporal_spatial: TemporalSpatialAnalysis,
    /// Asymmetry
    pub asymmetry: AsymmetryAnalysis,
    /// Variability
    pub variability: VariabilityAnalysis,
}

impl DetailedGaitAnalysis {
    fn build(metrics: &GaitMetrics, posture: Option<&PostureSummary>) -> Self {
        Self {
            gait_cycle: GaitCycleAnalysis {
                stance_pct: metrics.stance_pct,
                swing_pct: metrics.swing_pct,
                double_support_pct: metrics.double_support_pct,
                stride_time: metrics.stride_time,
                cadence: metrics.cadence,
            },
            balance: posture.map_or_else(BalanceAnalysis::default, |p| BalanceAnalysis {
                sway_ml_m: Some(p.sway_ml_m),
                sway_ap_m: Some(p.sway_ap_m),
                total_sway_m: Some(p.total_sway_m),
                stability_index: Some(p.stability_index),
            }),
            temporal_spatial: TemporalSpatialAnalysis {
                walking_speed: metrics.walking_speed,
                step_length: metrics.step_length,
                stride_length: metrics.stride_length,
                toe_clearance: metrics.toe_clearance,
            },
            asymmetry: AsymmetryAnalysis {
                step_length_pct: metrics.step_length_asymmetry,
                step_time_pct: metrics.step_time_asymmetry,
            },
            variability: VariabilityAnalysis {
                step_time_cv: metrics.step_time_cv,
                step_length_cv: metrics.step_length_cv,
                speed_cv: metrics.speed_cv,
                stride_time_cv: metrics.stride_time_cv,
            },
        }
    }
}

/// Fused end-of-session record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaitAssessment {
    /// Assembly time
    pub timestamp: Timestamp,
    /// Final metrics, risk level filled in
    pub metrics: GaitMetrics,
    /// Risk with enriched confidence
    pub risk: GaitRiskAssessment,
    /// Advice for the walker
    pub recommendations: Notes,
    /// Named contributors to the risk
    pub risk_factors: Notes,
    /// Sub-structured breakdown
    pub analysis: DetailedGaitAnalysis,
    /// Environment, when analysed
    pub environment: Option<EnvironmentalFactors>,
    /// Multipliers applied to the base confidence
    pub confidence_factors: ConfidenceFactors,
}

/// Everything one session contributes to its assessment
#[derive(Debug, Clone, Copy)]
pub struct SessionInputs<'a> {
    /// Assembly time
    pub timestamp: Timestamp,
    /// Last metrics snapshot
    pub metrics: GaitMetrics,
    /// Risk assessment for those metrics
    pub risk: GaitRiskAssessment,
    /// Posture analysis, if run
    pub posture: Option<PostureSummary>,
    /// Environment analysis, if run
    pub environment: Option<EnvironmentReport<'a>>,
    /// Session length (seconds)
    pub duration_s: f64,
    /// Signal-quality confidence in [0, 1]
    pub quality_confidence: f64,
    /// Floor estimate standard deviation (meters)
    pub floor_std_m: Option<f64>,
}

/// Hazard thresholds for the assembler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostSessionConfig {
    /// Total sway above which sway is flagged (meters)
    pub excessive_sway_m: f64,
    /// Hazard score above which the environment is flagged
    pub hazard_threshold: f64,
}

impl Default for PostSessionConfig {
    fn default() -> Self {
        Self {
            excessive_sway_m: EXCESSIVE_SWAY_M,
            hazard_threshold: ENVIRONMENT_HAZARD_THRESHOLD,
        }
    }
}

/// Session assembler
#[derive(Debug, Clone, Copy, Default)]
pub struct GaitPostSessionFusion {
    config: PostSessionConfig,
}

impl GaitPostSessionFusion {
    /// Assembler with custom thresholds
    pub fn new(config: PostSessionConfig) -> Self {
        Self { config }
    }

    /// Assemble the final assessment
    pub fn build_assessment(&self, inputs: &SessionInputs<'_>) -> GaitAssessment {
        let mut recommendations = Notes::new();
        let mut risk_factors = Notes::new();

        let mut metrics = inputs.metrics.with_risk_level(inputs.risk.level);
        if let Some(posture) = &inputs.posture {
            if metrics.stability_index.is_none() {
                metrics = metrics.with_stability_index(Some(posture.stability_index));
            }
            if metrics.sway.is_none() && posture.total_sway_m.is_finite() {
                metrics.sway = Some(posture.total_sway_m);
            }
        }

        push_note(&mut recommendations, level_recommendation(inputs.risk.level));
        self.metric_notes(&metrics, &mut risk_factors, &mut recommendations);

        if let Some(posture) = &inputs.posture {
            if posture.total_sway_m > self.config.excessive_sway_m {
                push_note(&mut risk_factors, FACTOR_EXCESSIVE_SWAY);
                push_note(&mut recommendations, REC_BALANCE_TRAINING);
            }
        }

        let environment = inputs.environment.as_ref().map(EnvironmentalFactors::from_report);
        if let Some(env) = &environment {
            if env.hazard_score > self.config.hazard_threshold {
                push_note(&mut risk_factors, FACTOR_ENVIRONMENTAL_HAZARD);
                push_note(&mut recommendations, REC_HAZARDS);
            }
        }

        let factors = ConfidenceFactors::compute(
            inputs.duration_s,
            inputs.floor_std_m,
            inputs.quality_confidence,
            inputs.posture.is_some(),
        );
        let risk = inputs.risk.with_confidence(factors.apply(inputs.risk.confidence));
        gait_debug!(
            "post-session: confidence {:.3} -> {:.3} (x{:.3})",
            inputs.risk.confidence,
            risk.confidence,
            factors.combined()
        );

        GaitAssessment {
            timestamp: inputs.timestamp,
            metrics,
            risk,
            recommendations,
            risk_factors,
            analysis: DetailedGaitAnalysis::build(&metrics, inputs.posture.as_ref()),
            environment,
            confidence_factors: factors,
        }
    }

    fn metric_notes(&self, metrics: &GaitMetrics, factors: &mut Notes, recommendations: &mut Notes) {
        if metrics.walking_speed.map_or(false, |s| s < SPEED_THRESHOLD) {
            push_note(factors, FACTOR_SLOW_SPEED);
            push_note(recommendations, REC_WALKING_PROGRAM);
        }
        if metrics.double_support_pct.map_or(false, |d| d > DOUBLE_SUPPORT_THRESHOLD) {
            push_note(factors, FACTOR_DOUBLE_SUPPORT);
            push_note(recommendations, REC_BALANCE_TRAINING);
        }
        if metrics.toe_clearance.map_or(false, |c| c < TOE_CLEARANCE_THRESHOLD) {
            push_note(factors, FACTOR_LOW_CLEARANCE);
            push_note(recommendations, REC_FOOTWEAR);
        }
        let variable = metrics.step_length_cv.map_or(false, |cv| cv > STEP_LENGTH_CV_THRESHOLD)
            || metrics.speed_cv.map_or(false, |cv| cv > SPEED_CV_THRESHOLD);
        if variable {
            push_note(factors, FACTOR_VARIABILITY);
        }
        if metrics.step_length_asymmetry.map_or(false, |a| a > ASYMMETRY_THRESHOLD) {
            push_note(factors, FACTOR_ASYMMETRY);
        }
        if metrics.near_trip_count > 0 {
            push_note(factors, FACTOR_NEAR_TRIPS);
            push_note(recommendations, REC_NEAR_TRIPS);
        }
    }
}

fn level_recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Keep up regular walking activity",
        RiskLevel::Moderate => "Consider a structured strength and balance program",
        RiskLevel::High => "Schedule a fall-risk assessment with a clinician",
        RiskLevel::Critical => "Seek prompt clinical evaluation and use a walking aid until then",
    }
}

/// Append unless already present or full
fn push_note(notes: &mut Notes, note: &'static str) {
    if !notes.contains(&note) {
        // Full list: later notes are lower priority
        let _ = notes.push(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_inputs<'a>() -> SessionInputs<'a> {
        SessionInputs {
            timestamp: 120.0,
            metrics: GaitMetrics {
                walking_speed: Some(1.1),
                cadence: Some(108.0),
                toe_clearance: Some(0.025),
                ..GaitMetrics::default()
            },
            risk: GaitRiskAssessment::new(12.0, 0.8),
            posture: None,
            environment: None,
            duration_s: 120.0,
            quality_confidence: 0.8,
            floor_std_m: Some(0.002),
        }
    }

    fn posture(total: f64) -> PostureSummary {
        PostureSummary {
            sway_ml_m: total * 0.6,
            sway_ap_m: total * 0.8,
            total_sway_m: total,
            stability_index: 0.8,
        }
    }

    #[test]
    fn long_clean_session_with_posture_beats_short_poor_one() {
        let fusion = GaitPostSessionFusion::default();

        let good = SessionInputs {
            posture: Some(posture(0.02)),
            duration_s: 300.0,
            quality_confidence: 0.95,
            floor_std_m: Some(0.0005),
            ..base_inputs()
        };
        let poor = SessionInputs {
            duration_s: 15.0,
            quality_confidence: 0.3,
            floor_std_m: Some(0.004),
            ..base_inputs()
        };

        let good = fusion.build_assessment(&good);
        let poor = fusion.build_assessment(&poor);
        assert!(good.risk.confidence > 0.8);
        assert!(poor.risk.confidence < 0.8);
        assert!(good.risk.confidence > poor.risk.confidence);
        assert_eq!(good.risk.score, poor.risk.score);
    }

    #[test]
    fn excessive_sway_is_flagged() {
        let inputs = SessionInputs {
            posture: Some(posture(0.06)),
            ..base_inputs()
        };
        let assessment = GaitPostSessionFusion::default().build_assessment(&inputs);
        assert!(assessment.risk_factors.contains(&FACTOR_EXCESSIVE_SWAY));
        assert!(assessment.recommendations.contains(&REC_BALANCE_TRAINING));
        assert_eq!(assessment.analysis.balance.total_sway_m, Some(0.06));
        assert_eq!(assessment.metrics.stability_index, Some(0.8));
    }

    #[test]
    fn environment_maps_and_flags_hazard() {
        let obstacles = [
            DetectedObstacle { label: "Chair", distance_m: 1.5, height_m: 0.8 },
            DetectedObstacle { label: "cable", distance_m: 0.7, height_m: 0.01 },
            DetectedObstacle { label: "box", distance_m: 2.0, height_m: 0.3 },
        ];
        let inputs = SessionInputs {
            environment: Some(EnvironmentReport {
                surface: "Carpet",
                lighting_lux: 120.0,
                obstacles: &obstacles,
                hazard_score: 0.75,
            }),
            ..base_inputs()
        };
        let assessment = GaitPostSessionFusion::default().build_assessment(&inputs);
        let env = assessment.environment.as_ref().unwrap();
        assert_eq!(env.surface, SurfaceType::Carpet);
        assert_eq!(env.lighting, LightingCondition::Dim);
        assert_eq!(env.obstacles.len(), 3);
        assert_eq!(env.obstacles[0].kind, ObstacleKind::Furniture);
        assert_eq!(env.obstacles[1].kind, ObstacleKind::Cable);
        assert_eq!(env.obstacles[2].kind, ObstacleKind::Other);
        assert!(assessment.risk_factors.contains(&FACTOR_ENVIRONMENTAL_HAZARD));
    }

    #[test]
    fn calm_session_has_no_hazard_factors() {
        let assessment = GaitPostSessionFusion::default().build_assessment(&base_inputs());
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(assessment.recommendations.len(), 1);
        assert!(assessment.environment.is_none());
        assert_eq!(assessment.metrics.risk_level, Some(RiskLevel::Low));
    }

    #[test]
    fn metric_driven_notes_are_deduplicated() {
        let inputs = SessionInputs {
            metrics: GaitMetrics {
                walking_speed: Some(0.5),
                double_support_pct: Some(35.0),
                toe_clearance: Some(0.008),
                near_trip_count: 2,
                ..GaitMetrics::default()
            },
            posture: Some(posture(0.07)),
            ..base_inputs()
        };
        let assessment = GaitPostSessionFusion::default().build_assessment(&inputs);
        let balance = assessment
            .recommendations
            .iter()
            .filter(|r| **r == REC_BALANCE_TRAINING)
            .count();
        assert_eq!(balance, 1);
        assert!(assessment.risk_factors.contains(&FACTOR_SLOW_SPEED));
        assert!(assessment.risk_factors.contains(&FACTOR_NEAR_TRIPS));
    }

    #[test]
    fn label_mapping() {
        assert_eq!(SurfaceType::from_label(" TILE "), SurfaceType::Hard);
        assert_eq!(SurfaceType::from_label("lava"), SurfaceType::Unknown);
        assert_eq!(LightingCondition::from_lux(10.0), LightingCondition::Dark);
        assert_eq!(LightingCondition::from_lux(500.0), LightingCondition::Normal);
        assert_eq!(LightingCondition::from_lux(5000.0), LightingCondition::Bright);
        assert_eq!(LightingCondition::from_lux(f64::NAN), LightingCondition::Unknown);
    }
}
