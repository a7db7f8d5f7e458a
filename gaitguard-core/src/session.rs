//! Session composition root
//!
//! [`GaitSession`] wires the per-session components together for one capture:
//!
//! ```text
//!                    ┌──────────────────────── GaitSession ───────────────────────┐
//! SpatialSample ───→ │ StepEventDetector → GaitMetricsAggregator → FeatureEngineer │
//!                    │        │                      │                             │
//!                    │  FrameQualityTracker   GaitCalibrationManager               │
//!                    └──────────────────────────────┬─────────────────────────────┘
//!   &mut CadenceFusionManager ──────────────────────┤ metrics()
//!   &MotionFusionManager + &dyn RiskScorer ─────────┘ finish() → GaitAssessment
//! ```
//!
//! The session owns only per-session state. The cadence and motion managers
//! outlive sessions and are lent in by the caller, so two sessions never see
//! each other's buffers and [`GaitSession::teardown`] releases everything the
//! session holds.

use crate::{
    aggregator::{AggregatorConfig, GaitMetricsAggregator, GaitRollingAggregate},
    calibration::{CalibrationConfig, CalibrationDeviations, CalibrationState, GaitCalibrationManager},
    errors::GaitResult,
    events::{SpatialSample, StepEvent},
    features::{FeatureConfig, FeatureSample, GaitFeatureEngineer},
    fusion::{
        cadence::CadenceFusionManager,
        motion::MotionFusionManager,
        post_session::{
            EnvironmentReport, GaitAssessment, GaitPostSessionFusion, PostSessionConfig, PostureSummary,
            SessionInputs,
        },
    },
    metrics::GaitMetrics,
    quality::{FrameQualityTracker, QualityMetadata},
    risk::GaitRiskInputs,
    step_detection::{DetectorConfig, StepEventDetector},
    time::{SessionClock, Timestamp},
    traits::{Reset, RiskScorer},
};

/// Configuration for every per-session component
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionConfig {
    /// Step detection
    pub detector: DetectorConfig,
    /// Rolling metrics
    pub aggregator: AggregatorConfig,
    /// Engineered features
    pub features: FeatureConfig,
    /// Personal baseline
    pub calibration: CalibrationConfig,
    /// Assessment thresholds
    pub post_session: PostSessionConfig,
}

/// Optional analyses available when a session ends
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionExtras<'a> {
    /// Posture analysis result
    pub posture: Option<PostureSummary>,
    /// Environment analysis result
    pub environment: Option<EnvironmentReport<'a>>,
}

/// One capture session
#[derive(Debug, Clone)]
pub struct GaitSession {
    detector: StepEventDetector,
    aggregator: GaitMetricsAggregator,
    features: GaitFeatureEngineer,
    calibration: GaitCalibrationManager,
    frames: FrameQualityTracker,
    clock: SessionClock,
    assembler: GaitPostSessionFusion,
    last_aggregate: Option<GaitRollingAggregate>,
}

impl Default for GaitSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GaitSession {
    /// Fresh session
    pub fn new(config: SessionConfig) -> Self {
        Self {
            detector: StepEventDetector::new(config.detector),
            aggregator: GaitMetricsAggregator::new(config.aggregator),
            features: GaitFeatureEngineer::new(config.features),
            calibration: GaitCalibrationManager::new(config.calibration),
            frames: FrameQualityTracker::new(),
            clock: SessionClock::new(),
            assembler: GaitPostSessionFusion::new(config.post_session),
            last_aggregate: None,
        }
    }

    /// Feed one spatial frame; returns the new aggregate when a strike was detected
    pub fn process_sample(&mut self, sample: &SpatialSample) -> Option<GaitRollingAggregate> {
        self.frames.record_frame(sample.point_density);
        self.clock.observe(sample.timestamp);
        self.calibration.start_if_needed(sample.timestamp);
        self.calibration.tick(sample.timestamp);

        let event = self.detector.process(sample)?;
        Some(self.ingest_step(event))
    }

    /// Feed a strike from any source (detector, wearable, replay)
    pub fn ingest_step(&mut self, event: StepEvent) -> GaitRollingAggregate {
        self.clock.observe(event.timestamp);
        self.calibration.start_if_needed(event.timestamp);

        let aggregate = self.aggregator.ingest(event);
        // Each strike closes exactly one stride, that of its own foot
        let completed_stride = if event.timestamp.is_finite() {
            self.aggregator.latest_stride_time(event.foot)
        } else {
            None
        };
        let features = self.features.ingest(FeatureSample {
            timestamp: event.timestamp,
            stride_time: completed_stride,
            cadence: aggregate.cadence,
            toe_clearance: event.toe_clearance,
            step_length_cv: aggregate.step_length_cv,
        });

        let snapshot = GaitMetrics::from_parts(&aggregate, &features, None);
        self.calibration.ingest(&snapshot, event.timestamp);

        self.last_aggregate = Some(aggregate.clone());
        aggregate
    }

    /// Record frames the capture source reported as dropped
    pub fn record_dropped_frames(&mut self, frames: u64) {
        self.frames.record_dropped(frames);
    }

    /// Latest aggregate, `None` before the first strike
    pub fn last_aggregate(&self) -> Option<&GaitRollingAggregate> {
        self.last_aggregate.as_ref()
    }

    /// Calibration state
    pub fn calibration_state(&self) -> CalibrationState {
        self.calibration.state()
    }

    /// Seconds between the first and latest observed timestamps
    pub fn duration(&self) -> f64 {
        self.clock.duration()
    }

    /// Current metrics with cadence fused against the shared manager
    pub fn metrics(&self, cadence: &mut CadenceFusionManager, now: Timestamp) -> GaitMetrics {
        let aggregate = self.aggregator.snapshot();
        let fused = cadence.fuse(aggregate.cadence, now);
        GaitMetrics::from_parts(&aggregate, &self.features.features(), None).with_cadence(fused.cadence)
    }

    /// Deviations of `metrics` from the session baseline
    pub fn deviations(&self, metrics: &GaitMetrics) -> GaitResult<CalibrationDeviations> {
        self.calibration.deviations(metrics)
    }

    /// Quality metadata for outbound payloads
    pub fn quality_metadata(&self, motion: &MotionFusionManager) -> QualityMetadata {
        QualityMetadata::collect(&self.frames, motion)
    }

    /// Score the session and assemble the final assessment
    pub fn finish<S: RiskScorer + ?Sized>(
        &self,
        scorer: &S,
        cadence: &mut CadenceFusionManager,
        motion: &MotionFusionManager,
        extras: SessionExtras<'_>,
        now: Timestamp,
    ) -> GaitAssessment {
        let mut metrics = self.metrics(cadence, now);
        if let Some(posture) = &extras.posture {
            metrics = metrics.with_stability_index(Some(posture.stability_index));
        }

        let risk = scorer.score(&GaitRiskInputs::from_metrics(&metrics));
        let quality = self.quality_metadata(motion);

        self.assembler.build_assessment(&SessionInputs {
            timestamp: now,
            metrics,
            risk,
            posture: extras.posture,
            environment: extras.environment,
            duration_s: self.clock.duration(),
            quality_confidence: quality.quality_confidence(),
            floor_std_m: self.detector.floor().floor_std(),
        })
    }

    /// Release all per-session state
    pub fn teardown(&mut self) {
        self.detector.reset();
        self.aggregator.reset();
        self.features.reset();
        self.calibration.reset();
        self.frames.reset();
        self.clock.reset();
        self.last_aggregate = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::Foot, features::HarmonicSource, risk::HeuristicRiskScorer};

    fn feed_steps(session: &mut GaitSession, count: usize, interval: f64) {
        for i in 0..count {
            let foot = if i % 2 == 0 { Foot::Left } else { Foot::Right };
            let event = StepEvent::new(i as u64, foot, i as f64 * interval)
                .with_step_length(0.6)
                .with_toe_clearance(0.03);
            session.ingest_step(event);
        }
    }

    #[test]
    fn steps_flow_into_metrics() {
        let mut session = GaitSession::default();
        let mut cadence = CadenceFusionManager::default();
        feed_steps(&mut session, 12, 0.6);

        let metrics = session.metrics(&mut cadence, 6.6);
        assert!((metrics.cadence.unwrap() - 100.0).abs() < 1e-6);
        assert!((metrics.walking_speed.unwrap() - 1.0).abs() < 1e-6);
        assert!(!cadence.last_fusion_applied());
    }

    #[test]
    fn every_completed_stride_feeds_the_features_once() {
        // Left strides are a steady 1.2 s, right strides alternate 1.1 / 1.4 s
        let left = [0.0, 1.2, 2.4, 3.6, 4.8, 6.0];
        let right = [0.5, 1.6, 3.0, 4.1, 5.5];
        let mut strikes: Vec<(Foot, f64)> = left
            .iter()
            .map(|t| (Foot::Left, *t))
            .chain(right.iter().map(|t| (Foot::Right, *t)))
            .collect();
        strikes.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut session = GaitSession::default();
        for (i, (foot, t)) in strikes.iter().enumerate() {
            session.ingest_step(StepEvent::new(i as u64, *foot, *t).with_step_length(0.6));
        }

        let strides = left
            .windows(2)
            .chain(right.windows(2))
            .map(|pair| pair[1] - pair[0]);
        let expected = crate::stats::coefficient_of_variation(strides).unwrap();
        let metrics = session.metrics(&mut CadenceFusionManager::default(), 6.0);
        assert!((metrics.stride_time_cv.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn session_step_length_cv_drives_harmonic_ratio() {
        let mut session = GaitSession::default();
        feed_steps(&mut session, 12, 0.6);

        let metrics = session.metrics(&mut CadenceFusionManager::default(), 6.6);
        assert_eq!(metrics.harmonic_source, Some(HarmonicSource::ExternalStepLength));
        let ratio = metrics.harmonic_ratio.unwrap();
        assert!(ratio > 2.5 && ratio <= 3.5);
    }

    #[test]
    fn shared_cadence_is_fused() {
        let mut session = GaitSession::default();
        let mut cadence = CadenceFusionManager::default();
        feed_steps(&mut session, 12, 0.6);
        cadence.record_external(110.0, 6.0);

        let metrics = session.metrics(&mut cadence, 6.6);
        assert!((metrics.cadence.unwrap() - 107.0).abs() < 1e-6);
    }

    #[test]
    fn calibration_completes_during_session() {
        let mut session = GaitSession::default();
        feed_steps(&mut session, 60, 0.6);
        assert_eq!(session.calibration_state(), CalibrationState::Complete);

        let mut cadence = CadenceFusionManager::default();
        let metrics = session.metrics(&mut cadence, 36.0);
        let deviations = session.deviations(&metrics).unwrap();
        assert!(deviations.speed.is_some());
    }

    #[test]
    fn finish_produces_assessment() {
        let mut session = GaitSession::default();
        let mut cadence = CadenceFusionManager::default();
        let motion = MotionFusionManager::new();
        feed_steps(&mut session, 20, 0.6);

        let assessment = session.finish(
            &HeuristicRiskScorer::new(),
            &mut cadence,
            &motion,
            SessionExtras::default(),
            12.0,
        );
        assert!(assessment.risk.score >= 0.0 && assessment.risk.score <= 100.0);
        assert!(assessment.risk.confidence >= 0.0 && assessment.risk.confidence <= 1.0);
        assert_eq!(assessment.metrics.risk_level, Some(assessment.risk.level));
    }

    #[test]
    fn teardown_releases_state() {
        let mut session = GaitSession::default();
        feed_steps(&mut session, 10, 0.6);
        session.teardown();
        assert!(session.last_aggregate().is_none());
        assert_eq!(session.duration(), 0.0);
        assert_eq!(session.calibration_state(), CalibrationState::Idle);
        let mut cadence = CadenceFusionManager::default();
        assert!(session.metrics(&mut cadence, 0.0).walking_speed.is_none());
    }
}
