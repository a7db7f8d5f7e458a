//! Property tests for invariants that must hold for any input

mod common;

use gaitguard_core::{
    buffer::RingBuffer, fusion::confidence::ConfidenceFactors, CadenceFusionManager, Foot, GaitMetricsAggregator,
    GaitRiskAssessment, GaitRiskInputs, HeuristicRiskScorer, RiskLevel, RiskScorer, StepEvent,
};
use proptest::prelude::*;

fn optional(range: core::ops::Range<f64>) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        range.prop_map(Some),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
    ]
}

prop_compose! {
    fn risk_inputs()(
        walking_speed in optional(-1.0..3.0),
        cadence in optional(0.0..220.0),
        double_support in optional(0.0..90.0),
        step_length_cv in optional(0.0..1.0),
        speed_cv in optional(0.0..1.0),
        asymmetry_step_length in optional(0.0..100.0),
        toe_clearance in optional(0.0..0.2),
        stability_index in optional(-0.5..1.5),
    ) -> GaitRiskInputs {
        GaitRiskInputs {
            walking_speed,
            cadence,
            double_support,
            step_length_cv,
            speed_cv,
            asymmetry_step_length,
            toe_clearance,
            stability_index,
        }
    }
}

proptest! {
    #[test]
    fn heuristic_scores_are_clamped(inputs in risk_inputs()) {
        let assessment = HeuristicRiskScorer::new().score(&inputs);
        prop_assert!((0.0..=100.0).contains(&assessment.score));
        prop_assert!((0.0..=1.0).contains(&assessment.confidence));
        prop_assert_eq!(assessment.level, RiskLevel::from_score(assessment.score));
    }

    #[test]
    fn assessments_clamp_any_number(score in proptest::num::f64::ANY, confidence in proptest::num::f64::ANY) {
        let assessment = GaitRiskAssessment::new(score, confidence);
        prop_assert!((0.0..=100.0).contains(&assessment.score));
        prop_assert!((0.0..=1.0).contains(&assessment.confidence));
        prop_assert_eq!(assessment.level, RiskLevel::from_score(assessment.score));
    }

    #[test]
    fn levels_are_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskLevel::from_score(lo) <= RiskLevel::from_score(hi));
    }

    #[test]
    fn slower_walk_never_scores_lower(speed in 0.0f64..2.0, drop in 0.0f64..1.0) {
        let scorer = HeuristicRiskScorer::new();
        let fast = GaitRiskInputs { walking_speed: Some(speed + drop), ..GaitRiskInputs::default() };
        let slow = GaitRiskInputs { walking_speed: Some(speed), ..GaitRiskInputs::default() };
        prop_assert!(scorer.score(&slow).score >= scorer.score(&fast).score);
    }

    #[test]
    fn ring_never_exceeds_capacity(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut ring: RingBuffer<i32, 16> = RingBuffer::new();
        for value in &values {
            ring.push(*value);
        }
        prop_assert_eq!(ring.len(), values.len().min(16));
        let kept: Vec<i32> = ring.iter().copied().collect();
        prop_assert_eq!(&kept[..], &values[values.len().saturating_sub(16)..]);
    }

    #[test]
    fn aggregator_survives_garbage(
        events in proptest::collection::vec(
            (
                prop_oneof![-1.0e6f64..1.0e6, Just(f64::NAN), Just(f64::INFINITY)],
                proptest::num::f64::ANY,
                any::<bool>(),
            ),
            0..120,
        )
    ) {
        let mut aggregator = GaitMetricsAggregator::default();
        for (i, (timestamp, length, left)) in events.into_iter().enumerate() {
            let foot = if left { Foot::Left } else { Foot::Right };
            let aggregate = aggregator.ingest(StepEvent::new(i as u64, foot, timestamp).with_step_length(length));
            prop_assert!(aggregate.history.len() <= 64);
            if let Some(step) = aggregate.step_length {
                prop_assert!((0.20..=1.80).contains(&step));
            }
            if let Some(cadence) = aggregate.cadence {
                prop_assert!(cadence.is_finite() && cadence > 0.0);
            }
        }
    }

    #[test]
    fn stale_cadence_passes_through(derived in 40.0f64..160.0, external in 40.0f64..160.0, age in 5.001f64..600.0) {
        let mut cadence = CadenceFusionManager::default();
        cadence.record_external(external, 0.0);
        let fused = cadence.fuse(Some(derived), age);
        prop_assert!(!fused.applied);
        prop_assert_eq!(fused.cadence, Some(derived));
    }

    #[test]
    fn confidence_factors_are_monotonic(
        d in 0.0f64..600.0,
        dd in 0.1f64..600.0,
        q in 0.0f64..0.9,
        dq in 0.01f64..0.1,
        s in 0.0f64..0.05,
        ds in 0.0001f64..0.05,
    ) {
        let base = ConfidenceFactors::compute(d, Some(s), q, false).combined();
        prop_assert!(ConfidenceFactors::compute(d + dd, Some(s), q, false).combined() > base);
        prop_assert!(ConfidenceFactors::compute(d, Some(s), q + dq, false).combined() > base);
        prop_assert!(ConfidenceFactors::compute(d, Some(s + ds), q, false).combined() < base);
        prop_assert!(ConfidenceFactors::compute(d, Some(s), q, true).combined() > base);
    }
}
