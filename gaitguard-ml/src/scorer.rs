//! Heuristic-plus-model risk scorer

use core::sync::atomic::{AtomicBool, Ordering};

use gaitguard_core::{GaitRiskAssessment, GaitRiskInputs, RiskScorer};

use crate::backend::{BackendPrediction, InferenceBackend};

/// Blend and boost parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MLScorerConfig {
    /// Share of the fallback score in the blend; the backend gets the rest
    pub fallback_weight: f64,
    /// Toe clearance (meters) below which the score is boosted
    pub low_clearance_m: f64,
    /// Points added for low toe clearance
    pub low_clearance_boost: f64,
    /// Added to the larger of the two confidences
    pub confidence_bonus: f64,
    /// Minimum distance (points) kept from the fallback score when the
    /// low-clearance boost applies, so a clamped blend still moves the score
    pub min_separation: f64,
}

impl Default for MLScorerConfig {
    fn default() -> Self {
        Self {
            fallback_weight: 0.5,
            low_clearance_m: 0.012,
            low_clearance_boost: 6.0,
            confidence_bonus: 0.05,
            min_separation: 1.0,
        }
    }
}

/// Risk scorer that adjusts a fallback with an inference backend
///
/// When the backend is unloaded or fails, the fallback result is returned
/// unchanged.
#[derive(Debug)]
pub struct GaitMLRiskScorer<F, B> {
    fallback: F,
    backend: B,
    config: MLScorerConfig,
    last_used_backend: AtomicBool,
}

impl<F: RiskScorer, B: InferenceBackend> GaitMLRiskScorer<F, B> {
    /// Scorer with default blend parameters
    pub fn new(fallback: F, backend: B) -> Self {
        Self::with_config(fallback, backend, MLScorerConfig::default())
    }

    /// Scorer with explicit blend parameters
    pub fn with_config(fallback: F, backend: B, config: MLScorerConfig) -> Self {
        Self {
            fallback,
            backend,
            config,
            last_used_backend: AtomicBool::new(false),
        }
    }

    /// Whether the most recent `score` call used the backend
    pub fn last_used_backend(&self) -> bool {
        self.last_used_backend.load(Ordering::Relaxed)
    }

    /// Fallback scorer
    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    /// Backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Backend, for loading or unloading a model
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn blend(
        &self,
        heuristic: GaitRiskAssessment,
        prediction: BackendPrediction,
        inputs: &GaitRiskInputs,
    ) -> GaitRiskAssessment {
        let weight = self.config.fallback_weight.clamp(0.0, 1.0);
        let mut score = weight * heuristic.score + (1.0 - weight) * prediction.score;

        let low_clearance = inputs
            .toe_clearance
            .map_or(false, |c| c.is_finite() && c < self.config.low_clearance_m);
        if low_clearance {
            score = (score + self.config.low_clearance_boost).clamp(0.0, 100.0);
            let separation = self.config.min_separation;
            if (score - heuristic.score).abs() < separation {
                // Upward when there is room, downward when saturated
                score = if heuristic.score + separation <= 100.0 {
                    heuristic.score + separation
                } else {
                    heuristic.score - separation
                };
            }
        }

        let confidence = heuristic.confidence.max(prediction.confidence) + self.config.confidence_bonus;
        GaitRiskAssessment::new(score, confidence)
    }
}

impl<F: RiskScorer, B: InferenceBackend> RiskScorer for GaitMLRiskScorer<F, B> {
    fn score(&self, inputs: &GaitRiskInputs) -> GaitRiskAssessment {
        let heuristic = self.fallback.score(inputs);

        if !self.backend.is_loaded() {
            ml_debug!("inference backend not loaded, using fallback score");
            self.last_used_backend.store(false, Ordering::Relaxed);
            return heuristic;
        }

        match self.backend.predict(inputs) {
            Ok(prediction) if prediction.score.is_finite() && prediction.confidence.is_finite() => {
                self.last_used_backend.store(true, Ordering::Relaxed);
                self.blend(heuristic, prediction, inputs)
            }
            Ok(_) => {
                ml_warn!("inference backend returned a non-finite prediction, using fallback score");
                self.last_used_backend.store(false, Ordering::Relaxed);
                heuristic
            }
            Err(_err) => {
                ml_warn!("inference failed ({}), using fallback score", _err);
                self.last_used_backend.store(false, Ordering::Relaxed);
                heuristic
            }
        }
    }

    fn is_backend_loaded(&self) -> bool {
        self.backend.is_loaded()
    }
}
