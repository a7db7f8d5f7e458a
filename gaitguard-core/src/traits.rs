//! Core traits
//!
//! Two seams: scorers are interchangeable behind [`RiskScorer`], and every
//! component that holds per-session buffers implements [`Reset`] so a session
//! teardown (or a test) can return it to its initial state.

use crate::risk::{GaitRiskAssessment, GaitRiskInputs};

/// Fall-risk scoring capability
///
/// Implemented by the deterministic [`crate::HeuristicRiskScorer`] and by
/// decorators that adjust a fallback scorer with an inference backend.
/// Implementations must never panic and must always return a clamped result.
pub trait RiskScorer {
    /// Score one set of inputs
    fn score(&self, inputs: &GaitRiskInputs) -> GaitRiskAssessment;

    /// Whether an inference backend is loaded and contributing to the score
    fn is_backend_loaded(&self) -> bool;
}

impl<S: RiskScorer + ?Sized> RiskScorer for &S {
    fn score(&self, inputs: &GaitRiskInputs) -> GaitRiskAssessment {
        (**self).score(inputs)
    }

    fn is_backend_loaded(&self) -> bool {
        (**self).is_backend_loaded()
    }
}

/// Return to the freshly constructed state, keeping configuration
pub trait Reset {
    /// Clear all accumulated state
    fn reset(&mut self);
}
