//! Inference backends
//!
//! A backend turns [`GaitRiskInputs`] into a score in [0, 100] and a
//! confidence in [0, 1]. It may be unloaded, and it may fail; both cases are
//! reported as errors so the scorer can fall back.

use gaitguard_core::{GaitError, GaitResult, GaitRiskInputs};

/// Fewest present inputs a backend will score from
pub const MIN_BACKEND_INPUTS: usize = 4;

/// Raw backend output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendPrediction {
    /// Score in [0, 100]
    pub score: f64,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Model that can score risk inputs
pub trait InferenceBackend {
    /// Whether a model is ready
    fn is_loaded(&self) -> bool;

    /// Score one set of inputs
    fn predict(&self, inputs: &GaitRiskInputs) -> GaitResult<BackendPrediction>;
}

impl<B: InferenceBackend + ?Sized> InferenceBackend for &B {
    fn is_loaded(&self) -> bool {
        (**self).is_loaded()
    }

    fn predict(&self, inputs: &GaitRiskInputs) -> GaitResult<BackendPrediction> {
        (**self).predict(inputs)
    }
}

/// Per-input normalization: `(center, scale, direction)`
///
/// Order matches [`GaitRiskInputs::as_array`]. A direction of −1 marks inputs
/// where lower values are worse.
const NORMALIZATION: [(f64, f64, f64); 8] = [
    (1.0, 0.3, -1.0),    // walking speed (m/s)
    (105.0, 15.0, -1.0), // cadence (spm)
    (25.0, 10.0, 1.0),   // double support (%)
    (0.05, 0.05, 1.0),   // step-length CV
    (0.05, 0.05, 1.0),   // speed CV
    (8.0, 10.0, 1.0),    // step-length asymmetry (%)
    (0.015, 0.01, -1.0), // toe clearance (m)
    (0.7, 0.2, -1.0),    // stability index
];

/// Coefficients of a logistic model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticWeights {
    /// One coefficient per normalized input
    pub coefficients: [f64; 8],
    /// Intercept
    pub bias: f64,
}

impl LogisticWeights {
    /// Reference coefficients for the shipped model
    pub const fn reference() -> Self {
        Self {
            coefficients: [1.2, 0.4, 0.8, 0.6, 0.5, 0.5, 0.9, 0.6],
            bias: -1.5,
        }
    }

    fn is_finite(&self) -> bool {
        self.bias.is_finite() && self.coefficients.iter().all(|c| c.is_finite())
    }
}

/// Logistic regression over normalized risk inputs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogisticBackend {
    weights: Option<LogisticWeights>,
}

impl LogisticBackend {
    /// Backend with no model loaded
    pub const fn unloaded() -> Self {
        Self { weights: None }
    }

    /// Backend loaded with `weights`
    pub fn with_weights(weights: LogisticWeights) -> GaitResult<Self> {
        let mut backend = Self::unloaded();
        backend.load(weights)?;
        Ok(backend)
    }

    /// Load a model; rejects non-finite coefficients and keeps the previous model
    pub fn load(&mut self, weights: LogisticWeights) -> GaitResult<()> {
        if !weights.is_finite() {
            return Err(GaitError::InvalidValue);
        }
        self.weights = Some(weights);
        Ok(())
    }

    /// Drop the loaded model
    pub fn unload(&mut self) {
        self.weights = None;
    }

    /// Loaded coefficients
    pub fn weights(&self) -> Option<&LogisticWeights> {
        self.weights.as_ref()
    }
}

impl InferenceBackend for LogisticBackend {
    fn is_loaded(&self) -> bool {
        self.weights.is_some()
    }

    fn predict(&self, inputs: &GaitRiskInputs) -> GaitResult<BackendPrediction> {
        let weights = self.weights.as_ref().ok_or(GaitError::BackendNotLoaded)?;

        let values = inputs.as_array();
        let mut logit = weights.bias;
        let mut present = 0usize;
        for ((value, (center, scale, direction)), coefficient) in
            values.iter().zip(NORMALIZATION).zip(weights.coefficients)
        {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                continue;
            };
            present += 1;
            logit += coefficient * direction * (value - center) / scale;
        }

        if present < MIN_BACKEND_INPUTS {
            return Err(GaitError::InsufficientData {
                required: MIN_BACKEND_INPUTS,
                available: present,
            });
        }

        let probability = 1.0 / (1.0 + libm::exp(-logit));
        if !probability.is_finite() {
            return Err(GaitError::InferenceFailed { reason: "non-finite output" });
        }

        // Confident when decisive and well covered
        let coverage = present as f64 / values.len() as f64;
        let decisiveness = libm::fabs(2.0 * probability - 1.0);
        let confidence = (0.5 + 0.25 * coverage + 0.2 * decisiveness).clamp(0.0, 1.0);

        Ok(BackendPrediction {
            score: (probability * 100.0).clamp(0.0, 100.0),
            confidence,
        })
    }
}
