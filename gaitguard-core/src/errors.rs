//! Error Types for GaitGuard
//!
//! ## Where errors are (and are not) used
//!
//! Gait math never fails. A metric that cannot be computed from the data at
//! hand is reported as `None`; a NaN or a negative duration is dropped from the
//! averages it would have poisoned. `GaitError` is reserved for the few places
//! where a caller asked for something whose precondition is not met:
//!
//! - Calibration deviations requested before the baseline is frozen
//! - Inference requested from a backend that is not loaded or that failed
//! - Telemetry serialization failures
//!
//! Like the rest of the core, errors are small and `Copy`: reasons are
//! `&'static str`, never heap strings.
//!
//! ```rust
//! use gaitguard_core::{GaitCalibrationManager, GaitMetrics, GaitError};
//!
//! let calibration = GaitCalibrationManager::default();
//! match calibration.deviations(&GaitMetrics::default()) {
//!     Ok(_) => unreachable!("no baseline yet"),
//!     Err(GaitError::CalibrationIncomplete) => {} // keep collecting
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for fallible gait operations
pub type GaitResult<T> = Result<T, GaitError>;

/// Gait engine errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GaitError {
    /// Not enough samples to compute the requested value
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Number of samples available
        available: usize,
    },

    /// Value makes no physical sense (NaN, infinity, negative duration)
    #[error("Invalid value: not a usable number")]
    InvalidValue,

    /// Deviations requested before the calibration baseline is frozen
    #[error("Calibration baseline not yet available")]
    CalibrationIncomplete,

    /// Inference requested from a backend that has no model loaded
    #[error("Inference backend not loaded")]
    BackendNotLoaded,

    /// Backend raised an error while scoring
    #[error("Inference failed: {reason}")]
    InferenceFailed {
        /// What went wrong
        reason: &'static str,
    },

    /// Outbound payload could not be serialized
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// What went wrong
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small() {
        assert!(core::mem::size_of::<GaitError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err = GaitError::InsufficientData { required: 2, available: 1 };
        assert_eq!(err.to_string(), "Insufficient data: need 2, have 1");
        assert_eq!(
            GaitError::InferenceFailed { reason: "nan output" }.to_string(),
            "Inference failed: nan output"
        );
    }
}
