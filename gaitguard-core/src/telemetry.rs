//! Outbound telemetry payloads
//!
//! The engine does not transport anything. It only renders what a transport
//! layer would send: the final assessment plus the capture quality metadata,
//! as JSON.
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "assessment": { "timestamp": 120.0, "risk": { "score": 12.0, ... }, ... },
//!   "quality": {
//!     "frame_drop_pct": 1.2, "point_density_min": 80.0, "point_density_max": 130.0,
//!     "point_density_avg": 104.5, "accel_var": 0.8, "mean_rot_rate": 0.4, "micro_elev_m": 0.03
//!   }
//! }
//! ```

use serde::Serialize;

use crate::{
    errors::{GaitError, GaitResult},
    fusion::post_session::GaitAssessment,
    quality::QualityMetadata,
};

/// Assessment and quality metadata bundled for transport
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryPayload<'a> {
    /// Engine version that produced the payload
    pub version: &'static str,
    /// Final session assessment
    pub assessment: &'a GaitAssessment,
    /// Capture quality
    pub quality: QualityMetadata,
}

impl<'a> TelemetryPayload<'a> {
    /// Bundle an assessment with quality metadata
    pub fn new(assessment: &'a GaitAssessment, quality: QualityMetadata) -> Self {
        Self {
            version: crate::VERSION,
            assessment,
            quality,
        }
    }

    /// Compact JSON
    pub fn to_json(&self) -> GaitResult<String> {
        serde_json::to_string(self).map_err(|_| GaitError::Serialization {
            reason: "telemetry payload is not representable as JSON",
        })
    }

    /// JSON value, for callers that merge in their own envelope
    pub fn to_value(&self) -> GaitResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|_| GaitError::Serialization {
            reason: "telemetry payload is not representable as JSON",
        })
    }
}
