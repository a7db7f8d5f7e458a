//! Shared service handles
//!
//! The cadence and motion managers are fed by more than one producer (the
//! session thread and the wearable message handler) and read by telemetry.
//! [`Shared`] wraps a manager in `Arc<Mutex<_>>` so the composition root can
//! create one instance and hand clones to each producer.
//!
//! A panic while a lock is held poisons it. The managers hold plain numeric
//! state that is valid after any partial update, so a poisoned lock is
//! recovered rather than propagated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    fusion::{
        cadence::{CadenceFusion, CadenceFusionConfig, CadenceFusionManager},
        motion::{MotionFusionManager, MotionStats},
    },
    geometry::Vec3,
    time::Timestamp,
    traits::Reset,
};

/// Cloneable handle to a manager behind a mutex
#[derive(Debug, Default)]
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Shared<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<T: Reset> Shared<T> {
    /// Clear the shared state (test isolation, user switch)
    pub fn reset(&self) {
        self.lock().reset();
    }
}

/// Process-wide cadence fusion handle
pub type SharedCadenceFusion = Shared<CadenceFusionManager>;

/// Process-wide motion statistics handle
pub type SharedMotionFusion = Shared<MotionFusionManager>;

impl Shared<CadenceFusionManager> {
    /// Handle to a fresh manager with `config`
    pub fn with_config(config: CadenceFusionConfig) -> Self {
        Self::new(CadenceFusionManager::new(config))
    }

    /// Store a wearable report
    pub fn record_external(&self, cadence: f64, timestamp: Timestamp) -> bool {
        self.lock().record_external(cadence, timestamp)
    }

    /// Fuse a derived cadence
    pub fn fuse(&self, derived: Option<f64>, now: Timestamp) -> CadenceFusion {
        self.lock().fuse(derived, now)
    }

    /// Whether the last fusion used the external report
    pub fn last_fusion_applied(&self) -> bool {
        self.lock().last_fusion_applied()
    }
}

impl Shared<MotionFusionManager> {
    /// Record one acceleration sample
    pub fn record_acceleration(&self, acceleration: Vec3) {
        self.lock().record_acceleration(acceleration);
    }

    /// Record one rotation-rate sample
    pub fn record_rotation_rate(&self, rotation_rate: Vec3) {
        self.lock().record_rotation_rate(rotation_rate);
    }

    /// Record one altitude reading
    pub fn record_altitude(&self, altitude_m: f64) {
        self.lock().record_altitude(altitude_m);
    }

    /// Current statistics
    pub fn stats(&self) -> MotionStats {
        self.lock().stats()
    }
}
