//! Feature-vector log for offline training
//!
//! Every scored session can leave its inputs and result behind. The log is a
//! fixed ring: once full, the oldest record is overwritten.

pub use gaitguard_core::constants::buffers::FEATURE_LOG_CAPACITY;
use gaitguard_core::{buffer::RingBuffer, GaitRiskAssessment, GaitRiskInputs, Reset, RiskScorer, Timestamp};

/// One scored input set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureRecord {
    /// When the inputs were scored (seconds)
    pub timestamp: Timestamp,
    /// Scorer inputs
    pub inputs: GaitRiskInputs,
    /// Scorer output
    pub assessment: GaitRiskAssessment,
    /// Whether an inference backend contributed
    pub backend_loaded: bool,
}

/// Bounded log of scored inputs
#[derive(Debug, Clone, Default)]
pub struct FeatureLog {
    records: RingBuffer<FeatureRecord, FEATURE_LOG_CAPACITY>,
    total: u64,
}

impl FeatureLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn record(&mut self, record: FeatureRecord) {
        self.records.push(record);
        self.total += 1;
    }

    /// Score `inputs` with `scorer` and log the result
    pub fn score_and_record<S: RiskScorer + ?Sized>(
        &mut self,
        scorer: &S,
        inputs: &GaitRiskInputs,
        timestamp: Timestamp,
    ) -> GaitRiskAssessment {
        let assessment = scorer.score(inputs);
        self.record(FeatureRecord {
            timestamp,
            inputs: *inputs,
            assessment,
            backend_loaded: scorer.is_backend_loaded(),
        });
        assessment
    }

    /// Records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No records held
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ever appended, including overwritten ones
    pub fn total_recorded(&self) -> u64 {
        self.total
    }

    /// Records from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRecord> + '_ {
        self.records.iter()
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&FeatureRecord> {
        self.records.last()
    }

    /// Copy of every held record, oldest first
    #[cfg(feature = "std")]
    pub fn to_vec(&self) -> std::vec::Vec<FeatureRecord> {
        self.records.iter().copied().collect()
    }
}

impl Reset for FeatureLog {
    fn reset(&mut self) {
        self.records.clear();
        self.total = 0;
    }
}

/// Process-wide feature log shared between scorers and exporters
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SharedFeatureLog {
    inner: gaitguard_core::Shared<FeatureLog>,
}

#[cfg(feature = "std")]
impl SharedFeatureLog {
    /// Empty shared log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn record(&self, record: FeatureRecord) {
        self.inner.with(|log| log.record(record));
    }

    /// Score `inputs` with `scorer` and log the result
    pub fn score_and_record<S: RiskScorer + ?Sized>(
        &self,
        scorer: &S,
        inputs: &GaitRiskInputs,
        timestamp: Timestamp,
    ) -> GaitRiskAssessment {
        self.inner.with(|log| log.score_and_record(scorer, inputs, timestamp))
    }

    /// Records held
    pub fn len(&self) -> usize {
        self.inner.with(|log| log.len())
    }

    /// No records held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every held record, oldest first
    pub fn snapshot(&self) -> std::vec::Vec<FeatureRecord> {
        self.inner.with(|log| log.to_vec())
    }

    /// Drop every record
    pub fn clear(&self) {
        self.inner.reset();
    }
}
