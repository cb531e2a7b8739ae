//! Batch types

use crate::core::types::CityId;

/// A contiguous, non-empty run of identifiers sent in one upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Zero-based position of this batch within its job
    pub index: usize,
    /// Identifiers in original input order
    pub ids: Vec<CityId>,
}

impl Batch {
    /// Number of identifiers in the batch
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false for batches built by `partition`
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers joined with commas, as the group endpoint expects
    pub fn joined_ids(&self) -> String {
        self.ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
