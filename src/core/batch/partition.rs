//! Identifier list partitioning

use super::types::Batch;
use crate::core::types::CityId;
use crate::utils::error::{GatewayError, Result};

/// Largest number of identifiers the group endpoint accepts per call
pub const MAX_BATCH_SIZE: usize = 20;

/// Split `ids` into consecutive batches of at most `max_size` identifiers.
///
/// Yields `ceil(len / max_size)` batches; every batch but the last is full
/// and their concatenation is `ids` in its original order. An empty input
/// produces no batches.
pub fn partition(ids: &[CityId], max_size: usize) -> Result<Vec<Batch>> {
    if max_size == 0 {
        return Err(GatewayError::invalid_argument(
            "batch size must be greater than 0",
        ));
    }

    Ok(ids
        .chunks(max_size)
        .enumerate()
        .map(|(index, chunk)| Batch {
            index,
            ids: chunk.to_vec(),
        })
        .collect())
}
