//! Error type shared by table construction and insertion.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    /// Capacity must be at least one home slot.
    #[error("invalid capacity {capacity}: a table needs at least one home slot")]
    InvalidArgument { capacity: usize },

    #[error("out of memory reserving {capacity} home slots")]
    SlotsOutOfMemory {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("out of memory allocating an overflow node for key {key}")]
    NodeOutOfMemory {
        key: i64,
        #[source]
        source: TryReserveError,
    },

    /// The overflow arena reached its configured node budget.
    #[error("out of memory: overflow chain budget of {limit} nodes exhausted")]
    ChainOutOfMemory { limit: usize },
}

impl TableError {
    /// True for any allocation failure (home slots, chain node, node budget).
    pub fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            TableError::SlotsOutOfMemory { .. }
                | TableError::NodeOutOfMemory { .. }
                | TableError::ChainOutOfMemory { .. }
        )
    }
}
