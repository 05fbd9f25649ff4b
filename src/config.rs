//! TableConfig: construction parameters for `HashTable`.

use crate::error::TableError;
use crate::hash_table::HashTable;

/// Builder for a fixed-capacity table.
///
/// `capacity` is the number of home slots and never changes after
/// `build`. `max_overflow_nodes` bounds how many chain nodes may be live
/// at once; inserting past it fails with `TableError::ChainOutOfMemory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub(crate) capacity: usize,
    pub(crate) max_overflow_nodes: Option<usize>,
}

impl TableConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_overflow_nodes: None,
        }
    }

    pub fn max_overflow_nodes(mut self, limit: usize) -> Self {
        self.max_overflow_nodes = Some(limit);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn overflow_limit(&self) -> Option<usize> {
        self.max_overflow_nodes
    }

    pub fn build<V: Default>(&self) -> Result<HashTable<V>, TableError> {
        HashTable::with_config(self)
    }
}
