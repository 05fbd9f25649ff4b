//! Most frequent element via a per-call occurrence table.

use crate::error::TableError;
use crate::hash_table::HashTable;
use log::trace;

/// Home slot count used by `most_frequent`. Prime, to spread small keys.
pub const DEFAULT_CAPACITY: usize = 257;

/// Returns the element occurring most often in `nums`, or `None` if empty.
///
/// Ties go to whichever maximum the table visits first (lowest home slot,
/// then chain order). Allocation failures are passed through.
pub fn most_frequent(nums: &[i64]) -> Result<Option<i64>, TableError> {
    most_frequent_with_capacity(nums, DEFAULT_CAPACITY)
}

pub fn most_frequent_with_capacity(
    nums: &[i64],
    capacity: usize,
) -> Result<Option<i64>, TableError> {
    let mut counts: HashTable<u64> = HashTable::new(capacity)?;
    for &n in nums {
        let count = counts.get(n).map_or(1, |e| e.value() + 1);
        counts.set(n, count)?;
    }

    let mut best: Option<(i64, u64)> = None;
    for e in &counts {
        if best.map_or(true, |(_, c)| *e.value() > c) {
            best = Some((e.key(), *e.value()));
        }
    }
    if let Some((key, count)) = best {
        trace!(
            "most frequent: key={} count={} distinct={}",
            key,
            count,
            counts.len()
        );
    }
    counts.free();
    Ok(best.map(|(key, _)| key))
}
