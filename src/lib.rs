//! chained-hashtable: a fixed-capacity hash table with separate chaining,
//! and a most-frequent-element helper built on it.
//!
//! Internal Design:
//!
//! Layout
//! - `HashTable<V>` owns a `Vec` of exactly `capacity` home slots. A key's
//!   home slot is `(key as u64) % capacity`.
//! - The first key to reach a home slot is stored inline. Later colliding
//!   keys become overflow nodes in a `slotmap` arena, linked from the home
//!   slot by generational `NodeKey`s and appended at the tail.
//! - Each home slot carries an explicit `occupied` flag; a vacant slot and
//!   a slot holding key `0` are never confused.
//!
//! Constraints
//! - Capacity is fixed. There is no resize, rehash or removal.
//! - Keys are unique: `set` updates in place when the key is already in the
//!   home slot or anywhere in its chain.
//! - Single-threaded, synchronous; no interior mutability.
//!
//! Ownership
//! - A home slot owns the head of its chain and each node owns its
//!   successor. No node is linked from two places and chains never cycle.
//! - `free` consumes the table and releases each chain tail first. Plain
//!   drop releases the same storage.
//!
//! Iteration
//! - `Iter` borrows the table, so mutating during a walk does not compile.
//!   Order is ascending slot index, home slot before chain, chain in
//!   insertion order.
//!
//! Errors
//! - `TableError::InvalidArgument` for a zero capacity.
//! - `SlotsOutOfMemory` when the slot array cannot be reserved,
//!   `NodeOutOfMemory` when the overflow arena cannot grow and
//!   `ChainOutOfMemory` when a configured overflow budget is exhausted.
//!   None of them leaves a table partially mutated.
//! - A missing key is `None`, not an error.

mod config;
mod entry;
mod error;
mod hash_table;
mod hash_table_proptest;
mod iter;
mod most_frequent;

// Public surface
pub use config::TableConfig;
pub use entry::Entry;
pub use error::TableError;
#[cfg(feature = "stats")]
pub use hash_table::ChainStats;
pub use hash_table::HashTable;
pub use iter::Iter;
pub use most_frequent::{most_frequent, most_frequent_with_capacity, DEFAULT_CAPACITY};
