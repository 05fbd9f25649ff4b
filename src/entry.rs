//! Entry layout: home slots live inline in the slot array, overflow nodes
//! live in a slotmap arena and link to their successor by key.

use slotmap::new_key_type;

new_key_type! {
    /// Generational key of an overflow node in the table's arena.
    pub(crate) struct NodeKey;
}

/// A stored key and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
}

impl<V> Entry<V> {
    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Home slot. `occupied` separates "never used" from "holds key 0".
/// Only an occupied slot may have a chain hanging off it.
#[derive(Debug)]
pub(crate) struct Slot<V> {
    pub(crate) occupied: bool,
    pub(crate) entry: Entry<V>,
    pub(crate) next: Option<NodeKey>, // head of the overflow chain
}

impl<V: Default> Slot<V> {
    pub(crate) fn vacant() -> Self {
        Self {
            occupied: false,
            entry: Entry {
                key: 0,
                value: V::default(),
            },
            next: None,
        }
    }
}

/// Overflow chain node; owned by exactly one predecessor link.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) entry: Entry<V>,
    pub(crate) next: Option<NodeKey>,
}
