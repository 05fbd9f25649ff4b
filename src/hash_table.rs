//! HashTable: fixed-capacity separate chaining with inline home slots.
//!
//! The first key hashed to a slot is stored inline in that slot. Every
//! later colliding key gets an overflow node in the arena, appended at
//! the tail of the slot's chain. The slot array is never resized.

use crate::config::TableConfig;
use crate::entry::{Entry, Node, NodeKey, Slot};
use crate::error::TableError;
use crate::iter::Iter;
use log::{debug, trace, warn};
use slotmap::SlotMap;

#[derive(Debug)]
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    nodes: SlotMap<NodeKey, Node<V>>, // overflow chain storage
    len: usize,
    max_overflow_nodes: Option<usize>,
}

impl<V: Default> HashTable<V> {
    /// Create a table with `capacity` home slots, all unoccupied.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(&TableConfig::new(capacity))
    }

    pub fn with_config(config: &TableConfig) -> Result<Self, TableError> {
        let capacity = config.capacity;
        if capacity == 0 {
            return Err(TableError::InvalidArgument { capacity });
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| TableError::SlotsOutOfMemory { capacity, source })?;
        slots.resize_with(capacity, Slot::vacant);
        debug!(
            "created hash table: capacity={} max_overflow_nodes={:?}",
            capacity, config.max_overflow_nodes
        );
        Ok(Self {
            slots,
            nodes: SlotMap::with_key(),
            len: 0,
            max_overflow_nodes: config.max_overflow_nodes,
        })
    }
}

impl<V> HashTable<V> {
    #[inline]
    fn home_index(&self, key: i64) -> usize {
        ((key as u64) % (self.slots.len() as u64)) as usize
    }

    /// Number of home slots; fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live overflow nodes across all chains.
    pub fn overflow_len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of entries stored at home slot `slot`, counting the inline one.
    /// `None` if `slot` is out of range.
    pub fn chain_len(&self, slot: usize) -> Option<usize> {
        let home = self.slots.get(slot)?;
        if !home.occupied {
            return Some(0);
        }
        let mut n = 1;
        let mut cursor = home.next;
        while let Some(k) = cursor {
            n += 1;
            cursor = self.nodes[k].next;
        }
        Some(n)
    }

    pub fn get(&self, key: i64) -> Option<&Entry<V>> {
        let home = &self.slots[self.home_index(key)];
        if !home.occupied {
            return None;
        }
        if home.entry.key == key {
            return Some(&home.entry);
        }
        let mut cursor = home.next;
        while let Some(k) = cursor {
            let node = &self.nodes[k];
            if node.entry.key == key {
                return Some(&node.entry);
            }
            cursor = node.next;
        }
        None
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let idx = self.home_index(key);
        let home = &mut self.slots[idx];
        if !home.occupied {
            return None;
        }
        if home.entry.key == key {
            return Some(&mut home.entry.value);
        }
        let mut cursor = home.next;
        while let Some(k) = cursor {
            if self.nodes[k].entry.key == key {
                return Some(&mut self.nodes[k].entry.value);
            }
            cursor = self.nodes[k].next;
        }
        None
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Insert `key -> value`, or overwrite the value if `key` is present.
    ///
    /// Returns the replaced value on update and `None` on insert. When a new
    /// overflow node is needed, fails with `ChainOutOfMemory` if the
    /// configured budget is exhausted or `NodeOutOfMemory` if the arena
    /// cannot grow; either way the table is left untouched.
    pub fn set(&mut self, key: i64, value: V) -> Result<Option<V>, TableError> {
        let idx = self.home_index(key);
        let home = &mut self.slots[idx];
        if !home.occupied {
            home.occupied = true;
            home.entry = Entry { key, value };
            self.len += 1;
            return Ok(None);
        }
        if home.entry.key == key {
            return Ok(Some(core::mem::replace(&mut home.entry.value, value)));
        }

        // Compare against the current node, never its predecessor, so an
        // existing chained key is updated instead of duplicated.
        let mut tail = None;
        let mut cursor = home.next;
        while let Some(k) = cursor {
            let node = &mut self.nodes[k];
            if node.entry.key == key {
                return Ok(Some(core::mem::replace(&mut node.entry.value, value)));
            }
            tail = Some(k);
            cursor = node.next;
        }

        if let Some(limit) = self.max_overflow_nodes {
            if self.nodes.len() >= limit {
                warn!("overflow chain budget exhausted: limit={} key={}", limit, key);
                return Err(TableError::ChainOutOfMemory { limit });
            }
        }

        // Links change only once the node's storage is secured.
        self.nodes
            .try_reserve(1)
            .map_err(|source| TableError::NodeOutOfMemory { key, source })?;
        let new = self.nodes.insert(Node {
            entry: Entry { key, value },
            next: None,
        });
        match tail {
            Some(t) => self.nodes[t].next = Some(new),
            None => self.slots[idx].next = Some(new),
        }
        self.len += 1;
        trace!("chained key {} at home slot {}", key, idx);
        Ok(None)
    }

    /// Lazy single-pass walk over every stored entry: ascending slot index,
    /// home slot before its chain, chain in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Destroy the table, returning how many overflow nodes were released.
    ///
    /// Each chain is released tail first, so a node goes only after every
    /// node reachable through it is gone. Dropping the table without
    /// calling `free` releases the same memory.
    pub fn free(mut self) -> usize {
        let mut released = 0;
        let mut chain: Vec<NodeKey> = Vec::new();
        for slot in self.slots.iter_mut() {
            let mut cursor = slot.next.take();
            while let Some(k) = cursor {
                chain.push(k);
                cursor = self.nodes[k].next;
            }
            while let Some(k) = chain.pop() {
                if let Some(node) = self.nodes.remove(k) {
                    debug_assert!(node.next.map_or(true, |n| !self.nodes.contains_key(n)));
                    released += 1;
                }
            }
        }
        debug_assert!(self.nodes.is_empty());
        debug!(
            "freed hash table: capacity={} entries={} overflow_nodes={}",
            self.slots.len(),
            self.len,
            released
        );
        released
    }

    pub(crate) fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    pub(crate) fn node(&self, k: NodeKey) -> &Node<V> {
        &self.nodes[k]
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a Entry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Chain-shape statistics for tuning the capacity.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStats {
    /// Entries stored in the table.
    pub populated: usize,
    /// Home slots allocated.
    pub capacity: usize,
    /// Home slots holding a key.
    pub occupied_slots: usize,
    /// Entries living in overflow chains.
    pub overflow_entries: usize,
    /// Longest slot, counting the inline entry.
    pub longest_chain: usize,
    /// populated / capacity
    pub load_factor: f64,
}

#[cfg(feature = "stats")]
impl<V> HashTable<V> {
    pub fn chain_stats(&self) -> ChainStats {
        let mut occupied_slots = 0;
        let mut longest_chain = 0;
        for i in 0..self.slots.len() {
            let n = self.chain_len(i).unwrap_or(0);
            if n > 0 {
                occupied_slots += 1;
            }
            longest_chain = longest_chain.max(n);
        }
        ChainStats {
            populated: self.len,
            capacity: self.slots.len(),
            occupied_slots,
            overflow_entries: self.nodes.len(),
            longest_chain,
            load_factor: self.len as f64 / self.slots.len() as f64,
        }
    }
}
