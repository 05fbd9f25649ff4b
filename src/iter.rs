//! Iter: cursor over a borrowed `HashTable`.
//!
//! The iterator holds a shared borrow of the table, so the table cannot be
//! mutated while a walk is in progress. It is single-pass; call
//! `HashTable::iter` again to restart.

use crate::entry::{Entry, NodeKey};
use crate::hash_table::HashTable;
use core::iter::FusedIterator;

#[derive(Debug, Clone, Copy)]
enum Position {
    Home,
    Chain(NodeKey),
}

pub struct Iter<'a, V> {
    table: &'a HashTable<V>,
    slot: usize,
    at: Position,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(table: &'a HashTable<V>) -> Self {
        Self {
            table,
            slot: 0,
            at: Position::Home,
            remaining: table.len(),
        }
    }

    fn step(&mut self, next: Option<NodeKey>) {
        self.at = match next {
            Some(k) => Position::Chain(k),
            None => {
                self.slot += 1;
                Position::Home
            }
        };
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        let slots = table.slots();
        while let Some(home) = slots.get(self.slot) {
            match self.at {
                Position::Home => {
                    // A vacant slot never has a chain.
                    self.step(home.next);
                    if home.occupied {
                        self.remaining -= 1;
                        return Some(&home.entry);
                    }
                }
                Position::Chain(k) => {
                    let node = table.node(k);
                    self.step(node.next);
                    self.remaining -= 1;
                    return Some(&node.entry);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
