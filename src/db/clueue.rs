//! A bounded queue of recently learnt clauses, for eager subsumption.
//!
//! Each learnt clause is checked against the clauses in the queue, and any clause in the queue subsumed by the learnt clause is marked as garbage.
//! References in the queue are invalidated by a collection, and so the queue is cleared on each collection.

use crate::db::arena::ClauseRef;

#[derive(Default)]
pub struct Clueue {
    elements: Vec<Option<ClauseRef>>,
    next: usize,
}

impl Clueue {
    /// A queue of `capacity` clauses, with zero disabling the queue.
    pub fn with_capacity(capacity: usize) -> Self {
        Clueue {
            elements: vec![None; capacity],
            next: 0,
        }
    }

    /// Pushes `clause`, replacing the oldest clause if full.
    pub fn push(&mut self, clause: ClauseRef) {
        if self.elements.is_empty() {
            return;
        }
        self.elements[self.next] = Some(clause);
        self.next = (self.next + 1) % self.elements.len();
    }

    /// Clauses in the queue.
    pub fn iter(&self) -> impl Iterator<Item = ClauseRef> + '_ {
        self.elements.iter().flatten().copied()
    }

    /// Removes `clause` from the queue.
    pub fn remove(&mut self, clause: ClauseRef) {
        for element in self.elements.iter_mut() {
            if *element == Some(clause) {
                *element = None;
            }
        }
    }

    /// Removes all clauses from the queue.
    pub fn clear(&mut self) {
        self.elements.iter_mut().for_each(|element| *element = None);
        self.next = 0;
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }
}
