/*!
The connection between an engine and the sharer.

An endpoint is three lock-free queues:
- Clauses exported by the engine, awaiting collection by the sharer.
- Units delivered to the engine, awaiting import.
- Clauses of two or more literals delivered to the engine, awaiting import.

An endpoint is held by both the engine (through callbacks set by [connect](Endpoint::connect)) and the sharer, behind an [Arc].
*/

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crossbeam::queue::SegQueue;

use crate::{config::Glue, context::GenericContext, misc::log::targets, structures::literal::ExternalLiteral};

use super::SharedClause;

/// An endpoint.
pub struct Endpoint {
    /// The engine of the endpoint.
    pub id: usize,

    /// Exported clauses of more than one literal with glue above this limit are rejected.
    pub glue_limit: Glue,

    exported: SegQueue<SharedClause>,
    units: SegQueue<ExternalLiteral>,
    clauses: SegQueue<SharedClause>,

    accepted: AtomicUsize,
    rejected: AtomicUsize,
}

impl Endpoint {
    pub fn new(id: usize, glue_limit: Glue) -> Self {
        Endpoint {
            id,
            glue_limit,
            exported: SegQueue::default(),
            units: SegQueue::default(),
            clauses: SegQueue::default(),
            accepted: AtomicUsize::default(),
            rejected: AtomicUsize::default(),
        }
    }

    /// Offers a clause learnt by the engine, returning true if the clause was accepted.
    pub fn export(&self, literals: &[ExternalLiteral], glue: Glue) -> bool {
        if literals.len() > 1 && glue > self.glue_limit {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        self.exported.push(SharedClause {
            literals: literals.to_vec(),
            glue,
            from: self.id,
        });
        self.accepted.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// The next clause exported by the engine, if any.
    pub fn take_exported(&self) -> Option<SharedClause> {
        self.exported.pop()
    }

    /// Delivers a clause to the engine.
    pub fn deliver(&self, clause: SharedClause) {
        match clause.literals.as_slice() {
            [unit] => self.units.push(*unit),
            _ => self.clauses.push(clause),
        }
    }

    /// The next unit delivered to the engine, if any.
    pub fn next_unit(&self) -> Option<ExternalLiteral> {
        self.units.pop()
    }

    /// The next clause delivered to the engine, if any.
    pub fn next_clause(&self) -> Option<SharedClause> {
        self.clauses.pop()
    }

    /// Counts of exported clauses accepted and rejected.
    pub fn export_counts(&self) -> (usize, usize) {
        (
            self.accepted.load(Ordering::Relaxed),
            self.rejected.load(Ordering::Relaxed),
        )
    }

    /// Sets the export and import callbacks of `context` to go through the endpoint.
    pub fn connect<R: rand::Rng + std::default::Default>(
        self: &Arc<Self>,
        context: &mut GenericContext<R>,
    ) {
        log::trace!(target: targets::SHARING, "Connecting engine {}", self.id);

        let exports = Arc::clone(self);
        context.set_callback_export(Box::new(
            move |literals: &[ExternalLiteral], glue: Glue| exports.export(literals, glue),
        ));

        let units = Arc::clone(self);
        context.set_callback_import_unit(Box::new(move || units.next_unit()));

        let clauses = Arc::clone(self);
        context.set_callback_import_clause(Box::new(move || clauses.next_clause()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glue_limit() {
        let endpoint = Endpoint::new(3, 2);

        assert!(endpoint.export(&[1, 2, 3], 2));
        assert!(!endpoint.export(&[1, 2, 3, 4], 3));
        assert!(endpoint.export(&[-5], 9));
        assert_eq!(endpoint.export_counts(), (2, 1));

        let first = endpoint.take_exported().unwrap();
        assert_eq!(first.from, 3);
        assert_eq!(first.literals, vec![1, 2, 3]);
        assert_eq!(endpoint.take_exported().unwrap().literals, vec![-5]);
        assert!(endpoint.take_exported().is_none());
    }

    #[test]
    fn delivery_splits_units() {
        let endpoint = Endpoint::new(0, 2);
        endpoint.deliver(SharedClause {
            literals: vec![-4],
            glue: 0,
            from: 1,
        });
        endpoint.deliver(SharedClause {
            literals: vec![1, 2],
            glue: 1,
            from: 1,
        });

        assert_eq!(endpoint.next_unit(), Some(-4));
        assert_eq!(endpoint.next_unit(), None);
        assert_eq!(endpoint.next_clause().unwrap().literals, vec![1, 2]);
    }
}
