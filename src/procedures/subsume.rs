//! Eager subsumption of recently learnt clauses.
//!
//! Each learnt clause is checked against the [clueue](crate::db::clueue) of recently learnt clauses.
//! A clause in the clueue which contains every literal of the learnt clause is subsumed, and is marked as garbage for the next collection.
//!
//! A clause which is the reason for some assignment is skipped, and stays in the clueue.

use crate::{
    context::GenericContext,
    db::assignment::Reason,
    misc::log::targets::{self},
    structures::{literal::Literal, value::Value},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Marks clauses of the clueue subsumed by `clause` as garbage.
    pub fn subsume_recent(&mut self, clause: &[Literal]) {
        if self.clueue.capacity() == 0 {
            return;
        }

        for literal in clause {
            self.marks[literal.index()] = true;
        }

        let recent: Vec<_> = self.clueue.iter().collect();
        for cref in recent {
            let subsumed = match self.arena.clause(cref) {
                Ok(view) if !view.flags().garbage && view.size() >= clause.len() => {
                    let forced = view.literals()[0];
                    let reason = self.assignment.value(forced) == Value::True
                        && self.assignment.reason(forced) == Reason::Large(cref);
                    if reason {
                        continue;
                    }
                    view.literals()
                        .iter()
                        .filter(|literal| self.marks[literal.index()])
                        .count()
                        == clause.len()
                }
                _ => false,
            };

            if subsumed {
                if let Ok(true) = self.arena.mark_garbage(cref) {
                    log::trace!(target: targets::SUBSUMPTION, "Subsumed {cref}");
                    self.counters.subsumed += 1;
                }
                self.clueue.remove(cref);
            }
        }

        for literal in clause {
            self.marks[literal.index()] = false;
        }
    }
}
