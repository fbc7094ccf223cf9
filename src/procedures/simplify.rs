/*!
Simplification of the formula at level zero.

# Overview

Once every literal assigned at level zero has been propagated, each clause in the arena is checked against the assignment:
- A clause with some literal true is satisfied, and marked as garbage.
- A clause with some literal false has those literals removed.
  If two literals remain the clause is moved to the watch lists as a binary clause, and otherwise the clause [shrinks](crate::db::arena::Arena::shrink) in place.

A sparse [collection](crate::procedures::collect) from the start of the arena follows, which removes the garbage, binary clauses with some literal assigned, and watches the remaining clauses afresh.

Simplification takes place after a unit is learnt, and otherwise whenever the search is at level zero with units assigned since the last simplification (e.g. after a restart following an import of units).
*/

use crate::{
    context::GenericContext,
    db::arena::ClauseRef,
    misc::log::targets::{self},
    procedures::collect::CollectMode,
    structures::value::Value,
    types::err::{self, BCPError, ErrorKind},
};

/// The action for a clause on simplification.
enum Simplified {
    Unchanged,
    Satisfied,
    Binary(bool),
    Shrunk(usize),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Simplifies the formula with respect to the assignment at level zero.
    ///
    /// For documentation, see [procedures::simplify](crate::procedures::simplify).
    pub fn simplify(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ApiError::NotAtRoot.into());
        }
        if self.inconsistent {
            return Ok(());
        }
        match self.propagate() {
            Ok(()) => {}
            Err(BCPError::Conflict(_)) => {
                self.set_inconsistent();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        self.counters.simplifications += 1;
        self.iterating = false;

        let mut satisfied = 0;
        let mut strengthened = 0;

        let clauses: Vec<ClauseRef> = self.arena.references().collect();
        for cref in clauses {
            let action = {
                let assignment = &self.assignment;
                let mut view = self.arena.clause_mut(cref)?;
                let flags = view.flags();
                let literals = view.literals_mut();

                if flags.garbage {
                    Simplified::Unchanged
                } else if literals.iter().any(|l| assignment.value(*l) == Value::True) {
                    Simplified::Satisfied
                } else {
                    let unfixed = literals
                        .iter()
                        .filter(|l| assignment.value(**l) != Value::False)
                        .count();
                    if unfixed == literals.len() {
                        Simplified::Unchanged
                    } else if unfixed < 2 {
                        log::error!(target: targets::SIMPLIFY, "{cref} has {unfixed} literals not false after propagation");
                        Simplified::Unchanged
                    } else {
                        let mut kept = 0;
                        for position in 0..literals.len() {
                            let literal = literals[position];
                            if assignment.value(literal) != Value::False {
                                literals[kept] = literal;
                                kept += 1;
                            }
                        }
                        match kept {
                            2 => Simplified::Binary(flags.redundant),
                            _ => Simplified::Shrunk(kept),
                        }
                    }
                }
            };

            match action {
                Simplified::Unchanged => {}

                Simplified::Satisfied => {
                    self.arena.mark_garbage(cref)?;
                    satisfied += 1;
                }

                Simplified::Binary(redundant) => {
                    let (a, b) = {
                        let view = self.arena.clause(cref)?;
                        (view.literals()[0], view.literals()[1])
                    };
                    self.watches.watch_binary(a, b, redundant, false);
                    self.arena.mark_garbage(cref)?;
                    strengthened += 1;
                }

                Simplified::Shrunk(size) => {
                    self.arena.shrink(cref, size)?;
                    strengthened += 1;
                }
            }
        }

        self.collect(0, CollectMode::Sparse)?;
        self.unflushed = 0;

        log::debug!(target: targets::SIMPLIFY, "Simplified: {satisfied} satisfied, {strengthened} strengthened");
        Ok(())
    }
}
