/*!
Import of units and clauses from other engines, at level zero.

# Overview

Imports are drained from the [import callbacks](crate::context::callbacks) only when the context is at level zero.
Each imported literal is translated through the [import map](crate::db::import), and anything mentioning an unknown or eliminated variable is skipped.

- A unit true at level zero is skipped, and a unit false at level zero makes the context inconsistent.
  Otherwise the unit is assigned at level zero, to be propagated by the search.
- A clause satisfied at level zero is skipped, and literals false at level zero are removed. Then:
  + An empty clause makes the context inconsistent.
  + A unit is assigned as above.
  + A binary clause is stored as a redundant pair of binary watches.
  + Any longer clause is stored in the arena as redundant, with the glue given by its exporter (at most one less than its size), and queued for eager subsumption.

As every literal of an imported clause (after removal of false literals) is unassigned, no propagation is missed by watching the first two literals.
*/

use crate::{
    config::Glue,
    context::GenericContext,
    db::{arena::MAX_USED, assignment::Reason},
    misc::log::targets::{self},
    structures::{
        literal::{ExternalLiteral, Literal},
        value::Value,
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Imports every unit available from the import unit callback.
    pub fn import_units(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ApiError::NotAtRoot.into());
        }
        let Some(mut callback) = self.callback_import_unit.take() else {
            return Ok(());
        };

        while !self.inconsistent {
            let Some(external) = callback() else {
                break;
            };

            let Some(literal) = self.imports.lookup(external) else {
                self.counters.import_skipped += 1;
                continue;
            };

            match self.assignment.value(literal) {
                Value::True => self.counters.import_skipped += 1,
                Value::False => {
                    log::info!(target: targets::IMPORT, "Imported unit {external} is false");
                    self.set_inconsistent();
                }
                Value::Unassigned => {
                    log::trace!(target: targets::IMPORT, "Unit {external}");
                    self.assign(literal, Reason::Unit);
                    self.counters.imported_units += 1;
                }
            }
        }

        self.callback_import_unit = Some(callback);
        Ok(())
    }

    /// Imports every clause available from the import clause callback.
    pub fn import_clauses(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ApiError::NotAtRoot.into());
        }
        let Some(mut callback) = self.callback_import_clause.take() else {
            return Ok(());
        };

        let mut result = Ok(());
        while !self.inconsistent {
            let Some(shared) = callback() else {
                break;
            };
            if let Err(e) = self.import_clause(&shared.literals, shared.glue) {
                result = Err(e);
                break;
            }
        }

        self.callback_import_clause = Some(callback);
        result
    }

    /// Imports a clause of external literals, with the given glue.
    fn import_clause(&mut self, external: &[ExternalLiteral], glue: Glue) -> Result<(), ErrorKind> {
        let mut literals: Vec<Literal> = Vec::with_capacity(external.len());
        for e in external {
            match self.imports.lookup(*e) {
                Some(literal) => literals.push(literal),
                None => {
                    self.counters.import_skipped += 1;
                    return Ok(());
                }
            }
        }

        literals.sort_unstable();
        literals.dedup();
        if literals.windows(2).any(|w| w[0].variable() == w[1].variable())
            || literals
                .iter()
                .any(|l| self.assignment.value(*l) == Value::True)
        {
            self.counters.import_skipped += 1;
            return Ok(());
        }
        literals.retain(|l| self.assignment.value(*l) != Value::False);

        match literals.len() {
            0 => {
                log::info!(target: targets::IMPORT, "Imported clause {external:?} is false");
                self.set_inconsistent();
            }

            1 => {
                self.assign(literals[0], Reason::Unit);
                self.counters.imported_units += 1;
            }

            2 => {
                self.watches.watch_binary(literals[0], literals[1], true, false);
                self.counters.imported_clauses += 1;
            }

            size => {
                let glue = glue.min(size as Glue - 1);
                let tier1 = self.config.arena.tier1.value;
                let tier2 = self.config.arena.tier2.value;
                let cref = self.arena.allocate(&literals, true, glue)?;
                self.arena.clause_mut(cref)?.update_flags(|flags| {
                    flags.used = match glue <= tier2 {
                        true => MAX_USED,
                        false => 1,
                    };
                    flags.keep = glue <= tier1;
                });
                self.watches.watch_large(cref, literals[0], literals[1]);
                self.clueue.push(cref);
                self.counters.imported_clauses += 1;
            }
        }

        log::trace!(target: targets::IMPORT, "Clause {external:?}");
        Ok(())
    }
}
