/*!
Learning the clause of an analysis.

# Overview

The clause learnt from a conflict is stored according to its size:

- A unit is asserted at level zero, after a backtrack to level zero, and the context is marked as *iterating* so a simplification of the formula follows.
- A binary clause is stored as a redundant pair of [binary watches](crate::db::watches).
- Any longer clause is stored in the [arena](crate::db::arena) as redundant, with its glue.
  Clauses with glue at most `tier2` are noted as recently used twice over, and clauses with glue at most `tier1` are kept through every reduction.

In each case the asserted literal is then assigned, with the learnt clause as reason, and (binary or longer) the clause is checked against recently learnt clauses for [subsumption](crate::procedures::subsume).
Every learnt clause is also offered to the [export callback](crate::context::callbacks::CallbackExport), if set.

# Backjumping

By default a backjump is made to the jump level of the clause.
However, if this would undo more than [chrono_levels](crate::config::Config::chrono_levels) levels a backtrack of a single level is made instead.
In either case every literal of the clause other than the asserted literal remains false, and so the clause asserts on the level backtracked to.
*/

use crate::{
    config::Glue,
    context::GenericContext,
    db::{arena::MAX_USED, assignment::Reason, LevelIndex},
    misc::log::targets::{self},
    structures::literal::literals_string,
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Learns the clause in the [learned buffer](crate::context::AnalysisBuffers::learned), backtracks, and asserts the clause.
    pub fn learn(&mut self, jump: LevelIndex, glue: Glue) -> Result<(), ErrorKind> {
        let learned = std::mem::take(&mut self.buffers.learned);

        match learned.len() {
            0 => {}

            1 => {
                self.backtrack(0);
                self.assign(learned[0], Reason::Unit);
                self.iterating = true;
                self.counters.learned_units += 1;
                log::debug!(target: targets::LEARN, "Unit {}", learned[0]);
            }

            2 => {
                self.backtrack(self.backtrack_level(jump));
                self.watches.watch_binary(learned[0], learned[1], true, false);
                self.assign(learned[0], Reason::Binary(learned[1]));
                self.subsume_recent(&learned);
                self.counters.learned_binaries += 1;
            }

            _ => {
                self.backtrack(self.backtrack_level(jump));
                let cref = self.arena.allocate(&learned, true, glue)?;
                let tier1 = self.config.arena.tier1.value;
                let tier2 = self.config.arena.tier2.value;
                self.arena.clause_mut(cref)?.update_flags(|flags| {
                    flags.used = match glue <= tier2 {
                        true => MAX_USED,
                        false => 1,
                    };
                    flags.keep = glue <= tier1;
                });
                self.watches.watch_large(cref, learned[0], learned[1]);
                self.assign(learned[0], Reason::Large(cref));
                self.subsume_recent(&learned);
                self.clueue.push(cref);
                self.counters.learned_large += 1;
            }
        }

        log::trace!(target: targets::LEARN, "Learnt {}", literals_string(learned.iter()));
        if !learned.is_empty() {
            self.export_clause(&learned, glue);
        }

        self.buffers.learned = learned;
        Ok(())
    }

    /// The level to backtrack to for a clause with the given jump level.
    pub fn backtrack_level(&self, jump: LevelIndex) -> LevelIndex {
        let level = self.trail.level();
        if level == 0 {
            return 0;
        }
        let chronological = level - 1;
        if chronological.saturating_sub(jump) > self.config.chrono_levels.value {
            log::trace!(target: targets::LEARN, "Chronological backtrack to {chronological} over {jump}");
            chronological
        } else {
            jump
        }
    }
}
