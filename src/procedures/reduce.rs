/*!
Reduction of the learnt clauses in the arena.

# Overview

Reductions take place on a schedule, with the interval between reductions growing with the square root of the count of reductions.

On a reduction each redundant clause in the arena is considered, unless already garbage, the reason for some assignment, or kept (by low glue):
- A clause used since the last reduction has its use count decremented, and survives.
- Otherwise, the clause is a candidate for removal.

Candidates are ordered from worst to best by glue, then by size, and the configured fraction of candidates (worst first) is marked as garbage.
A [collection](crate::procedures::collect) then follows from the first garbage clause.
*/

use crate::{
    config::Glue,
    context::GenericContext,
    db::arena::ClauseRef,
    misc::log::targets::{self},
    procedures::collect::CollectMode,
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// True if a reduction is due.
    pub fn reducing(&self) -> bool {
        self.counters.conflicts >= self.limits.reduce
    }

    /// Reduces the learnt clauses in the arena.
    ///
    /// For documentation, see [procedures::reduce](crate::procedures::reduce).
    pub fn reduce(&mut self) -> Result<(), ErrorKind> {
        self.counters.reductions += 1;

        self.pin_reasons(true)?;
        let mut candidates: Vec<(Glue, usize, ClauseRef)> = Vec::default();
        let mut start = self.arena.words();
        let clauses: Vec<ClauseRef> = self.arena.references().collect();
        for cref in clauses {
            let mut view = self.arena.clause_mut(cref)?;
            let flags = view.flags();
            if flags.garbage {
                start = start.min(cref.offset());
            }
            if !flags.redundant || flags.garbage || flags.reason || flags.keep {
                continue;
            }
            if flags.used > 0 {
                view.update_flags(|flags| flags.used -= 1);
                continue;
            }
            candidates.push((view.glue(), view.size(), cref));
        }
        self.pin_reasons(false)?;

        candidates.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

        let target = (candidates.len() as f64 * self.config.arena.reduce_fraction.value) as usize;
        for (_, _, cref) in &candidates[..target] {
            self.arena.mark_garbage(*cref)?;
            start = start.min(cref.offset());
        }

        log::info!(target: targets::REDUCTION, "Reduction {}: {target} of {} candidates", self.counters.reductions, candidates.len());

        self.collect(start, CollectMode::Sparse)?;

        let interval = self.config.arena.reduce_interval.value as f64;
        let delta = interval * ((self.counters.reductions + 1) as f64).sqrt();
        self.limits.reduce = self.counters.conflicts + delta as u64;
        Ok(())
    }
}
