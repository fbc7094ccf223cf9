/*!
Collection of garbage from the arena.

# Overview

A collection compacts the [arena](crate::db::arena) from some offset, removing every clause marked as garbage which is not the reason for some assignment, and moves the arena to a fresh epoch.
Every reference held by the context is then brought up to date: watches, reasons, and the clueue (which is simply cleared).

Two modes of collection are supported:

- A *sparse* collection is used during search.
  + Watches on clauses at or after the offset are flushed, and binary clauses with some literal assigned at level zero are removed.
    Binary clauses derived by hyper binary resolution are removed unless the reason for some assignment.
  + During the sweep clauses satisfied at level zero are removed, and literals false at level zero are removed from clauses, keeping the order of the remaining literals.
    A clause which shrinks to two literals is moved from the arena to the watch lists.
  + Clauses which moved are watched afresh on their two best literals.
- A *dense* collection is used during preprocessing, when watches on clauses in the arena are not maintained.
  Every watch on a clause in the arena is removed, garbage is dropped without changes to other clauses, and every clause is watched afresh.

# Reasons

Before the sweep every clause which is the reason for some assignment (above level zero) is *pinned* through its reason flag.
A pinned clause is never removed, and the reason of the variable forced by a pinned clause which moves is updated to the new reference (or to a binary reason if the clause shrinks to two literals).
Reasons to clauses before the offset are carried to the new epoch through the [relocation](crate::db::arena::Relocation) of the sweep.

# Literature

See [CaDiCaL, Kissat, Paracooba, Plingeling and Treengeling Entering the SAT Competition 2020](https://researchportal.helsinki.fi/en/publications/cadical-kissat-paracooba-plingeling-and-treengeling-entering-the-) for an overview of arena collection in the style implemented.
*/

use crate::{
    context::GenericContext,
    db::{
        arena::{ClauseRef, Relocation, Sweep},
        assignment::{Assignment, Reason},
        watches::Watch,
    },
    misc::log::targets::{self},
    structures::{literal::Literal, value::Value},
    types::err::ErrorKind,
};

/// The mode of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectMode {
    /// A collection during search.
    Sparse,

    /// A collection during preprocessing, without maintained watches.
    Dense,
}

/// A rank of a literal as a watch, where a greater rank is a better watch.
fn watch_rank(assignment: &Assignment, literal: Literal) -> (u8, u32) {
    match assignment.value(literal) {
        Value::Unassigned => (2, u32::MAX),
        Value::True => (2, u32::MAX - assignment.level(literal)),
        Value::False => (1, assignment.level(literal)),
    }
}

/// True if the binary clause `(a b)` is the reason for the assignment of either literal.
fn is_binary_reason(assignment: &Assignment, a: Literal, b: Literal) -> bool {
    (assignment.value(a) == Value::True && assignment.reason(a) == Reason::Binary(b))
        || (assignment.value(b) == Value::True && assignment.reason(b) == Reason::Binary(a))
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Collects garbage from the arena from `start`.
    ///
    /// For documentation, see [procedures::collect](crate::procedures::collect).
    pub fn collect(&mut self, start: usize, mode: CollectMode) -> Result<(), ErrorKind> {
        debug_assert!(self.trail.fully_propagated());
        self.counters.collections += 1;
        let words = self.arena.words();

        self.pin_reasons(true)?;

        match mode {
            CollectMode::Sparse => self.flush_watches(start),
            CollectMode::Dense => self.watches.disconnect_large(),
        }

        let relocation = self.sweep_arena(start, mode);
        self.retag(&relocation, mode);

        match mode {
            CollectMode::Sparse => self.rewatch_from(relocation.start())?,
            CollectMode::Dense => self.rewatch_from(0)?,
        }

        self.pin_reasons(false)?;
        self.clueue.clear();

        log::debug!(target: targets::COLLECT, "{mode:?} collection from {start}, {words} to {} words", self.arena.words());
        Ok(())
    }

    /// Sets (or clears) the reason flag of every clause in the arena which is the reason for some assignment.
    pub fn pin_reasons(&mut self, pin: bool) -> Result<(), ErrorKind> {
        for index in self.trail.level_start(1)..self.trail.len() {
            let literal = self.trail.literals()[index];
            if let Reason::Large(cref) = self.assignment.reason(literal) {
                self.arena
                    .clause_mut(cref)?
                    .update_flags(|flags| flags.reason = pin);
            }
        }
        Ok(())
    }

    /// Removes watches on clauses at or after `start`, and binary clauses no longer needed.
    fn flush_watches(&mut self, start: usize) {
        let assignment = &self.assignment;
        for index in 0..self.watches.literal_count() {
            let literal = Literal::from_code(index as u32);
            let literal_fixed = assignment.fixed(literal).is_assigned();

            self.watches.of_mut(literal).retain(|watch| match *watch {
                Watch::Binary { other, hyper, .. } => {
                    if literal_fixed || assignment.fixed(other).is_assigned() {
                        return false;
                    }
                    !hyper || is_binary_reason(assignment, literal, other)
                }
                Watch::Large { clause, .. } => clause.offset() < start,
            });
        }
    }

    /// Sweeps the arena from `start`.
    fn sweep_arena(&mut self, start: usize, mode: CollectMode) -> Relocation {
        let assignment = &mut self.assignment;
        let watches = &mut self.watches;
        let mut rehomed = 0;

        let relocation = self.arena.sweep(start, |_, new, view| {
            let flags = view.flags();
            if flags.garbage && !flags.reason {
                return Sweep::Drop;
            }

            if mode == CollectMode::Dense {
                if flags.reason {
                    let forced = view.literals()[0];
                    assignment.assigned_mut(forced.variable()).reason = Reason::Large(new);
                }
                return Sweep::Keep(view.size());
            }

            let literals = view.literals_mut();
            if !flags.reason
                && literals
                    .iter()
                    .any(|literal| assignment.fixed(*literal) == Value::True)
            {
                return Sweep::Drop;
            }

            let unfixed = literals
                .iter()
                .filter(|literal| assignment.fixed(**literal) != Value::False)
                .count();
            if unfixed < 2 {
                log::error!(target: targets::COLLECT, "Clause with {unfixed} literals not false at level zero");
                return Sweep::Keep(literals.len());
            }

            let mut kept = 0;
            for position in 0..literals.len() {
                let literal = literals[position];
                if assignment.fixed(literal) != Value::False {
                    literals[kept] = literal;
                    kept += 1;
                }
            }

            if kept == 2 {
                let (a, b) = (literals[0], literals[1]);
                watches.watch_binary(a, b, flags.redundant, false);
                if flags.reason {
                    assignment.assigned_mut(a.variable()).reason = Reason::Binary(b);
                }
                rehomed += 1;
                return Sweep::Drop;
            }

            if flags.reason {
                assignment.assigned_mut(literals[0].variable()).reason = Reason::Large(new);
            }
            Sweep::Keep(kept)
        });

        if rehomed > 0 {
            log::trace!(target: targets::COLLECT, "{rehomed} clauses moved to binary watches");
        }
        relocation
    }

    /// Carries watches and reasons to clauses before the start of the sweep to the new epoch.
    fn retag(&mut self, relocation: &Relocation, mode: CollectMode) {
        let carry = |clause: &mut ClauseRef| {
            if let Some(fresh) = relocation.retag(*clause) {
                *clause = fresh;
            }
        };

        if mode == CollectMode::Sparse && relocation.start() > 0 {
            for index in 0..self.watches.literal_count() {
                let literal = Literal::from_code(index as u32);
                for watch in self.watches.of_mut(literal).iter_mut() {
                    if let Watch::Large { clause, .. } = watch {
                        carry(clause);
                    }
                }
            }
        }

        for index in self.trail.level_start(1)..self.trail.len() {
            let variable = self.trail.literals()[index].variable();
            if let Reason::Large(clause) = &mut self.assignment.assigned_mut(variable).reason {
                carry(clause);
            }
        }
    }

    /// Watches every clause in the arena at or after `start` on its two best literals.
    ///
    /// Literals not false are best, and otherwise false literals assigned at a higher level are better.
    pub fn rewatch_from(&mut self, start: usize) -> Result<(), ErrorKind> {
        let clauses: Vec<ClauseRef> = self.arena.references_from(start).collect();
        for cref in clauses {
            let mut view = self.arena.clause_mut(cref)?;
            let literals = view.literals_mut();
            for slot in 0..2 {
                let mut best = slot;
                for position in slot + 1..literals.len() {
                    if watch_rank(&self.assignment, literals[position])
                        > watch_rank(&self.assignment, literals[best])
                    {
                        best = position;
                    }
                }
                literals.swap(slot, best);
            }
            let (first, second) = (literals[0], literals[1]);
            self.watches.watch_large(cref, first, second);
        }
        Ok(())
    }
}
