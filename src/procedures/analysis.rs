/*!
Analysis of a conflict, to a clause which asserts the negation of the first unique implication point.

# Overview

Given a conflict, every literal of the conflict clause is false.
Analysis resolves the conflict clause against the reasons of literals on the highest level of the clause, walking the trail backwards, until a single literal on the highest level remains.
That literal is the first *unique implication point* (UIP), and the resolvent asserts the negation of the UIP once every literal on the highest level is unassigned.

Literals assigned at level zero are skipped throughout, as each is false in every model of the formula.

If the highest level of the conflict is below the current level (possible after an out of order backtrack), the context first backtracks to the highest level of the conflict.
If the highest level of the conflict is zero, the formula is unsatisfiable.

# Minimization

Once the UIP is found, each other literal of the learnt clause is checked for redundancy: a literal is redundant if the reason for its negation consists of literals which are (recursively) redundant, at level zero, or in the clause.
A search from a literal never leaves the levels of the clause, and results are cached on variables as *removable* or *poisoned*.

# Glue and the backjump level

The glue of the learnt clause is the count of distinct levels of its literals.
The literal of the clause on the highest level below the UIP is moved to position one, and its level is the level to which the context may backjump.

# Bumps

Every variable visited by the analysis is bumped in the order of the current mode, and the reason clauses used are marked as used.

# Literature

See [GRASP](https://doi.org/10.1109/12.769433) for unique implication points, and [Minimizing Learned Clauses](https://doi.org/10.1007/978-3-642-02777-2_23) for minimization.
*/

use crate::{
    config::Glue,
    context::GenericContext,
    db::{arena::MAX_USED, assignment::Reason, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::literal::{literals_string, Literal, Variable},
    types::err::{self, ErrorKind},
};

/// The deepest recursion permitted when checking a literal for redundancy.
const MINIMIZE_DEPTH: usize = 1_000;

/// Possible 'Ok' results from conflict analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum Ok {
    /// The conflict is at level zero, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// A clause was learnt, and is held in the [learned buffer](crate::context::AnalysisBuffers::learned).
    Asserting {
        /// The highest level of the clause below the level of the UIP.
        jump: LevelIndex,

        /// The glue of the clause.
        glue: Glue,
    },
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses the conflict `conflict`.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn analyze(&mut self, conflict: ClauseKey) -> Result<Ok, ErrorKind> {
        let mut resolvent = self.key_literals(conflict)?;

        let conflict_level = resolvent
            .iter()
            .map(|literal| self.assignment.level(*literal))
            .max()
            .unwrap_or(0);
        if conflict_level == 0 {
            return Ok(Ok::FundamentalConflict);
        }
        if conflict_level < self.trail.level() {
            log::trace!(target: targets::ANALYSIS, "Conflict below the current level, at {conflict_level}");
            self.backtrack(conflict_level);
        }

        self.buffers.learned.clear();
        self.buffers.learned.push(Literal::INVALID);
        self.buffers.analyzed.clear();

        let mut open = 0;
        let mut index = self.trail.len();

        let uip = loop {
            for literal in &resolvent {
                let variable = literal.variable();
                let assigned = self.assignment.assigned_mut(variable);
                if assigned.analyzed || assigned.level == 0 {
                    continue;
                }
                assigned.analyzed = true;
                self.buffers.analyzed.push(variable);
                if assigned.level == conflict_level {
                    open += 1;
                } else {
                    self.buffers.learned.push(*literal);
                }
            }

            let pivot = loop {
                if index == 0 {
                    return Err(err::AnalysisError::NoAssertion.into());
                }
                index -= 1;
                let literal = self.trail.literals()[index];
                let assigned = self.assignment.assigned(literal.variable());
                if assigned.analyzed && assigned.level == conflict_level {
                    break literal;
                }
            };

            open -= 1;
            if open == 0 {
                break pivot;
            }
            resolvent = self.reason_literals(pivot)?;
        };

        self.buffers.learned[0] = uip.negate();

        if self.config.minimize.value {
            self.minimize(conflict_level)?;
        }

        let glue = self.learned_glue(conflict_level);

        let learned = &mut self.buffers.learned;
        let mut jump = 0;
        if learned.len() > 1 {
            let mut highest = 1;
            for position in 2..learned.len() {
                if self.assignment.level(learned[position]) > self.assignment.level(learned[highest]) {
                    highest = position;
                }
            }
            learned.swap(1, highest);
            jump = self.assignment.level(learned[1]);
        }

        self.orders.active().bump(
            &mut self.buffers.analyzed,
            &self.assignment,
            self.counters.conflicts,
        );
        for variable in self.buffers.analyzed.drain(..) {
            self.assignment.assigned_mut(variable).analyzed = false;
        }

        self.averages.fast_glue.update(glue as f64);
        self.averages.slow_glue.update(glue as f64);
        if self.orders.is_stable() {
            self.reluctant.tick();
        }

        log::trace!(target: targets::ANALYSIS, "Learnt {} with glue {glue}, jump {jump}", literals_string(self.buffers.learned.iter()));
        Ok(Ok::Asserting { jump, glue })
    }

    /// The literals of the clause `key`.
    pub fn key_literals(&self, key: ClauseKey) -> Result<Vec<Literal>, ErrorKind> {
        match key {
            ClauseKey::Binary(a, b) => Ok(vec![a, b]),
            ClauseKey::Large(cref) => Ok(self.arena.clause(cref)?.literals().to_vec()),
        }
    }

    /// The literals of the reason for `literal`, other than the negation of `literal`.
    ///
    /// A reason clause in the arena which is redundant is marked as used.
    fn reason_literals(&mut self, literal: Literal) -> Result<Vec<Literal>, ErrorKind> {
        match self.assignment.reason(literal) {
            Reason::Binary(other) => Ok(vec![other]),

            Reason::Large(cref) => {
                let tier2 = self.config.arena.tier2.value;
                let mut view = self.arena.clause_mut(cref)?;
                if view.flags().redundant {
                    let used = match view.glue() <= tier2 {
                        true => MAX_USED,
                        false => 1,
                    };
                    view.update_flags(|flags| flags.used = flags.used.max(used));
                }
                debug_assert_eq!(view.literals()[0], literal);
                Ok(view.literals()[1..].to_vec())
            }

            Reason::Decision | Reason::Unit => {
                log::error!(target: targets::ANALYSIS, "No reason to resolve on {literal}");
                Err(err::AnalysisError::MissingReason.into())
            }
        }
    }

    /// Removes redundant literals from the learnt clause.
    fn minimize(&mut self, conflict_level: LevelIndex) -> Result<(), ErrorKind> {
        let mut learned = std::mem::take(&mut self.buffers.learned);

        self.buffers.levels.clear();
        self.buffers.levels.resize(conflict_level as usize + 1, false);
        for literal in &learned[1..] {
            self.buffers.levels[self.assignment.level(*literal) as usize] = true;
        }

        let before = learned.len();
        let mut kept = 1;
        for position in 1..learned.len() {
            let literal = learned[position];
            if !self.redundant(literal.variable(), 0)? {
                learned[kept] = literal;
                kept += 1;
            }
        }
        learned.truncate(kept);

        for variable in self.buffers.minimized.drain(..) {
            let assigned = self.assignment.assigned_mut(variable);
            assigned.removable = false;
            assigned.poisoned = false;
        }

        if kept < before {
            log::trace!(target: targets::ANALYSIS, "Minimized {} literals", before - kept);
        }
        self.buffers.learned = learned;
        Ok(())
    }

    /// True if `variable` is implied false by the learnt clause.
    fn redundant(&mut self, variable: Variable, depth: usize) -> Result<bool, ErrorKind> {
        let assigned = *self.assignment.assigned(variable);
        if assigned.level == 0 || assigned.removable {
            return Ok(true);
        }
        if assigned.poisoned {
            return Ok(false);
        }
        if depth > 0 && assigned.analyzed {
            return Ok(true);
        }
        if depth > MINIMIZE_DEPTH {
            return Ok(false);
        }

        let level_in_clause = self
            .buffers
            .levels
            .get(assigned.level as usize)
            .copied()
            .unwrap_or(false);

        let others = match assigned.reason {
            _ if !level_in_clause => None,
            Reason::Decision | Reason::Unit => None,
            Reason::Binary(other) => Some(vec![other]),
            Reason::Large(cref) => Some(self.arena.clause(cref)?.literals()[1..].to_vec()),
        };

        let mut redundant = others.is_some();
        for other in others.into_iter().flatten() {
            if !self.redundant(other.variable(), depth + 1)? {
                redundant = false;
                break;
            }
        }

        let assigned = self.assignment.assigned_mut(variable);
        match redundant {
            true => assigned.removable = true,
            false => assigned.poisoned = true,
        }
        self.buffers.minimized.push(variable);
        Ok(redundant)
    }

    /// The count of distinct levels of the learnt clause.
    fn learned_glue(&mut self, conflict_level: LevelIndex) -> Glue {
        let levels = &mut self.buffers.levels;
        levels.clear();
        levels.resize(conflict_level as usize + 1, false);

        let mut glue = 0;
        for literal in &self.buffers.learned {
            let level = self.assignment.level(*literal) as usize;
            if !levels[level] {
                levels[level] = true;
                glue += 1;
            }
        }
        glue
    }
}
