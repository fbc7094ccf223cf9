//! Recovery from a conflict, or a restart.
//!
//! # Overview
//!
//! A backtrack is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Every literal assigned above the target level is unassigned, with its value saved as the phase of its variable, and the variable is reinserted into the decision order of the current mode.
//! The trail is then truncated to the target level, and propagation resumes from the end of the truncated trail.
//!
//! Before unassigning, the consistent part of the trail (every level below the current level) is compared against the target and best phases, and if larger the phases are updated.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backtracking.

use crate::{
    context::GenericContext,
    db::{assignment::Assignment, LevelIndex},
    misc::log::targets::{self},
    structures::{literal::Literal, value::Value},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backtracks to the given target level.
    ///
    /// A target level at or above the current level is ignored.
    pub fn backtrack(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKTRACK, "Backtrack from {} to {target}", self.trail.level());

        self.update_phases();

        let start = self.trail.level_start(target + 1);
        for index in start..self.trail.len() {
            let literal = self.trail.literals()[index];
            self.assignment.unset(literal);
            self.phases.saved[literal.variable() as usize] = Value::from_bool(literal.polarity());
            self.orders.active().reinsert(literal.variable());
        }

        self.trail.truncate_to_level(target);
    }

    /// Saves the current assignment as target and/or best phases, if larger than those saved.
    ///
    /// Only the levels below the current level are used, as the current level may be in conflict.
    pub fn update_phases(&mut self) {
        let consistent = self.trail.level_start(self.trail.level());

        if self.orders.is_stable()
            && self.config.phase.target.value
            && consistent > self.phases.target_assigned
        {
            Self::copy_phases(&mut self.phases.target, &self.assignment);
            self.phases.target_assigned = consistent;
            log::trace!(target: targets::BACKTRACK, "Target phases of {consistent} variables");
        }

        if consistent > self.phases.best_assigned {
            Self::copy_phases(&mut self.phases.best, &self.assignment);
            self.phases.best_assigned = consistent;
            log::trace!(target: targets::BACKTRACK, "Best phases of {consistent} variables");
        }
    }

    fn copy_phases(phases: &mut [Value], assignment: &Assignment) {
        for (variable, phase) in phases.iter_mut().enumerate() {
            *phase = assignment.value(Literal::new(variable as u32, true));
        }
    }
}
