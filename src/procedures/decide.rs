/*!
Methods for choosing the value of a variable.

# Overview

A decision takes the next unassigned variable from the [order](crate::decision) of the current mode, and assigns the variable a value on a fresh level.

# Phases

The value given to a decided variable is:
- The [target phase](crate::db::phases) of the variable, if in the stable mode with target phases enabled and some target phase is set.
- Otherwise, the saved phase of the variable, if set.
- Otherwise, the [initial phase](crate::config::phase::PhaseConfig::initial).
*/

use crate::{
    context::GenericContext,
    structures::literal::{Literal, Variable},
};

/// Possible 'Ok' results from choosing a variable.
pub enum Ok {
    /// A decision was made.
    Made(Literal),

    /// No decision was made, as every variable is assigned (or eliminated).
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Makes a decision, if some variable is unassigned.
    pub fn decide(&mut self) -> Ok {
        let Some(variable) = self.orders.active().next_unassigned(&self.assignment) else {
            return Ok::Exhausted;
        };
        let literal = Literal::new(variable, self.decision_phase(variable));
        self.counters.decisions += 1;
        self.assign_decision(literal);
        Ok::Made(literal)
    }

    /// The phase of a decision on `variable`.
    pub fn decision_phase(&self, variable: Variable) -> bool {
        if self.orders.is_stable() && self.config.phase.target.value {
            if let Some(phase) = self.phases.target_of(variable) {
                return phase;
            }
        }
        self.phases
            .saved_of(variable)
            .unwrap_or(self.config.phase.initial.value)
    }
}
