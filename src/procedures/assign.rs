//! Assignment of literals, with the matching push to the trail.
//!
//! The value, level, and reason of a literal are always set together with the push of the literal to the trail.
//! Any assignment made at level zero is noted with [Reason::Unit], regardless of the reason given, as no reason is kept for root assignments.

use crate::{
    context::GenericContext,
    db::assignment::Reason,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Assigns `literal` true on the current level, for `reason`.
    pub fn assign(&mut self, literal: Literal, reason: Reason) {
        let level = self.trail.level();
        let reason = match level {
            0 => {
                self.unflushed += 1;
                Reason::Unit
            }
            _ => reason,
        };
        log::trace!(target: targets::PROPAGATION, "Assign {literal} at {level} for {reason:?}");
        self.assignment.set(literal, level, reason);
        self.trail.push(literal);
    }

    /// Opens a fresh level with `literal` as the decision.
    pub fn assign_decision(&mut self, literal: Literal) {
        self.trail.push_decision(literal);
        self.assignment.set(literal, self.trail.level(), Reason::Decision);
        log::trace!(target: targets::DECISION, "Decided {literal} at {}", self.trail.level());
    }
}
