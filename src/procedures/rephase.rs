/*!
Rephasing, i.e. a reset of saved phases.

# Overview

At intervals (growing arithmetically) the saved phase of every variable is overwritten, cycling through:

| | Phases |
|-|-|
| Best | The best phases, i.e. the phases of the largest consistent assignment since the last rephase. |
| Original | The initial phase. |
| Best | … |
| Inverted | The negation of the initial phase. |
| Best | … |
| Random | A random phase for each variable. |

After a rephase the best and target phases are reset.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::value::Value,
};

/// The kinds of rephase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rephase {
    Best,
    Original,
    Inverted,
    Random,
}

/// The cycle of rephases.
pub const REPHASE_CYCLE: [Rephase; 6] = [
    Rephase::Best,
    Rephase::Original,
    Rephase::Best,
    Rephase::Inverted,
    Rephase::Best,
    Rephase::Random,
];

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// True if a rephase is due.
    pub fn rephasing(&self) -> bool {
        self.config.phase.rephase.value && self.counters.conflicts >= self.limits.rephase
    }

    /// Rephases, returning the kind of rephase made.
    pub fn rephase(&mut self) -> Rephase {
        let kind = REPHASE_CYCLE[(self.counters.rephases % REPHASE_CYCLE.len() as u64) as usize];
        self.counters.rephases += 1;

        let initial = self.config.phase.initial.value;
        match kind {
            Rephase::Best => {
                for (saved, best) in self.phases.saved.iter_mut().zip(&self.phases.best) {
                    if best.is_assigned() {
                        *saved = *best;
                    }
                }
            }
            Rephase::Original => self.phases.saved.fill(Value::from_bool(initial)),
            Rephase::Inverted => self.phases.saved.fill(Value::from_bool(!initial)),
            Rephase::Random => {
                for saved in self.phases.saved.iter_mut() {
                    *saved = Value::from_bool(self.rng.random_bool(0.5));
                }
            }
        }

        self.phases.best_assigned = 0;
        self.phases.target_assigned = 0;

        let delta = self.config.phase.rephase_interval.value * self.counters.rephases;
        self.limits.rephase = self.counters.conflicts + delta;

        log::debug!(target: targets::REPHASE, "Rephase {} ({kind:?})", self.counters.rephases);
        kind
    }
}
