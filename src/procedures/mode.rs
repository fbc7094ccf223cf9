/*!
Switches between the focused and stable search modes.

# Overview

The [configured](crate::config::mode) mode fixes the mode of a solve, or has the context switch between modes.
When switching, the first switch takes place after `mode_init` conflicts, and the `n`th switch after a further `mode_init * n²` conflicts.

On a switch the context backtracks to level zero, and the [decision order](crate::decision) of the new mode is reconciled with the unassigned variables.
A switch to the stable mode starts a fresh schedule of restarts, while a switch to the focused mode allows an immediate restart.
*/

use crate::{
    config::mode::SearchMode,
    context::GenericContext,
    generic::luby::Reluctant,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// True if a switch of mode is due.
    pub fn switching(&self) -> bool {
        self.config.mode.mode.value == SearchMode::Switching
            && self.counters.conflicts >= self.limits.mode
    }

    /// Switches from the current mode to the other mode.
    pub fn switch_mode(&mut self) {
        let stable = !self.orders.is_stable();
        self.counters.mode_switches += 1;

        self.backtrack(0);
        self.enter_mode(stable);

        let switches = self.counters.mode_switches + 1;
        self.limits.mode = self.counters.conflicts + self.config.mode.mode_init.value * switches * switches;

        log::info!(target: targets::MODE, "Switch {} to {} mode", self.counters.mode_switches, if stable { "stable" } else { "focused" });
    }

    /// Enters the stable mode, if `stable`, and otherwise the focused mode.
    ///
    /// Requires decision level zero.
    pub fn enter_mode(&mut self, stable: bool) {
        let unassigned = self.unassigned_variables();
        self.orders.switch(stable, unassigned);

        match stable {
            true => {
                self.reluctant = Reluctant::new(
                    self.config.restart.reluctant_period.value,
                    self.config.restart.reluctant_max.value,
                );
            }
            false => self.limits.restart = self.counters.conflicts,
        }
        self.phases.target_assigned = 0;
    }
}
