/*!
Restarts, i.e. backtracks to level zero.

# Overview

The schedule of restarts depends on the search mode:

- In the focused mode a restart is made when the short term average of the glue of learnt clauses exceeds the long term average by some margin, and at least some count of conflicts have passed since the last restart.
- In the stable mode restarts follow a [reluctant doubling](crate::generic::luby::Reluctant) schedule, i.e. the luby sequence scaled by some period.

Decisions made before a restart are not lost entirely, as phases are saved on backtracking.

# Literature

See [Refining Restarts Strategies for SAT and UNSAT](https://doi.org/10.1007/978-3-642-33558-7_11) for glue based restarts, and [Optimal speedup of Las Vegas algorithms](https://doi.org/10.1016/0020-0190(93)90029-9) for the luby sequence.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// True if a restart is due.
    pub fn restarting(&self) -> bool {
        if !self.config.restart.restart.value || self.trail.level() == 0 {
            return false;
        }
        match self.orders.is_stable() {
            true => self.reluctant.triggered(),
            false => {
                let margin = self.config.restart.margin.value;
                self.counters.conflicts >= self.limits.restart
                    && self.averages.fast_glue.value() > margin * self.averages.slow_glue.value()
            }
        }
    }

    /// Restarts.
    pub fn restart(&mut self) {
        self.counters.restarts += 1;
        log::debug!(target: targets::RESTART, "Restart {} at level {}", self.counters.restarts, self.trail.level());

        self.backtrack(0);

        match self.orders.is_stable() {
            true => {
                self.reluctant.take_trigger();
                self.phases.target_assigned = 0;
            }
            false => {
                self.limits.restart = self.counters.conflicts + self.config.restart.interval.value;
            }
        }
    }
}
