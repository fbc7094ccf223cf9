//! Variables ordered by score, for the stable mode.
//!
//! Scores are either VSIDS or CHB scores, as [configured](crate::config::stable).
//!
//! For VSIDS, rather than decaying every score on each conflict, the bump increment grows by the reciprocal of the decay.
//! Once some score exceeds a limit all scores and the increment are scaled down together, preserving the order.

use crate::{
    config::{
        stable::{StableConfig, StableHeuristic},
        Activity,
    },
    db::assignment::Assignment,
    generic::index_heap::IndexHeap,
    structures::{
        literal::{Literal, Variable},
        value::Value,
    },
};

use super::DecisionOrder;

const RESCALE_LIMIT: Activity = 1e150;

pub struct ScoreHeap {
    heap: IndexHeap<Activity>,
    heuristic: StableHeuristic,

    /// The VSIDS increment.
    increment: Activity,
    decay: Activity,

    /// The CHB step size.
    step: Activity,
    step_decay: Activity,
    step_min: Activity,

    /// The most recent conflict each variable was involved in, for CHB.
    last_conflict: Vec<u64>,
}

impl ScoreHeap {
    pub fn new(config: &StableConfig) -> Self {
        ScoreHeap {
            heap: IndexHeap::default(),
            heuristic: config.heuristic.value,
            increment: 1.0,
            decay: config.vsids_decay.value,
            step: config.chb_step.value,
            step_decay: config.chb_step_decay.value,
            step_min: config.chb_step_min.value,
            last_conflict: Vec::default(),
        }
    }

    /// The score of `variable`.
    pub fn score(&self, variable: Variable) -> Activity {
        self.heap.value_at(variable as usize)
    }

    fn bump_vsids(&mut self, variable: Variable) {
        let index = variable as usize;
        let score = self.heap.value_at(index) + self.increment;
        self.heap.set_value(index, score);
        if score > RESCALE_LIMIT {
            let factor = 1.0 / RESCALE_LIMIT;
            self.heap.apply_to_all(|score| score * factor);
            self.increment *= factor;
        }
    }

    fn bump_chb(&mut self, variable: Variable, conflicts: u64) {
        let index = variable as usize;
        let age = conflicts.saturating_sub(self.last_conflict[index]) + 1;
        let reward = 1.0 / age as Activity;
        let score = (1.0 - self.step) * self.heap.value_at(index) + self.step * reward;
        self.heap.set_value(index, score);
        self.last_conflict[index] = conflicts;
    }
}

impl DecisionOrder for ScoreHeap {
    fn grow_to(&mut self, variables: usize) {
        let previous = self.heap.count();
        self.heap.grow_to(variables);
        self.last_conflict.resize(variables.max(self.last_conflict.len()), 0);
        for variable in previous..variables {
            self.heap.push(variable);
        }
    }

    fn reinsert(&mut self, variable: Variable) {
        self.heap.push(variable as usize);
    }

    fn next_unassigned(&mut self, assignment: &Assignment) -> Option<Variable> {
        while let Some(index) = self.heap.peek_max() {
            let variable = index as Variable;
            let literal = Literal::new(variable, true);
            if assignment.value(literal) == Value::Unassigned {
                return Some(variable);
            }
            self.heap.pop_max();
        }
        None
    }

    fn bump(&mut self, variables: &mut [Variable], _assignment: &Assignment, conflicts: u64) {
        match self.heuristic {
            StableHeuristic::VSIDS => {
                for variable in variables.iter() {
                    self.bump_vsids(*variable);
                }
                self.increment /= self.decay;
            }

            StableHeuristic::CHB => {
                for variable in variables.iter() {
                    self.bump_chb(*variable, conflicts);
                }
                self.step = (self.step - self.step_decay).max(self.step_min);
            }
        }
    }

    fn reconcile(&mut self, unassigned: &mut dyn Iterator<Item = Variable>) {
        for variable in unassigned {
            self.heap.push(variable as usize);
        }
    }

    fn deactivate(&mut self, variable: Variable) {
        self.heap.remove(variable as usize);
    }

    fn represents(&self, variable: Variable) -> bool {
        self.heap.contains(variable as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db::assignment::Reason};

    #[test]
    fn vsids_prefers_bumped() {
        let mut config = Config::default();
        config.stable.heuristic.value = StableHeuristic::VSIDS;
        let mut heap = ScoreHeap::new(&config.stable);
        let mut assignment = Assignment::default();
        assignment.grow_to(4);
        heap.grow_to(4);

        heap.bump(&mut [2], &assignment, 1);
        heap.bump(&mut [1], &assignment, 2);
        // The later bump is larger.
        assert!(heap.score(1) > heap.score(2));
        assert_eq!(heap.next_unassigned(&assignment), Some(1));
    }

    #[test]
    fn chb_rewards_recent() {
        let mut config = Config::default();
        config.stable.heuristic.value = StableHeuristic::CHB;
        let mut heap = ScoreHeap::new(&config.stable);
        let mut assignment = Assignment::default();
        assignment.grow_to(3);
        heap.grow_to(3);

        heap.bump(&mut [0, 1], &assignment, 1);
        heap.bump(&mut [1], &assignment, 2);
        assert!(heap.score(1) > heap.score(0));
        assert!(heap.score(0) > heap.score(2));
    }

    #[test]
    fn skips_assigned() {
        let config = Config::default();
        let mut heap = ScoreHeap::new(&config.stable);
        let mut assignment = Assignment::default();
        assignment.grow_to(2);
        heap.grow_to(2);
        heap.bump(&mut [0], &assignment, 1);

        assignment.set(Literal::new(0, false), 1, Reason::Decision);
        assert_eq!(heap.next_unassigned(&assignment), Some(1));
        assert!(!heap.represents(0));

        heap.reinsert(0);
        assert!(heap.represents(0));
    }
}
