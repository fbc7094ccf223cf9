//! Phases of each variable.
//!
//! - The *saved* phase is the value a variable had when last unassigned, and is the phase of a decision on the variable.
//! - The *target* phase is the value a variable had in the largest consistent assignment since the last restart (or rephase).
//! - The *best* phase is the value a variable had in the largest consistent assignment since the last rephase.
//!
//! Rephasing overwrites the saved phases, e.g. with the best phases.

use crate::structures::{literal::Variable, value::Value};

#[derive(Default)]
pub struct Phases {
    pub saved: Vec<Value>,
    pub target: Vec<Value>,
    pub best: Vec<Value>,

    /// The size of the assignment of the target phases.
    pub target_assigned: usize,

    /// The size of the assignment of the best phases.
    pub best_assigned: usize,
}

impl Phases {
    /// Ensures `variables` variables have phases, with fresh phases unset.
    pub fn grow_to(&mut self, variables: usize) {
        if self.saved.len() < variables {
            self.saved.resize(variables, Value::Unassigned);
            self.target.resize(variables, Value::Unassigned);
            self.best.resize(variables, Value::Unassigned);
        }
    }

    /// The saved phase of `variable`, if set.
    pub fn saved_of(&self, variable: Variable) -> Option<bool> {
        self.saved[variable as usize].as_bool()
    }

    /// The target phase of `variable`, if set.
    pub fn target_of(&self, variable: Variable) -> Option<bool> {
        self.target[variable as usize].as_bool()
    }
}
