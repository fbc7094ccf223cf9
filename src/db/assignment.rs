/*!
The assignment: the value of each literal, and the level and reason of each assigned variable.

Values are stored per literal, with the value of a literal and its negation updated together.
So, the value of any literal is a single lookup.

The record of a variable is only meaningful while the variable is assigned.
*/

use crate::{
    db::{arena::ClauseRef, LevelIndex},
    structures::{
        literal::{Literal, Variable},
        value::Value,
    },
};

/// Why a literal was assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reason {
    /// The literal was decided.
    #[default]
    Decision,

    /// The literal holds at level zero, and no reason is kept.
    Unit,

    /// The literal was forced by a binary clause of the literal and the literal given, which is false.
    Binary(Literal),

    /// The literal was forced by a clause in the arena, with the literal at position zero of the clause.
    Large(ClauseRef),
}

/// The record of an assigned variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assigned {
    /// The decision level at which the variable was assigned.
    pub level: LevelIndex,

    /// The reason for the assignment.
    pub reason: Reason,

    /// The variable is part of the current analysis.
    pub analyzed: bool,

    /// The literal of the variable is known to be implied by the learnt clause being minimized.
    pub removable: bool,

    /// The literal of the variable is known to not be implied by the learnt clause being minimized.
    pub poisoned: bool,
}

/// The assignment.
#[derive(Default)]
pub struct Assignment {
    values: Vec<Value>,
    assigned: Vec<Assigned>,
}

impl Assignment {
    /// Ensures `variables` variables are stored.
    pub fn grow_to(&mut self, variables: usize) {
        if self.assigned.len() < variables {
            self.values.resize(2 * variables, Value::Unassigned);
            self.assigned.resize(variables, Assigned::default());
        }
    }

    /// The count of variables.
    pub fn variables(&self) -> usize {
        self.assigned.len()
    }

    /// The value of `literal`.
    pub fn value(&self, literal: Literal) -> Value {
        self.values[literal.index()]
    }

    /// The value of `literal`, if assigned at level zero.
    pub fn fixed(&self, literal: Literal) -> Value {
        match self.values[literal.index()] {
            Value::Unassigned => Value::Unassigned,
            value => match self.assigned[literal.variable() as usize].level {
                0 => value,
                _ => Value::Unassigned,
            },
        }
    }

    /// Sets `literal` to true and records the level and reason of the assignment.
    ///
    /// Bookkeeping flags of the variable are cleared.
    pub fn set(&mut self, literal: Literal, level: LevelIndex, reason: Reason) {
        debug_assert_eq!(self.value(literal), Value::Unassigned);
        self.values[literal.index()] = Value::True;
        self.values[literal.negate().index()] = Value::False;
        self.assigned[literal.variable() as usize] = Assigned {
            level,
            reason,
            ..Default::default()
        };
    }

    /// Removes the value of `literal` (and its negation).
    pub fn unset(&mut self, literal: Literal) {
        self.values[literal.index()] = Value::Unassigned;
        self.values[literal.negate().index()] = Value::Unassigned;
    }

    /// The record of `variable`.
    pub fn assigned(&self, variable: Variable) -> &Assigned {
        &self.assigned[variable as usize]
    }

    /// The (mutable) record of `variable`.
    pub fn assigned_mut(&mut self, variable: Variable) -> &mut Assigned {
        &mut self.assigned[variable as usize]
    }

    /// The level of the variable of `literal`.
    pub fn level(&self, literal: Literal) -> LevelIndex {
        self.assigned[literal.variable() as usize].level
    }

    /// The reason of the variable of `literal`.
    pub fn reason(&self, literal: Literal) -> Reason {
        self.assigned[literal.variable() as usize].reason
    }
}
