/*!
The extension stack, from which values of eliminated variables are reconstructed.

When a variable is eliminated every clause containing the variable is removed from the formula, and each removed clause is pushed to the stack together with a *witness* literal from the clause.
Any assignment to the remaining formula extends to an assignment to the original formula by walking the stack from the most recent entry, and setting the witness of each clause not satisfied to true.

For example, if a variable is eliminated as a pure literal each clause removed has the pure literal as its witness.
*/

use crate::structures::{literal::Literal, value::Value};

/// A removed clause, with a witness.
#[derive(Clone, Debug)]
pub struct Witnessed {
    pub witness: Literal,
    pub clause: Vec<Literal>,
}

/// The extension stack.
#[derive(Default)]
pub struct ExtensionStack {
    entries: Vec<Witnessed>,
}

impl ExtensionStack {
    /// Pushes `clause` with `witness`, which must be a literal of the clause.
    pub fn push(&mut self, witness: Literal, clause: Vec<Literal>) {
        debug_assert!(clause.contains(&witness));
        self.entries.push(Witnessed { witness, clause });
    }

    /// Extends an assignment, indexed by literal, to satisfy every removed clause.
    pub fn extend(&self, values: &mut [Value]) {
        for entry in self.entries.iter().rev() {
            let satisfied = entry
                .clause
                .iter()
                .any(|literal| values[literal.index()] == Value::True);
            if !satisfied {
                values[entry.witness.index()] = Value::True;
                values[entry.witness.negate().index()] = Value::False;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn witnesses_flip_in_reverse() {
        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        let mut stack = ExtensionStack::default();
        stack.push(p, vec![p, q]);
        stack.push(-q, vec![-q, -p]);

        let mut values = vec![Value::False, Value::True, Value::False, Value::True];
        // p false, q false
        stack.extend(&mut values);

        // (-q -p) is satisfied by -q, and (p q) flips p.
        assert_eq!(values[p.index()], Value::True);
        assert_eq!(values[q.index()], Value::False);
    }
}
