//! Procedures to eliminate pure literals.
//!
//! A literal is pure if its negation occurs in no clause.
//! Every clause containing a pure literal can be satisfied by setting the literal true, without falsifying any other clause.
//! So, the variable of the literal is eliminated: each clause containing the literal is removed and pushed to the extension stack with the literal as witness.
//!
//! Elimination may make further literals pure, and so is repeated until no pure literal remains.
use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::{arena::ClauseRef, watches::BinaryClause},
    misc::log::targets::{self},
    procedures::collect::CollectMode,
    structures::literal::{Literal, Variable},
    types::err::ErrorKind,
};

/// Given an iterator over the literals of some clauses, returns the variables which occur only with negative polarity and the variables which occur only with positive polarity.
pub fn pure_literals(literals: impl Iterator<Item = Literal>) -> (Vec<Variable>, Vec<Variable>) {
    let mut the_true: BTreeSet<Variable> = BTreeSet::new();
    let mut the_false: BTreeSet<Variable> = BTreeSet::new();

    for literal in literals {
        match literal.polarity() {
            true => the_true.insert(literal.variable()),
            false => the_false.insert(literal.variable()),
        };
    }

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

/// Eliminates the variables of every pure literal with respect to all clauses, returning the count of variables eliminated.
///
/// Redundant clauses are considered when finding pure literals, though only irredundant clauses are kept for reconstruction.
pub fn eliminate_pure<R: rand::Rng + std::default::Default>(
    context: &mut GenericContext<R>,
) -> Result<usize, ErrorKind> {
    let arena = &context.arena;
    let occurrences = arena
        .references()
        .filter_map(|cref| arena.clause(cref).ok())
        .filter(|view| !view.flags().garbage)
        .flat_map(|view| view.literals().iter().copied())
        .chain(context.watches.binaries().flat_map(|binary| [binary.a, binary.b]));
    let (f, t) = pure_literals(occurrences);

    let pure: Vec<Literal> = f
        .into_iter()
        .map(|variable| Literal::new(variable, false))
        .chain(t.into_iter().map(|variable| Literal::new(variable, true)))
        .filter(|literal| {
            !context.assignment.value(*literal).is_assigned()
                && !context.imports.is_eliminated(literal.variable())
        })
        .collect();

    if pure.is_empty() {
        return Ok(0);
    }

    for literal in &pure {
        context.marks[literal.index()] = true;
    }

    let clauses: Vec<ClauseRef> = context.arena.references().collect();
    for cref in clauses {
        let view = context.arena.clause(cref)?;
        let flags = view.flags();
        if flags.garbage {
            continue;
        }
        let literals = view.literals();
        if let Some(witness) = literals.iter().find(|l| context.marks[l.index()]).copied() {
            if !flags.redundant {
                context.extension.push(witness, literals.to_vec());
            }
            context.arena.mark_garbage(cref)?;
        }
    }

    let binaries: Vec<BinaryClause> = context
        .watches
        .binaries()
        .filter(|binary| context.marks[binary.a.index()] || context.marks[binary.b.index()])
        .collect();
    for binary in binaries {
        let witness = match context.marks[binary.a.index()] {
            true => binary.a,
            false => binary.b,
        };
        if !binary.redundant {
            context.extension.push(witness, vec![binary.a, binary.b]);
        }
        context.watches.remove_binary(binary.a, binary.b);
    }

    for literal in &pure {
        context.marks[literal.index()] = false;
        let variable = literal.variable();
        context.imports.eliminate(variable);
        context.orders.deactivate(variable);
        context.active -= 1;
        context.counters.eliminated += 1;
        log::trace!(target: targets::PREPROCESSING, "Eliminated {literal}");
    }

    context.collect(0, CollectMode::Dense)?;
    Ok(pure.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_split() {
        let p = Literal::new(0, true);
        let q = Literal::new(1, true);
        let r = Literal::new(2, false);

        let (f, t) = pure_literals([p, -q, q, r, p].into_iter());
        assert_eq!(f, vec![2]);
        assert_eq!(t, vec![0]);
    }
}
