/*!
Databases for holding information relevant to a solve.

- [The clause arena](crate::db::arena), holding every clause of three or more literals.
- [Watch lists](crate::db::watches), holding every binary clause, and watches on clauses in the arena.
- [The assignment](crate::db::assignment), holding the value, level, and reason of each variable.
- [The trail](crate::db::trail), holding the assigned literals in order of assignment, partitioned into levels.
- [Phases](crate::db::phases), holding saved, target, and best phases of each variable.
- [The import map](crate::db::import), between external and internal variables.
- [The extension stack](crate::db::extension), holding clauses removed with eliminated variables.
- [The clueue](crate::db::clueue), holding recently learnt clauses for eager subsumption.

# Clause keys

A clause is identified by a [ClauseKey], which distinguishes binary clauses (kept only as a pair of watches) from clauses in the arena.
*/

pub mod arena;
pub mod assignment;
pub mod clueue;
pub mod extension;
pub mod import;
pub mod phases;
pub mod trail;
pub mod watches;

use crate::structures::literal::Literal;
use arena::ClauseRef;

/// A decision level.
pub type LevelIndex = u32;

/// A key to a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKey {
    /// A binary clause, given by its two literals.
    Binary(Literal, Literal),

    /// A clause in the arena.
    Large(ClauseRef),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(a, b) => write!(f, "({a} {b})"),
            Self::Large(cref) => write!(f, "{cref}"),
        }
    }
}
