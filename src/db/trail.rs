/*!
The trail: assigned literals, in order of assignment, partitioned into decision levels.

Each decision level has a [Frame], which notes the decision of the level and the position on the trail at which the level begins.
Level zero is the root, and has no decision.

Propagation reads the trail from a note of the first literal not yet propagated.
On backtracking to level `l` the trail is truncated to the position at which level `l + 1` began, and the note moves back to that position if ahead of it.
*/

use crate::{db::LevelIndex, structures::literal::Literal};

/// The decision of a level, and where the level begins on the trail.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub decision: Literal,
    pub trail: usize,
}

/// The trail.
pub struct Trail {
    literals: Vec<Literal>,
    frames: Vec<Frame>,
    propagated: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            literals: Vec::default(),
            frames: vec![Frame {
                decision: Literal::INVALID,
                trail: 0,
            }],
            propagated: 0,
        }
    }
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        (self.frames.len() - 1) as LevelIndex
    }

    /// The frame of `level`.
    pub fn frame(&self, level: LevelIndex) -> &Frame {
        &self.frames[level as usize]
    }

    /// Pushes a literal assigned on the current level.
    pub fn push(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Opens a new level with `decision`, which is pushed to the trail.
    pub fn push_decision(&mut self, decision: Literal) {
        self.frames.push(Frame {
            decision,
            trail: self.literals.len(),
        });
        self.literals.push(decision);
    }

    /// The assigned literals, in order of assignment.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The count of assigned literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The position on the trail at which `level` begins, or the end of the trail if `level` is above the current level.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match self.frames.get(level as usize) {
            Some(frame) => frame.trail,
            None => self.literals.len(),
        }
    }

    /// The next literal to propagate, if any, noted as propagated.
    pub fn next_to_propagate(&mut self) -> Option<Literal> {
        let literal = self.literals.get(self.propagated).copied()?;
        self.propagated += 1;
        Some(literal)
    }

    /// True if every literal on the trail has been propagated.
    pub fn fully_propagated(&self) -> bool {
        self.propagated == self.literals.len()
    }

    /// The count of literals propagated.
    pub fn propagated(&self) -> usize {
        self.propagated
    }

    /// Marks every literal on the trail as propagated.
    pub fn mark_propagated(&mut self) {
        self.propagated = self.literals.len();
    }

    /// Truncates the trail to `level`, removing the frames above `level`.
    ///
    /// Unassignment of the removed literals is left to the caller, which should read the literals from [level_start](Trail::level_start) before truncating.
    pub fn truncate_to_level(&mut self, level: LevelIndex) {
        let start = self.level_start(level + 1);
        self.frames.truncate(level as usize + 1);
        self.literals.truncate(start);
        self.propagated = self.propagated.min(start);
    }
}
