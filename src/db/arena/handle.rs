//! References to clauses in the arena.

/// A reference to a clause in the [arena](super::Arena).
///
/// A reference is the offset of the header of the clause, tagged with the epoch of the arena when the reference was made.
/// The arena moves to a new epoch on each compaction, and so a reference from before a compaction is detected on use rather than read as whatever clause now occupies the offset.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseRef {
    offset: u32,
    epoch: u32,
}

impl ClauseRef {
    pub(super) fn new(offset: u32, epoch: u32) -> Self {
        ClauseRef { offset, epoch }
    }

    /// The offset of the clause in the arena.
    pub fn offset(self) -> usize {
        self.offset as usize
    }

    /// The epoch of the arena when the reference was made.
    pub fn epoch(self) -> u32 {
        self.epoch
    }
}

impl std::fmt::Display for ClauseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}#{}", self.offset, self.epoch)
    }
}

impl std::fmt::Debug for ClauseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
