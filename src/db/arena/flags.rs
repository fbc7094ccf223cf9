//! Flags of a clause in the arena.
//!
//! Flags are stored in a single word of the header of a clause, though outside of the arena flags are always handled as a [ClauseFlags] value with a field for each flag.

/// The flags of a clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClauseFlags {
    /// The clause is entailed by the other clauses of the arena (e.g. learnt), and may be removed.
    pub redundant: bool,

    /// The clause is exempt from reduction.
    pub keep: bool,

    /// The clause is the reason for some assignment above level zero.
    ///
    /// Set only while reasons are pinned for a reduction or collection.
    pub reason: bool,

    /// Recency of use in conflict analysis, from 0 (unused) to 2.
    pub used: u8,

    /// The clause was shrunk in place, and is followed by padding.
    pub shrunken: bool,

    /// The clause is to be removed at the next collection.
    pub garbage: bool,

    /// The clause was derived through hyper resolution.
    pub hyper: bool,
}

const REDUNDANT: u32 = 1;
const KEEP: u32 = 1 << 1;
const REASON: u32 = 1 << 2;
const SHRUNKEN: u32 = 1 << 3;
const GARBAGE: u32 = 1 << 4;
const HYPER: u32 = 1 << 5;
const USED_SHIFT: u32 = 8;
const USED_MASK: u32 = 0b11 << USED_SHIFT;

/// The maximum `used` value.
pub const MAX_USED: u8 = 2;

impl ClauseFlags {
    /// The flags of a fresh clause.
    pub fn fresh(redundant: bool) -> Self {
        ClauseFlags {
            redundant,
            ..Default::default()
        }
    }

    /// The flags as a header word.
    pub fn to_word(self) -> u32 {
        let mut word = 0;
        if self.redundant {
            word |= REDUNDANT;
        }
        if self.keep {
            word |= KEEP;
        }
        if self.reason {
            word |= REASON;
        }
        if self.shrunken {
            word |= SHRUNKEN;
        }
        if self.garbage {
            word |= GARBAGE;
        }
        if self.hyper {
            word |= HYPER;
        }
        word | ((self.used.min(MAX_USED) as u32) << USED_SHIFT)
    }

    /// The flags of a header word.
    pub fn from_word(word: u32) -> Self {
        ClauseFlags {
            redundant: word & REDUNDANT != 0,
            keep: word & KEEP != 0,
            reason: word & REASON != 0,
            used: ((word & USED_MASK) >> USED_SHIFT) as u8,
            shrunken: word & SHRUNKEN != 0,
            garbage: word & GARBAGE != 0,
            hyper: word & HYPER != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let flags = ClauseFlags {
            redundant: true,
            used: 2,
            garbage: true,
            ..Default::default()
        };
        let recovered = ClauseFlags::from_word(flags.to_word());
        assert_eq!(flags, recovered);
        assert!(!recovered.keep && !recovered.reason && !recovered.shrunken && !recovered.hyper);
    }

    #[test]
    fn used_saturates() {
        let flags = ClauseFlags {
            used: 7,
            ..Default::default()
        };
        assert_eq!(ClauseFlags::from_word(flags.to_word()).used, MAX_USED);
    }
}
