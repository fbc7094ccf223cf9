/*!
An arena of large clauses.

Clauses with three or more literals are stored as variable-length records in a single growable vector of words.
Each record is a header of [HEADER_WORDS] words followed by the literals of the clause:

```none
| size | glue | flags | searched | literal_0 | literal_1 | … | literal_{size-1} |
```

- `size` is the count of literals.
- `glue` is the count of distinct decision levels of the literals when the clause was learnt (or imported).
- `flags` is a [ClauseFlags] value, as a word.
- `searched` is the position from which propagation resumes the search for a replacement watch.

Binary clauses are *not* stored in the arena.
Instead, each binary clause is a pair of [watches](crate::db::watches), and so any procedure which visits all clauses traverses both the arena and the binary watches.

# References

Clauses are accessed through [references](ClauseRef): an offset paired with the epoch of the arena.
The epoch advances on each [sweep](Arena::sweep), which compacts the arena, and any use of a reference from a previous epoch fails with [ArenaError::StaleReference].
A sweep returns a [Relocation] through which references to clauses before the start of the sweep, which do not move, may be carried over to the new epoch.

# Shrinking

A clause may [shrink](Arena::shrink) in place.
The freed words are overwritten with [Literal::INVALID], which is never a valid size, and so walks over the arena skip padding until the header of the next clause.

# Example

```rust
# use portfolio_sat::db::arena::{Arena, Sweep};
# use portfolio_sat::structures::literal::Literal;
let mut arena = Arena::default();
let clause: Vec<Literal> = (0..4).map(|v| Literal::new(v, true)).collect();

let a = arena.allocate(&clause, false, 0).unwrap();
let b = arena.allocate(&clause, true, 2).unwrap();

assert!(arena.mark_garbage(a).unwrap());

let relocation = arena.sweep(0, |_, _, view| match view.flags().garbage {
    true => Sweep::Drop,
    false => Sweep::Keep(view.size()),
});

assert!(arena.clause(b).is_err());
let b = arena.references().next().unwrap();
assert_eq!(arena.clause(b).unwrap().glue(), 2);
assert_eq!(relocation.retag(b), None);
```
*/

mod flags;
pub use flags::{ClauseFlags, MAX_USED};

mod handle;
pub use handle::ClauseRef;

use crate::{config::Glue, structures::literal::Literal, types::err::ArenaError};

/// The count of words in the header of a clause.
pub const HEADER_WORDS: usize = 4;

const SIZE: usize = 0;
const GLUE: usize = 1;
const FLAGS: usize = 2;
const SEARCHED: usize = 3;

const PADDING: u32 = u32::MAX;

/// The arena.
#[derive(Default)]
pub struct Arena {
    words: Vec<u32>,

    /// The current epoch, tagged to each reference made.
    epoch: u32,

    /// A count of words occupied by garbage clauses or padding.
    garbage: usize,
}

/// A view of a clause in the arena.
pub struct ClauseView<'a> {
    header: &'a [u32],
    literals: &'a [Literal],
}

/// A mutable view of a clause in the arena.
pub struct ClauseViewMut<'a> {
    header: &'a mut [u32],
    literals: &'a mut [Literal],
}

/// The outcome for a clause visited during a [sweep](Arena::sweep).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Keep the clause with its first `n` literals.
    Keep(usize),

    /// Remove the clause from the arena.
    Drop,
}

/// A note of the epochs before and after a sweep.
#[derive(Clone, Copy, Debug)]
pub struct Relocation {
    start: usize,
    old_epoch: u32,
    new_epoch: u32,
}

fn as_literals(words: &[u32]) -> &[Literal] {
    // SAFETY: Literal is repr(transparent) over u32.
    unsafe { std::slice::from_raw_parts(words.as_ptr().cast::<Literal>(), words.len()) }
}

fn as_literals_mut(words: &mut [u32]) -> &mut [Literal] {
    // SAFETY: Literal is repr(transparent) over u32, and the borrow of words is exclusive.
    unsafe { std::slice::from_raw_parts_mut(words.as_mut_ptr().cast::<Literal>(), words.len()) }
}

impl Arena {
    /// Stores a clause, and returns a reference to the clause.
    ///
    /// The clause must contain at least three literals.
    pub fn allocate(
        &mut self,
        literals: &[Literal],
        redundant: bool,
        glue: Glue,
    ) -> Result<ClauseRef, ArenaError> {
        if literals.len() < 3 {
            return Err(ArenaError::TooShort);
        }
        let offset = self.words.len();
        if offset + HEADER_WORDS + literals.len() >= PADDING as usize {
            return Err(ArenaError::Exhausted);
        }

        self.words.push(literals.len() as u32);
        self.words.push(glue);
        self.words.push(ClauseFlags::fresh(redundant).to_word());
        self.words.push(2);
        self.words.extend(literals.iter().map(|literal| literal.code()));

        let cref = ClauseRef::new(offset as u32, self.epoch);
        log::trace!(target: crate::misc::log::targets::ARENA, "Allocated {cref} of size {}", literals.len());
        Ok(cref)
    }

    /// The bounds of the clause referenced, if the reference is current.
    fn bounds(&self, cref: ClauseRef) -> Result<(usize, usize), ArenaError> {
        if cref.epoch() != self.epoch {
            log::error!(target: crate::misc::log::targets::ARENA, "Stale reference {cref} in epoch {}", self.epoch);
            return Err(ArenaError::StaleReference);
        }
        let offset = cref.offset();
        match self.words.get(offset + SIZE) {
            Some(&size) if size != PADDING && offset + HEADER_WORDS + size as usize <= self.words.len() => {
                Ok((offset, offset + HEADER_WORDS + size as usize))
            }
            _ => Err(ArenaError::InvalidReference),
        }
    }

    /// A view of the clause referenced.
    pub fn clause(&self, cref: ClauseRef) -> Result<ClauseView<'_>, ArenaError> {
        let (from, to) = self.bounds(cref)?;
        let (header, literals) = self.words[from..to].split_at(HEADER_WORDS);
        Ok(ClauseView {
            header,
            literals: as_literals(literals),
        })
    }

    /// A mutable view of the clause referenced.
    pub fn clause_mut(&mut self, cref: ClauseRef) -> Result<ClauseViewMut<'_>, ArenaError> {
        let (from, to) = self.bounds(cref)?;
        let (header, literals) = self.words[from..to].split_at_mut(HEADER_WORDS);
        Ok(ClauseViewMut {
            header,
            literals: as_literals_mut(literals),
        })
    }

    /// Marks the clause referenced as garbage.
    /// Returns true if the clause was not already garbage.
    pub fn mark_garbage(&mut self, cref: ClauseRef) -> Result<bool, ArenaError> {
        let mut view = self.clause_mut(cref)?;
        let mut flags = view.flags();
        if flags.garbage {
            return Ok(false);
        }
        flags.garbage = true;
        view.set_flags(flags);
        let words = HEADER_WORDS + view.size();
        self.garbage += words;
        Ok(true)
    }

    /// Shrinks the clause referenced to its first `size` literals, padding the freed words.
    pub fn shrink(&mut self, cref: ClauseRef, size: usize) -> Result<(), ArenaError> {
        let (from, to) = self.bounds(cref)?;
        let old_size = to - from - HEADER_WORDS;
        if size < 3 {
            return Err(ArenaError::TooShort);
        }
        if size >= old_size {
            return Ok(());
        }

        for word in &mut self.words[from + HEADER_WORDS + size..to] {
            *word = PADDING;
        }
        self.words[from + SIZE] = size as u32;
        if self.words[from + SEARCHED] as usize >= size {
            self.words[from + SEARCHED] = 2;
        }
        let mut flags = ClauseFlags::from_word(self.words[from + FLAGS]);
        flags.shrunken = true;
        self.words[from + FLAGS] = flags.to_word();
        self.garbage += old_size - size;
        Ok(())
    }

    /// An iterator over references to every clause in the arena, garbage included, in the order of storage.
    pub fn references(&self) -> References<'_> {
        self.references_from(0)
    }

    /// An iterator over references to every clause in the arena at or after `start`.
    pub fn references_from(&self, start: usize) -> References<'_> {
        References {
            arena: self,
            position: start,
        }
    }

    /// Compacts the arena from `start`, keeping, shrinking, or dropping each clause as `decide` instructs.
    ///
    /// `decide` is given the current reference to a clause, the reference the clause will have if kept, and a mutable view of the clause.
    /// To shrink a clause, the literals to keep should be moved to the front of the clause and [Sweep::Keep] returned with the count of literals to keep.
    ///
    /// On completion the arena moves to a new epoch, and every reference to a clause at or after `start` is stale.
    /// References to clauses before `start` may be carried over with the returned [Relocation].
    pub fn sweep(
        &mut self,
        start: usize,
        mut decide: impl FnMut(ClauseRef, ClauseRef, &mut ClauseViewMut<'_>) -> Sweep,
    ) -> Relocation {
        let old_epoch = self.epoch;
        let new_epoch = old_epoch.wrapping_add(1);

        let start = start.min(self.words.len());
        let mut source = start;
        let mut destination = start;

        while source < self.words.len() {
            if self.words[source] == PADDING {
                source += 1;
                continue;
            }
            let size = self.words[source + SIZE] as usize;
            let end = source + HEADER_WORDS + size;

            let verdict = {
                let old = ClauseRef::new(source as u32, old_epoch);
                let new = ClauseRef::new(destination as u32, new_epoch);
                let (header, literals) = self.words[source..end].split_at_mut(HEADER_WORDS);
                let mut view = ClauseViewMut {
                    header,
                    literals: as_literals_mut(literals),
                };
                decide(old, new, &mut view)
            };

            if let Sweep::Keep(kept) = verdict {
                debug_assert!((3..=size).contains(&kept));
                let kept = kept.clamp(3, size);
                self.words[source + SIZE] = kept as u32;
                if self.words[source + SEARCHED] as usize >= kept {
                    self.words[source + SEARCHED] = 2;
                }
                let mut flags = ClauseFlags::from_word(self.words[source + FLAGS]);
                flags.shrunken = false;
                self.words[source + FLAGS] = flags.to_word();

                self.words.copy_within(source..source + HEADER_WORDS + kept, destination);
                destination += HEADER_WORDS + kept;
            }
            source = end;
        }

        log::debug!(target: crate::misc::log::targets::ARENA, "Swept from {start}, {} words to {destination}", self.words.len());
        self.words.truncate(destination);
        self.epoch = new_epoch;
        self.garbage = self.count_garbage();

        Relocation {
            start,
            old_epoch,
            new_epoch,
        }
    }

    fn count_garbage(&self) -> usize {
        let mut count = 0;
        let mut position = 0;
        while position < self.words.len() {
            if self.words[position] == PADDING {
                count += 1;
                position += 1;
                continue;
            }
            let size = self.words[position + SIZE] as usize;
            if ClauseFlags::from_word(self.words[position + FLAGS]).garbage {
                count += HEADER_WORDS + size;
            }
            position += HEADER_WORDS + size;
        }
        count
    }

    /// The current epoch.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The count of words in use.
    pub fn words(&self) -> usize {
        self.words.len()
    }

    /// The count of words occupied by garbage clauses or padding.
    pub fn garbage_words(&self) -> usize {
        self.garbage
    }

    /// True if no clause is stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An iterator over references to clauses in the arena.
pub struct References<'a> {
    arena: &'a Arena,
    position: usize,
}

impl Iterator for References<'_> {
    type Item = ClauseRef;

    fn next(&mut self) -> Option<Self::Item> {
        let words = &self.arena.words;
        while self.position < words.len() && words[self.position] == PADDING {
            self.position += 1;
        }
        if self.position >= words.len() {
            return None;
        }
        let cref = ClauseRef::new(self.position as u32, self.arena.epoch);
        self.position += HEADER_WORDS + words[self.position + SIZE] as usize;
        Some(cref)
    }
}

impl Relocation {
    /// The reference in the new epoch for a reference to a clause before the start of the sweep.
    ///
    /// None, if the reference is from some other epoch or to a clause which may have moved.
    pub fn retag(&self, cref: ClauseRef) -> Option<ClauseRef> {
        if cref.epoch() == self.old_epoch && cref.offset() < self.start {
            Some(ClauseRef::new(cref.offset() as u32, self.new_epoch))
        } else {
            None
        }
    }

    /// The offset from which the sweep took place.
    pub fn start(&self) -> usize {
        self.start
    }
}

impl<'a> ClauseView<'a> {
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn glue(&self) -> Glue {
        self.header[GLUE]
    }

    pub fn flags(&self) -> ClauseFlags {
        ClauseFlags::from_word(self.header[FLAGS])
    }

    pub fn searched(&self) -> usize {
        self.header[SEARCHED] as usize
    }

    /// The literals of the clause, borrowed from the arena.
    pub fn literals(&self) -> &'a [Literal] {
        self.literals
    }
}

impl ClauseViewMut<'_> {
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn glue(&self) -> Glue {
        self.header[GLUE]
    }

    pub fn set_glue(&mut self, glue: Glue) {
        self.header[GLUE] = glue;
    }

    pub fn flags(&self) -> ClauseFlags {
        ClauseFlags::from_word(self.header[FLAGS])
    }

    pub fn set_flags(&mut self, flags: ClauseFlags) {
        self.header[FLAGS] = flags.to_word();
    }

    /// Applies `f` to the flags of the clause.
    pub fn update_flags(&mut self, f: impl FnOnce(&mut ClauseFlags)) {
        let mut flags = self.flags();
        f(&mut flags);
        self.set_flags(flags);
    }

    pub fn searched(&self) -> usize {
        self.header[SEARCHED] as usize
    }

    pub fn set_searched(&mut self, position: usize) {
        self.header[SEARCHED] = position as u32;
    }

    pub fn literals(&self) -> &[Literal] {
        &*self.literals
    }

    pub fn literals_mut(&mut self) -> &mut [Literal] {
        &mut *self.literals
    }
}
