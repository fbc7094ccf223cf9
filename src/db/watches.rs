/*!
Watch lists, one for each literal.

A watch on a literal is a note that the literal is watched by some clause, to be inspected when the literal becomes false.

- A binary clause `(a b)` is stored *only* as a pair of [Watch::Binary] watches: one in the list of `a` with `b` as the other literal, and one in the list of `b` with `a` as the other literal.
- A clause in the arena is watched by its first two literals, each with a [Watch::Large] watch which holds a *blocking* literal of the clause.
  If the blocking literal is true the clause is satisfied, and propagation skips the clause without reading it from the arena.

# Example

```rust
# use portfolio_sat::db::watches::{Watch, Watches};
# use portfolio_sat::structures::literal::Literal;
let p = Literal::new(0, true);
let q = Literal::new(1, false);

let mut watches = Watches::default();
watches.grow_to(4);
watches.watch_binary(p, q, false, false);

assert_eq!(watches.of(p), &[Watch::Binary { other: q, redundant: false, hyper: false }]);
assert_eq!(watches.binaries().count(), 1);
assert!(watches.remove_binary(q, p));
assert!(watches.of(p).is_empty());
```
*/

use crate::{db::arena::ClauseRef, structures::literal::Literal};

/// A watch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    /// A binary clause of the watched literal and `other`.
    Binary {
        other: Literal,

        /// The clause was learnt or imported.
        redundant: bool,

        /// The clause was derived by hyper binary resolution.
        hyper: bool,
    },

    /// A clause in the arena.
    Large {
        /// Some other literal of the clause.
        blocking: Literal,
        clause: ClauseRef,
    },
}

/// A binary clause, as read from the watch lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryClause {
    pub a: Literal,
    pub b: Literal,
    pub redundant: bool,
    pub hyper: bool,
}

/// The watch lists.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watch>>,
}

impl Watches {
    /// Ensures there is a list for `literals` literals.
    pub fn grow_to(&mut self, literals: usize) {
        if self.lists.len() < literals {
            self.lists.resize_with(literals, Vec::default);
        }
    }

    /// The watches on `literal`.
    pub fn of(&self, literal: Literal) -> &[Watch] {
        &self.lists[literal.index()]
    }

    /// The (mutable) list of watches on `literal`.
    pub fn of_mut(&mut self, literal: Literal) -> &mut Vec<Watch> {
        &mut self.lists[literal.index()]
    }

    /// Takes the list of watches on `literal`, leaving an empty list.
    ///
    /// The list should be [restored](Watches::restore) once done with.
    pub fn take(&mut self, literal: Literal) -> Vec<Watch> {
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores a taken list of watches, keeping any watches added to `literal` since the list was taken.
    pub fn restore(&mut self, literal: Literal, mut list: Vec<Watch>) {
        let added = std::mem::take(&mut self.lists[literal.index()]);
        list.extend(added);
        self.lists[literal.index()] = list;
    }

    /// Stores the binary clause `(a b)`.
    pub fn watch_binary(&mut self, a: Literal, b: Literal, redundant: bool, hyper: bool) {
        self.lists[a.index()].push(Watch::Binary {
            other: b,
            redundant,
            hyper,
        });
        self.lists[b.index()].push(Watch::Binary {
            other: a,
            redundant,
            hyper,
        });
    }

    /// Watches `clause` on `first` and `second`, with each as the blocking literal of the other.
    pub fn watch_large(&mut self, clause: ClauseRef, first: Literal, second: Literal) {
        self.lists[first.index()].push(Watch::Large {
            blocking: second,
            clause,
        });
        self.lists[second.index()].push(Watch::Large {
            blocking: first,
            clause,
        });
    }

    /// Removes (one copy of) the binary clause `(a b)`.
    /// Returns true if the clause was found.
    pub fn remove_binary(&mut self, a: Literal, b: Literal) -> bool {
        let removed_a = Self::remove_binary_watch(&mut self.lists[a.index()], b);
        let removed_b = Self::remove_binary_watch(&mut self.lists[b.index()], a);
        debug_assert_eq!(removed_a, removed_b);
        removed_a && removed_b
    }

    fn remove_binary_watch(list: &mut Vec<Watch>, other: Literal) -> bool {
        match list
            .iter()
            .position(|watch| matches!(watch, Watch::Binary { other: o, .. } if *o == other))
        {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Every binary clause, once each.
    pub fn binaries(&self) -> impl Iterator<Item = BinaryClause> + '_ {
        self.lists.iter().enumerate().flat_map(|(index, list)| {
            let a = Literal::from_code(index as u32);
            list.iter().filter_map(move |watch| match watch {
                Watch::Binary {
                    other,
                    redundant,
                    hyper,
                } if a < *other => Some(BinaryClause {
                    a,
                    b: *other,
                    redundant: *redundant,
                    hyper: *hyper,
                }),
                _ => None,
            })
        })
    }

    /// Removes every watch on a clause in the arena, leaving binary clauses.
    pub fn disconnect_large(&mut self) {
        for list in self.lists.iter_mut() {
            list.retain(|watch| matches!(watch, Watch::Binary { .. }));
        }
    }

    /// The count of literals with a list.
    pub fn literal_count(&self) -> usize {
        self.lists.len()
    }
}
