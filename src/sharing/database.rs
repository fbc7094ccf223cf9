//! A database of clauses awaiting distribution, bucketed by size.
//!
//! Selection takes the shortest clauses first, and stops once the next clause would exceed a limit on the count of literals selected.
//! Units are always selected.
//!
//! Each bucket holds fewer than [BUCKET_LITERALS] literals, and a clause which would fill its bucket past this is refused.
//! So, clauses left over from a selection may wait a while, but the database does not grow without bound.

use super::SharedClause;

/// The bound on the literals held by a single bucket.
pub const BUCKET_LITERALS: usize = 10_000;

/// The database.
pub struct ClauseDatabase {
    /// Clauses indexed by size, less one.
    buckets: Vec<Vec<SharedClause>>,

    /// The bound on the literals held by a single bucket.
    bucket_literals: usize,
}

impl ClauseDatabase {
    /// A database for clauses of at most `max_size` literals.
    pub fn new(max_size: usize) -> Self {
        Self::with_bucket_literals(max_size, BUCKET_LITERALS)
    }

    /// A database for clauses of at most `max_size` literals, with each bucket holding fewer than `bucket_literals` literals.
    pub fn with_bucket_literals(max_size: usize, bucket_literals: usize) -> Self {
        ClauseDatabase {
            buckets: vec![Vec::default(); max_size],
            bucket_literals,
        }
    }

    /// Adds `clause`, returning false if the clause is empty, too long to be stored, or its bucket is full.
    pub fn add(&mut self, clause: SharedClause) -> bool {
        let size = clause.size();
        if size == 0 {
            return false;
        }
        match self.buckets.get_mut(size - 1) {
            Some(bucket) if (bucket.len() + 1) * size < self.bucket_literals => {
                bucket.push(clause);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the shortest clauses, up to `literal_limit` literals in total.
    ///
    /// Units are returned regardless of the limit.
    pub fn give_selection(&mut self, literal_limit: usize) -> Vec<SharedClause> {
        let mut selection = Vec::default();
        let mut literals = 0;

        for (index, bucket) in self.buckets.iter_mut().enumerate() {
            let size = index + 1;
            if size == 1 {
                literals += bucket.len();
                selection.append(bucket);
                continue;
            }
            let room = literal_limit.saturating_sub(literals) / size;
            if room == 0 {
                break;
            }
            let taken = room.min(bucket.len());
            literals += taken * size;
            selection.extend(bucket.drain(..taken));
        }

        selection
    }

    /// The count of clauses in the database.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|bucket| bucket.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(literals: &[i32]) -> SharedClause {
        SharedClause {
            literals: literals.to_vec(),
            glue: 1,
            from: 0,
        }
    }

    #[test]
    fn shortest_first_within_limit() {
        let mut database = ClauseDatabase::new(4);
        assert!(database.add(shared(&[1, 2, 3])));
        assert!(database.add(shared(&[1, 2])));
        assert!(database.add(shared(&[-4])));
        assert!(database.add(shared(&[3, 4])));
        assert!(!database.add(shared(&[1, 2, 3, 4, 5])));
        assert!(!database.add(shared(&[])));

        let selection = database.give_selection(5);
        let sizes: Vec<usize> = selection.iter().map(|clause| clause.size()).collect();
        assert_eq!(sizes, vec![1, 2, 2]);

        assert_eq!(database.len(), 1);
        assert_eq!(database.give_selection(100).len(), 1);
        assert!(database.is_empty());
    }

    #[test]
    fn full_buckets_refuse() {
        let mut database = ClauseDatabase::with_bucket_literals(3, 10);
        for n in 1..=4 {
            assert!(database.add(shared(&[n, n + 1])));
        }
        assert!(!database.add(shared(&[7, 8])));
        assert_eq!(database.len(), 4);

        // Other sizes are unaffected.
        assert!(database.add(shared(&[1, 2, 3])));
        assert!(database.add(shared(&[9])));

        // A selection makes room.
        assert_eq!(database.give_selection(4).len(), 2);
        assert!(database.add(shared(&[7, 8])));
    }
}
