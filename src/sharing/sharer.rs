/*!
The sharer: gathers clauses exported by each engine, and distributes a selection to every other engine.

The sharer does no more than a [round](Sharer::round) when asked, and the schedule of rounds is left to the [portfolio](super::portfolio).
*/

use std::sync::Arc;

use crate::misc::log::targets;

use super::{database::ClauseDatabase, endpoint::Endpoint};

/// The sharer.
pub struct Sharer {
    endpoints: Vec<Arc<Endpoint>>,
    database: ClauseDatabase,

    /// The most literals distributed in a round, units aside.
    pub literal_limit: usize,

    /// The count of rounds made.
    pub rounds: usize,

    /// The count of clauses distributed.
    pub shared: usize,

    /// The count of exported clauses refused by the database.
    pub dropped: usize,
}

impl Sharer {
    pub fn new(endpoints: Vec<Arc<Endpoint>>, max_size: usize, literal_limit: usize) -> Self {
        Sharer {
            endpoints,
            database: ClauseDatabase::new(max_size),
            literal_limit,
            rounds: 0,
            shared: 0,
            dropped: 0,
        }
    }

    /// Gathers exported clauses, then delivers a selection to every endpoint except the endpoint the clause came from.
    /// Returns the count of clauses selected.
    pub fn round(&mut self) -> usize {
        for endpoint in &self.endpoints {
            while let Some(clause) = endpoint.take_exported() {
                if !self.database.add(clause) {
                    self.dropped += 1;
                }
            }
        }

        let selection = self.database.give_selection(self.literal_limit);
        for clause in &selection {
            for endpoint in self.endpoints.iter().filter(|e| e.id != clause.from) {
                endpoint.deliver(clause.clone());
            }
        }

        self.rounds += 1;
        self.shared += selection.len();
        if !selection.is_empty() {
            log::trace!(target: targets::SHARING, "Round {}: {} clauses shared, {} held", self.rounds, selection.len(), self.database.len());
        }
        selection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_echo() {
        let endpoints: Vec<Arc<Endpoint>> =
            (0..3).map(|id| Arc::new(Endpoint::new(id, 4))).collect();

        endpoints[0].export(&[1, -2], 1);
        endpoints[2].export(&[3], 0);

        let mut sharer = Sharer::new(endpoints.clone(), 8, 100);
        assert_eq!(sharer.round(), 2);

        assert!(endpoints[0].next_clause().is_none());
        assert_eq!(endpoints[0].next_unit(), Some(3));

        assert_eq!(endpoints[1].next_clause().unwrap().literals, vec![1, -2]);
        assert_eq!(endpoints[1].next_unit(), Some(3));

        assert_eq!(endpoints[2].next_clause().unwrap().literals, vec![1, -2]);
        assert!(endpoints[2].next_unit().is_none());

        assert_eq!(sharer.round(), 0);
    }

    #[test]
    fn oversized_clauses_dropped() {
        let endpoints: Vec<Arc<Endpoint>> =
            (0..2).map(|id| Arc::new(Endpoint::new(id, 8))).collect();
        endpoints[0].export(&[1, 2, 3], 1);

        let mut sharer = Sharer::new(endpoints.clone(), 2, 100);
        assert_eq!(sharer.round(), 0);
        assert_eq!(sharer.dropped, 1);
        assert!(endpoints[1].next_clause().is_none());
    }
}
