use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub conflicts: u64,

    /// A count of all decisions made.
    pub decisions: u64,

    /// A count of literals propagated.
    pub propagations: u64,

    /// The total number of iterations through the search loop.
    pub iterations: u64,

    /// The number of restarts.
    pub restarts: u64,

    /// The number of reductions of learnt clauses.
    pub reductions: u64,

    /// The number of collections of the arena.
    pub collections: u64,

    /// The number of rephases.
    pub rephases: u64,

    /// The number of switches between search modes.
    pub mode_switches: u64,

    /// The number of simplifications at level zero.
    pub simplifications: u64,

    /// Counts of learnt clauses, by kind.
    pub learned_units: u64,
    pub learned_binaries: u64,
    pub learned_large: u64,

    /// Clauses marked as garbage by eager subsumption.
    pub subsumed: u64,

    /// Binary clauses derived by hyper binary resolution.
    pub hyper_binaries: u64,

    /// Variables eliminated by preprocessing.
    pub eliminated: u64,

    /// Learnt clauses accepted by the export callback.
    pub exported: u64,

    /// Learnt clauses rejected by the export callback.
    pub export_rejected: u64,

    /// Units imported.
    pub imported_units: u64,

    /// Clauses (of two or more literals) imported.
    pub imported_clauses: u64,

    /// Imported units or clauses skipped, as satisfied or mentioning some unknown or eliminated variable.
    pub import_skipped: u64,

    /// The time taken during a solve.
    pub time: Duration,
}
