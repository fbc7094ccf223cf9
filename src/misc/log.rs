/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to garbage collection can be filtered with `RUST_LOG=collect …` or,
- A note of each restart without details of the trail can be found with `RUST_LOG=restart=info …`
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [learning](crate::procedures::learn)
    pub const LEARN: &str = "learn";

    /// Logs related to [backtracking](crate::procedures::backtrack)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to [decisions](crate::procedures::decide)
    pub const DECISION: &str = "decision";

    /// Logs related to [restarts](crate::procedures::restart)
    pub const RESTART: &str = "restart";

    /// Logs related to [reduction](crate::procedures::reduce) of the redundant clauses
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [rephasing](crate::procedures::rephase)
    pub const REPHASE: &str = "rephase";

    /// Logs related to [mode switches](crate::procedures::mode)
    pub const MODE: &str = "mode";

    /// Logs related to [garbage collection](crate::procedures::collect)
    pub const COLLECT: &str = "collect";

    /// Logs related to [root simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to eager subsumption
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [preprocessing](crate::preprocessing)
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to clause [import](crate::procedures::import)
    pub const IMPORT: &str = "import";

    /// Logs related to clause [export](crate::procedures::export)
    pub const EXPORT: &str = "export";

    /// Logs related to the [sharing layer](crate::sharing)
    pub const SHARING: &str = "sharing";

    /// Logs related to the [clause arena](crate::db::arena)
    pub const ARENA: &str = "arena";
}
