//! Limits on the search, and averages used to schedule restarts.

use crate::{config::Config, generic::ema::Ema};

/// Conflict counts at which scheduled procedures next take place, and (optional) limits of a solve.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// The conflict count at which the solve stops, if set.
    pub conflicts: Option<u64>,

    /// The decision count at which the solve stops, if set.
    pub decisions: Option<u64>,

    /// Conflicts allowed to a solve, counted from the start of the solve.
    pub conflict_budget: Option<u64>,

    /// Decisions allowed to a solve, counted from the start of the solve.
    pub decision_budget: Option<u64>,

    /// The conflict count of the next reduction.
    pub reduce: u64,

    /// The conflict count of the next rephase.
    pub rephase: u64,

    /// The conflict count of the next mode switch.
    pub mode: u64,

    /// The conflict count before which no focused restart takes place.
    pub restart: u64,
}

/// Moving averages of the glue of learnt clauses.
#[derive(Clone, Debug)]
pub struct Averages {
    pub fast_glue: Ema,
    pub slow_glue: Ema,
}

impl Averages {
    pub fn new(config: &Config) -> Self {
        Averages {
            fast_glue: Ema::new(config.restart.ema_fast.value),
            slow_glue: Ema::new(config.restart.ema_slow.value),
        }
    }
}
