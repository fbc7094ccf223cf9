//! Configuration of the clause arena and the redundant clauses it stores.

use crate::context::ContextState;

use super::{ConfigOption, Glue};

/// Configuration for the clause arena.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Learnt clauses with glue at most `tier1` are kept through every reduction.
    pub tier1: ConfigOption<Glue>,

    /// Learnt clauses with glue at most `tier2` survive an additional reduction when unused.
    pub tier2: ConfigOption<Glue>,

    /// Conflicts before the first reduction, and the base interval between reductions.
    ///
    /// The interval grows with the square root of the count of reductions.
    pub reduce_interval: ConfigOption<u64>,

    /// The fraction of reduction candidates removed by a reduction.
    pub reduce_fraction: ConfigOption<f64>,

    /// The count of recently learnt clauses checked for subsumption by each learnt clause.
    ///
    /// Zero disables eager subsumption.
    pub eager_subsume: ConfigOption<usize>,

    /// Derive binary clauses from the first decision when propagating large clauses at level one.
    pub hyper_binaries: ConfigOption<bool>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            tier1: ConfigOption {
                name: "tier1",
                min: 0,
                max: Glue::MAX,
                max_state: ContextState::Configuration,
                value: 2,
            },

            tier2: ConfigOption {
                name: "tier2",
                min: 0,
                max: Glue::MAX,
                max_state: ContextState::Configuration,
                value: 6,
            },

            reduce_interval: ConfigOption {
                name: "reduce_interval",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1_000,
            },

            reduce_fraction: ConfigOption {
                name: "reduce_fraction",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.75,
            },

            eager_subsume: ConfigOption {
                name: "eager_subsume",
                min: 0,
                max: 1_000,
                max_state: ContextState::Configuration,
                value: 20,
            },

            hyper_binaries: ConfigOption {
                name: "hyper_binaries",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },
        }
    }
}
