/*!
Configuration of a context.

All configuration for a context is contained within the [Config] structure of the context, and is fixed once a solve begins.
Related options are grouped into substructures:

- [ArenaConfig](dbs::ArenaConfig), for reduction of learnt clauses and eager subsumption.
- [RestartConfig](restart::RestartConfig), for restarts in both search modes.
- [PhaseConfig](phase::PhaseConfig), for phase saving, target phases, and rephasing.
- [ModeConfig](mode::ModeConfig), for the search mode(s).
- [StableConfig](stable::StableConfig), for the scores used in the stable mode.

Each option is a [ConfigOption], bounded by a minimum and maximum value.

# Example

```rust
# use portfolio_sat::config::{Config, mode::SearchMode, stable::StableHeuristic};
let mut config = Config::default();
assert!(config.mode.mode.set(SearchMode::Stable));
assert!(config.stable.heuristic.set(StableHeuristic::CHB));
assert!(!config.arena.reduce_fraction.set(2.0));
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
pub mod mode;
pub mod phase;
pub mod restart;
pub mod stable;

use crate::context::ContextState;

/// The representation of glue (literal block distance).
pub type Glue = u32;

/// The representation of variable scores.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the clause arena.
    pub arena: dbs::ArenaConfig,

    /// Configuration of restarts.
    pub restart: restart::RestartConfig,

    /// Configuration of phases.
    pub phase: phase::PhaseConfig,

    /// Configuration of search modes.
    pub mode: mode::ModeConfig,

    /// Configuration of scores in the stable mode.
    pub stable: stable::StableConfig,

    /// If a backjump would skip more than this many levels, backtrack a single level instead.
    pub chrono_levels: ConfigOption<u32>,

    /// Remove literals implied by other literals from learnt clauses.
    pub minimize: ConfigOption<bool>,

    /// Enable preprocessing, i.e. elimination of pure literals, before search.
    pub preprocessing: ConfigOption<bool>,

    /// The seed for the source of randomness.
    pub random_seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default context is configured to provide deterministic results for a fixed seed.
    fn default() -> Self {
        Config {
            arena: dbs::ArenaConfig::default(),
            restart: restart::RestartConfig::default(),
            phase: phase::PhaseConfig::default(),
            mode: mode::ModeConfig::default(),
            stable: stable::StableConfig::default(),

            chrono_levels: ConfigOption {
                name: "chrono_levels",
                min: 0,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 100,
            },

            minimize: ConfigOption {
                name: "minimize",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            preprocessing: ConfigOption {
                name: "preprocessing",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            random_seed: ConfigOption {
                name: "random_seed",
                min: 0,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 0,
            },
        }
    }
}
