/*!
Search modes.

- In the *focused* mode decisions are made on the most recently bumped unassigned variable, through a [queue](crate::decision::queue), and restarts are frequent.
- In the *stable* mode decisions are made on the unassigned variable with the highest score, through a [heap](crate::decision::heap), and restarts follow a reluctant doubling schedule.

A context may stay in a single mode, or switch between the two.
*/

use std::str::FromStr;

use crate::context::ContextState;

use super::ConfigOption;

/// Search modes of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchMode {
    /// Remain in the focused mode.
    Focused = 0,

    /// Remain in the stable mode.
    Stable,

    /// Begin in the focused mode, and switch between the modes on a schedule.
    Switching,
}

impl SearchMode {
    /// The minimum SearchMode type.
    pub const MIN: SearchMode = SearchMode::Focused;

    /// The maximum SearchMode type.
    pub const MAX: SearchMode = SearchMode::Switching;
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focused => write!(f, "Focused"),
            Self::Stable => write!(f, "Stable"),
            Self::Switching => write!(f, "Switching"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Focused" => Ok(Self::Focused),
            "Stable" => Ok(Self::Stable),
            "Switching" => Ok(Self::Switching),
            _unknown_string => Err(()),
        }
    }
}

/// Configuration of search modes.
#[derive(Clone, Debug)]
pub struct ModeConfig {
    pub mode: ConfigOption<SearchMode>,

    /// Conflicts before the first mode switch.
    ///
    /// The `n`th switch takes place `mode_init * n²` conflicts after the previous switch.
    pub mode_init: ConfigOption<u64>,
}

impl Default for ModeConfig {
    fn default() -> Self {
        ModeConfig {
            mode: ConfigOption {
                name: "mode",
                min: SearchMode::MIN,
                max: SearchMode::MAX,
                max_state: ContextState::Configuration,
                value: SearchMode::Switching,
            },

            mode_init: ConfigOption {
                name: "mode_init",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1_000,
            },
        }
    }
}
