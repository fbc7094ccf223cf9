/*!
Scores used to order variables in the stable search mode.

- VSIDS (variable state independent decay sum) bumps each variable involved in a conflict by an increment, and the increment grows geometrically, which is equivalent to decaying all scores.
  See [Understanding VSIDS branching heuristics in conflict-driven clause-learning sat solvers](https://arxiv.org/abs/1506.08905) for an overview.
- CHB (conflict history-based branching) treats the choice of a variable as a multi-armed bandit and rewards variables involved in recent conflicts, with a step size which decays over the solve.
  See [Exponential Recency Weighted Average Branching Heuristic for SAT Solvers](https://doi.org/10.1609/aaai.v30i1.10439).
*/

use std::str::FromStr;

use crate::context::ContextState;

use super::ConfigOption;

/// Supported scores for the stable mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum StableHeuristic {
    VSIDS = 0,
    CHB,
}

impl StableHeuristic {
    /// The minimum StableHeuristic type.
    pub const MIN: StableHeuristic = StableHeuristic::VSIDS;

    /// The maximum StableHeuristic type.
    pub const MAX: StableHeuristic = StableHeuristic::CHB;
}

impl std::fmt::Display for StableHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VSIDS => write!(f, "VSIDS"),
            Self::CHB => write!(f, "CHB"),
        }
    }
}

impl FromStr for StableHeuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VSIDS" => Ok(Self::VSIDS),
            "CHB" => Ok(Self::CHB),
            _unknown_string => Err(()),
        }
    }
}

/// Configuration of scores in the stable mode.
#[derive(Clone, Debug)]
pub struct StableConfig {
    pub heuristic: ConfigOption<StableHeuristic>,

    /// The factor by which VSIDS scores decay each conflict.
    pub vsids_decay: ConfigOption<f64>,

    /// The initial CHB step size.
    pub chb_step: ConfigOption<f64>,

    /// The decrease of the CHB step size each conflict.
    pub chb_step_decay: ConfigOption<f64>,

    /// The minimum CHB step size.
    pub chb_step_min: ConfigOption<f64>,
}

impl Default for StableConfig {
    fn default() -> Self {
        StableConfig {
            heuristic: ConfigOption {
                name: "stable_heuristic",
                min: StableHeuristic::MIN,
                max: StableHeuristic::MAX,
                max_state: ContextState::Configuration,
                value: StableHeuristic::VSIDS,
            },

            vsids_decay: ConfigOption {
                name: "vsids_decay",
                min: 0.5,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.95,
            },

            chb_step: ConfigOption {
                name: "chb_step",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.4,
            },

            chb_step_decay: ConfigOption {
                name: "chb_step_decay",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 1e-6,
            },

            chb_step_min: ConfigOption {
                name: "chb_step_min",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.06,
            },
        }
    }
}
