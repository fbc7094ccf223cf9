//! Configuration of phases.

use crate::context::ContextState;

use super::ConfigOption;

/// Configuration for phase saving and rephasing.
#[derive(Clone, Debug)]
pub struct PhaseConfig {
    /// The phase of a variable before any value has been saved.
    pub initial: ConfigOption<bool>,

    /// In the stable mode, prefer the phase of the largest assignment since the last restart.
    pub target: ConfigOption<bool>,

    /// Permit rephasing.
    pub rephase: ConfigOption<bool>,

    /// The base count of conflicts between rephases.
    pub rephase_interval: ConfigOption<u64>,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        PhaseConfig {
            initial: ConfigOption {
                name: "initial_phase",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            target: ConfigOption {
                name: "target_phase",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            rephase: ConfigOption {
                name: "rephase",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            rephase_interval: ConfigOption {
                name: "rephase_interval",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1_000,
            },
        }
    }
}
