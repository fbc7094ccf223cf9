//! Configuration of restarts.

use crate::context::ContextState;

use super::ConfigOption;

/// Configuration for restarts in both search modes.
#[derive(Clone, Debug)]
pub struct RestartConfig {
    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The minimum count of conflicts between restarts in the focused mode.
    pub interval: ConfigOption<u64>,

    /// In the focused mode, restart when the fast glue average exceeds the slow average by this factor.
    pub margin: ConfigOption<f64>,

    /// The window of the fast glue average.
    pub ema_fast: ConfigOption<f64>,

    /// The window of the slow glue average.
    pub ema_slow: ConfigOption<f64>,

    /// The `u` value to multiply the luby sequence by when scheduling restarts in the stable mode.
    pub reluctant_period: ConfigOption<u64>,

    /// The maximum (scaled) luby value, after which the sequence begins again.
    pub reluctant_max: ConfigOption<u64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        RestartConfig {
            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            interval: ConfigOption {
                name: "restart_interval",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1,
            },

            margin: ConfigOption {
                name: "restart_margin",
                min: 1.0,
                max: 10.0,
                max_state: ContextState::Configuration,
                value: 1.1,
            },

            ema_fast: ConfigOption {
                name: "ema_fast",
                min: 1.0,
                max: 1e9,
                max_state: ContextState::Configuration,
                value: 33.0,
            },

            ema_slow: ConfigOption {
                name: "ema_slow",
                min: 1.0,
                max: 1e9,
                max_state: ContextState::Configuration,
                value: 1e5,
            },

            reluctant_period: ConfigOption {
                name: "reluctant_period",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1_024,
            },

            reluctant_max: ConfigOption {
                name: "reluctant_max",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 1_048_576,
            },
        }
    }
}
