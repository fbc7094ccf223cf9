use crate::{config::Config, generic::random::Lcg64};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [Lcg64] as a source of randomness.
pub type Context = GenericContext<Lcg64>;

impl Context {
    /// Creates a context from some given configuration, with randomness seeded from the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = Lcg64::from_seed(config.random_seed.value.to_le_bytes());
        Self::from_config_with_rng(config, rng)
    }
}
