//! A simple pseudorandom number generator.
//!
//! Specifically, a 64-bit linear congruential generator with the multiplier and increment from Knuth's MMIX, returning the high bits of the state.
//! The generator is small, fast, and fully determined by its seed, so distinct engines of a portfolio may be given distinct seeds and each engine remains reproducible.
//!
//! Each [context](crate::context) stores a source of rng, and the context is paramaterised to anything which satisfies [rand::Rng] and [Default].
//! Though to keep the rest of the library straightforward the rng is fixed in a [Context](crate::context::Context) as [Lcg64].

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The state of the generator.
#[derive(Clone, Debug, Default)]
pub struct Lcg64 {
    state: u64,
}

impl RngCore for Lcg64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // The low bits of an LCG have short periods, so the high bits are mixed down.
        let high = self.state >> 32;
        let low = ((self.state >> 16) ^ high) & 0xffff_ffff;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Lcg64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_determinism() {
        let mut a = Lcg64::from_seed(2u64.to_le_bytes());
        let mut b = Lcg64::from_seed(2u64.to_le_bytes());
        let mut c = Lcg64::from_seed(73u64.to_le_bytes());

        let a_values: Vec<u64> = (0..5).map(|_| a.next_u64()).collect();
        let b_values: Vec<u64> = (0..5).map(|_| b.next_u64()).collect();
        let c_values: Vec<u64> = (0..5).map(|_| c.next_u64()).collect();

        assert_eq!(a_values, b_values);
        assert_ne!(a_values, c_values);
    }

    #[test]
    fn bool_is_not_constant() {
        let mut rng = Lcg64::from_seed(0u64.to_le_bytes());
        let trues = (0..1000).filter(|_| rng.random_bool(0.5)).count();
        assert!(100 < trues && trues < 900);
    }
}
