//! Sources of randomness.

mod lcg64;

pub use lcg64::Lcg64;
