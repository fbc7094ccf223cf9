//! Generic structures, independent of satisfiability.

pub mod ema;
pub mod index_heap;
pub mod luby;
pub mod random;
