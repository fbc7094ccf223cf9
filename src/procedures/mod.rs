//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod add;
pub mod analysis;
pub mod assign;
pub mod backtrack;
pub mod collect;
pub mod decide;
pub mod export;
pub mod import;
pub mod learn;
pub mod mode;
pub mod propagate;
pub mod reduce;
pub mod rephase;
pub mod restart;
pub mod simplify;
pub mod solve;
pub mod subsume;
