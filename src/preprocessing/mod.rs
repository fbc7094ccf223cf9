//! Procedures for preprocessing formulas.
//!
//! Preprocessing takes place at level zero, before search, when [configured](crate::config::Config::preprocessing).
//! Watches on clauses in the arena are not maintained during preprocessing, and a dense [collection](crate::procedures::collect) restores the watches once done.
//!
//! Variables eliminated by preprocessing are noted in the [import map](crate::db::import), and clauses removed with the variables are kept on the [extension stack](crate::db::extension) to reconstruct a model.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    types::err::{self, BCPError, ErrorKind},
};

pub mod pure;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies preprocessing.
    pub fn preprocess(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ApiError::NotAtRoot.into());
        }
        match self.propagate() {
            Ok(()) => {}
            Err(BCPError::Conflict(_)) => {
                self.set_inconsistent();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        let mut eliminated = 0;
        loop {
            if self.is_terminated() {
                break;
            }
            match pure::eliminate_pure(self) {
                Ok(0) => break,
                Ok(count) => eliminated += count,
                Err(e) => {
                    log::error!(target: targets::PREPROCESSING, "Failed to eliminate pure literals: {e}");
                    return Err(err::PreprocessingError::Pure.into());
                }
            }
        }

        log::info!(target: targets::PREPROCESSING, "Eliminated {eliminated} pure literals");
        Ok(())
    }
}
