/*!
Callbacks associated with a context.

Callbacks are the only way a context communicates with anything else during a solve, e.g. with other engines of a [portfolio](crate::sharing).

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.

- [CallbackTerminate] is polled before each decision, and a solve ends with an unknown result if it returns true.
- [CallbackExport] is given each learnt clause (as external literals) together with its glue, and returns true if the clause was accepted.
- [CallbackImportUnit] is drained of units at level zero.
- [CallbackImportClause] is drained of clauses at level zero.

Termination may also be requested through a flag shared between threads, see [terminate_flag](GenericContext::terminate_flag).
*/

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{config::Glue, sharing::SharedClause, structures::literal::ExternalLiteral};

use super::GenericContext;

pub type CallbackTerminate = dyn FnMut() -> bool;

pub type CallbackExport = dyn FnMut(&[ExternalLiteral], Glue) -> bool;

pub type CallbackImportUnit = dyn FnMut() -> Option<ExternalLiteral>;

pub type CallbackImportClause = dyn FnMut() -> Option<SharedClause>;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub fn set_callback_export(&mut self, callback: Box<CallbackExport>) {
        self.callback_export = Some(callback);
    }

    pub fn set_callback_import_unit(&mut self, callback: Box<CallbackImportUnit>) {
        self.callback_import_unit = Some(callback);
    }

    pub fn set_callback_import_clause(&mut self, callback: Box<CallbackImportClause>) {
        self.callback_import_clause = Some(callback);
    }

    /// Requests termination of a solve.
    pub fn terminate(&self) {
        self.terminate.store(true, Ordering::Relaxed);
    }

    /// Withdraws a request to terminate.
    pub fn unterminate(&self) {
        self.terminate.store(false, Ordering::Relaxed);
    }

    /// The flag through which termination is requested, which may be shared with other threads.
    pub fn terminate_flag(&self) -> Arc<AtomicBool> {
        self.terminate.clone()
    }

    /// Replaces the flag through which termination is requested, e.g. with a flag shared by every engine of a portfolio.
    pub fn set_terminate_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate = flag;
    }

    /// True if termination has been requested, by flag or by callback.
    pub fn is_terminated(&mut self) -> bool {
        self.terminate.load(Ordering::Relaxed) || self.check_callback_terminate()
    }
}
