//! Export of learnt clauses.
//!
//! Each learnt clause is translated to external literals through the [import map](crate::db::import) and offered, together with its glue, to the [export callback](crate::context::callbacks::CallbackExport).
//! The callback may reject the clause (e.g. as the glue is too high to be worth sharing), and a rejected clause is still kept by the context.

use crate::{
    config::Glue,
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Offers `clause` to the export callback, if set.
    pub fn export_clause(&mut self, clause: &[Literal], glue: Glue) {
        let Some(callback) = &mut self.callback_export else {
            return;
        };

        let external = &mut self.buffers.external;
        external.clear();
        external.extend(clause.iter().map(|literal| self.imports.export(*literal)));

        match callback(external.as_slice(), glue) {
            true => {
                self.counters.exported += 1;
                log::trace!(target: targets::EXPORT, "Exported {external:?} with glue {glue}");
            }
            false => self.counters.export_rejected += 1,
        }
    }
}
