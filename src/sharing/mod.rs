/*!
Clause sharing between engines of a portfolio.

# Overview

Each engine of a portfolio is a [context](crate::context) running on its own thread, with a distinct configuration.
Engines never share memory beyond an [endpoint](endpoint::Endpoint) each: a set of lock-free queues through which learnt clauses leave an engine, and clauses learnt by other engines arrive.

- On learning a clause an engine offers the clause to its endpoint through the [export callback](crate::context::callbacks::CallbackExport).
  The endpoint rejects clauses with glue above some limit, and the engine keeps a rejected clause regardless.
- A [sharer](sharer::Sharer) periodically gathers exported clauses into a [database](database::ClauseDatabase), selects the shortest clauses up to some count of literals, and delivers each selected clause to every engine other than the engine which learnt the clause.
- At level zero an engine drains its endpoint through the [import callbacks](crate::context::callbacks), see [import](crate::procedures::import).

All clauses are exchanged as [external literals](crate::structures::literal::ExternalLiteral), as engines agree only on the external numbering of variables.

The first engine to determine satisfiability sets a termination flag shared by every engine, and the [portfolio](portfolio::Portfolio) reports the result of that engine.
*/

pub mod database;
pub mod endpoint;
mod exchange;
pub use exchange::SharedClause;
pub mod portfolio;
pub mod sharer;
