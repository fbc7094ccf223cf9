/*!
The context, to which formulas are added and within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, and the procedures of a solve are implemented on the generic context.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

A context is used for a single solve: clauses are added, [solve](GenericContext::solve) is called once, and then the result may be inspected.
Between these points the context may exchange clauses with other contexts through [callbacks](callbacks).

# Example
```rust
# use portfolio_sat::context::Context;
# use portfolio_sat::config::Config;
# use portfolio_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value(1), Ok(Some(false)));
assert_eq!(the_context.value(2), Ok(Some(true)));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::{AnalysisBuffers, GenericContext};
mod limits;
pub use limits::{Averages, Limits};
mod specific;
pub use specific::Context;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The state of a context.
/// These states follow those of the IPASIR2 specification, with a distinct state for a solve which ended without a result.
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable, with a model.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve ended without determining satisfiability, e.g. due to a limit or termination.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
