//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a loop of propagation, analysis of conflicts, and decisions, interleaved with scheduled procedures.
//! Roughly, each pass through the loop:
//!
//! ```none
//!  +--> at level zero, import units and clauses from other engines
//!  |      |
//!  |      ⌄
//!  |    propagate ---- conflict ----> analyze, learn, backjump ---+
//!  |      |                                                       |
//!  |      | no conflict                                           |
//!  |      ⌄                                                       |
//!  |    the first of:                                             |
//!  |    - simplify, if a unit was learnt                          |
//!  |    - satisfiable, if every variable is assigned              |
//!  |    - unknown, if terminated or a limit was reached           |
//!  |    - reduce, restart, rephase, or switch mode, if due        |
//!  |    - simplify, if at level zero with fresh units             |
//!  |    - decide                                                  |
//!  |      |                                                       |
//!  +------+-------------------------------------------------------+
//! ```
//!
//! A conflict at level zero ends the solve as unsatisfiable.
//!
//! The order of the scheduled procedures is fixed, and at most one takes place on each pass.
//!
//! # Example
//!
//! ```rust
//! # use portfolio_sat::context::Context;
//! # use portfolio_sat::config::Config;
//! # use portfolio_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for clause in [[1, 2], [-1, 2], [1, -2], [-1, -2]] {
//!     the_context.add_clause(clause).unwrap();
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! assert!(the_context.solve().is_err());
//! ```

use std::time::Instant;

use crate::{
    config::mode::SearchMode,
    context::{ContextState, GenericContext},
    procedures::{analysis, decide},
    reports::Report,
    structures::{literal::Literal, value::Value},
    types::err::{self, BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        if !self.clause_buffer.is_empty() {
            return Err(err::ApiError::UnterminatedClause.into());
        }
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            _ => return Err(err::ApiError::IncrementalSolve.into()),
        }

        let start = Instant::now();
        self.state = ContextState::Solving;
        let result = self.solve_given();
        self.counters.time = start.elapsed();

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                self.state = ContextState::Unknown;
                log::error!("Solve failed with {e}");
                return Err(e);
            }
        };

        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Unknown,
        };
        log::info!("{report} after {} conflicts and {} decisions", self.counters.conflicts, self.counters.decisions);
        Ok(report)
    }

    fn solve_given(&mut self) -> Result<Report, ErrorKind> {
        if self.inconsistent {
            return Ok(Report::Unsatisfiable);
        }

        self.initialise_limits();
        if self.config.mode.mode.value == SearchMode::Stable {
            self.enter_mode(true);
        }

        if self.config.preprocessing.value {
            self.preprocess()?;
            if self.inconsistent {
                return Ok(Report::Unsatisfiable);
            }
        }

        let report = self.search()?;
        if report == Report::Satisfiable {
            self.build_model();
        }
        Ok(report)
    }

    fn initialise_limits(&mut self) {
        let conflicts = self.counters.conflicts;
        let limits = &mut self.limits;
        limits.conflicts = limits.conflict_budget.map(|budget| conflicts + budget);
        limits.decisions = limits.decision_budget.map(|budget| self.counters.decisions + budget);
        limits.reduce = conflicts + self.config.arena.reduce_interval.value;
        limits.rephase = conflicts + self.config.phase.rephase_interval.value;
        limits.mode = conflicts + self.config.mode.mode_init.value;
        limits.restart = conflicts + self.config.restart.interval.value;
    }

    /// The search loop.
    fn search(&mut self) -> Result<Report, ErrorKind> {
        loop {
            self.counters.iterations += 1;

            if self.trail.level() == 0 {
                self.import_units()?;
                self.import_clauses()?;
                if self.inconsistent {
                    return Ok(Report::Unsatisfiable);
                }
            }

            match self.propagate() {
                Ok(()) => {}

                Err(BCPError::Conflict(key)) => {
                    self.counters.conflicts += 1;
                    match self.analyze(key)? {
                        analysis::Ok::FundamentalConflict => {
                            self.set_inconsistent();
                            return Ok(Report::Unsatisfiable);
                        }
                        analysis::Ok::Asserting { jump, glue } => self.learn(jump, glue)?,
                    }
                    continue;
                }

                Err(e) => return Err(e.into()),
            }

            if self.iterating {
                self.simplify()?;
                if self.inconsistent {
                    return Ok(Report::Unsatisfiable);
                }
            } else if self.unassigned() == 0 {
                return Ok(Report::Satisfiable);
            } else if self.is_terminated() {
                log::info!("Terminated");
                return Ok(Report::Unknown);
            } else if self
                .limits
                .conflicts
                .is_some_and(|limit| self.counters.conflicts >= limit)
            {
                log::info!("Conflict limit reached");
                return Ok(Report::Unknown);
            } else if self.reducing() {
                self.reduce()?;
            } else if self.restarting() {
                self.restart();
            } else if self.rephasing() {
                self.rephase();
            } else if self.switching() {
                self.switch_mode();
            } else if self.trail.level() == 0 && self.unflushed > 0 {
                self.simplify()?;
                if self.inconsistent {
                    return Ok(Report::Unsatisfiable);
                }
            } else if self
                .limits
                .decisions
                .is_some_and(|limit| self.counters.decisions >= limit)
            {
                log::info!("Decision limit reached");
                return Ok(Report::Unknown);
            } else {
                match self.decide() {
                    decide::Ok::Made(_) => {}
                    decide::Ok::Exhausted => {
                        log::error!("No decision with {} variables unassigned", self.unassigned());
                        return Err(ErrorKind::InvalidState);
                    }
                }
            }
        }
    }

    /// Builds the model from the assignment, extended to eliminated variables.
    fn build_model(&mut self) {
        let variables = self.assignment.variables();
        let mut model = vec![Value::Unassigned; 2 * variables];
        for variable in 0..variables as u32 {
            let positive = Literal::new(variable, true);
            let value = match self.assignment.value(positive) {
                Value::Unassigned => Value::False,
                value => value,
            };
            model[positive.index()] = value;
            model[positive.negate().index()] = -value;
        }
        self.extension.extend(&mut model);
        self.model = model;
    }
}
