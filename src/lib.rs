//! A conflict-driven clause-learning search engine, built to be run as one engine among many in a portfolio.
//!
//! portfolio_sat determines the satisfiability of boolean formulas written in conjunctive normal form.
//! A single engine is a [context], and engines of a [portfolio](sharing::portfolio) exchange learnt clauses at decision level zero through [callbacks](context::callbacks).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](config), clauses are added [programatically](crate::context::GenericContext::add_clause) with external (signed integer) literals, and a single [solve](crate::context::GenericContext::solve) is made.
//!
//! Internally, a solve is viewed in terms of manipulation of a handful of [databases](db):
//! - Clauses of three or more literals are stored in an [arena](db::arena), and are accessed through epoch-tagged [references](db::arena::ClauseRef).
//! - Binary clauses are stored only in the [watch lists](db::watches).
//! - The current (partial) assignment is stored in an [assignment](db::assignment), with the order of assignment on the [trail](db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [sharing layer](crate::sharing) to see how engines of a portfolio cooperate.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Solve a formula, and read the model.
//!
//! ```rust
//! # use portfolio_sat::config::Config;
//! # use portfolio_sat::context::Context;
//! # use portfolio_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for clause in [vec![1, 2, 3], vec![-1, -2], vec![-1, -3], vec![-2, -3]] {
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! let trues = (1..=3).filter(|v| the_context.value(*v) == Ok(Some(true))).count();
//! assert_eq!(trues, 1);
//! ```
//!
//! + Run a small portfolio.
//!
//! ```rust
//! # use portfolio_sat::config::Config;
//! # use portfolio_sat::sharing::portfolio::Portfolio;
//! # use portfolio_sat::reports::Report;
//! let portfolio = Portfolio::diverse(Config::default(), 2);
//! let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
//!
//! let outcome = portfolio.solve(&clauses).unwrap();
//! assert_eq!(outcome.report, Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the arena](crate::db::arena) can be filtered with `RUST_LOG=arena …` or,
//! - Logs of reduction count without information about the clauses removed can be found with `RUST_LOG=reduction=info …`

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod decision;

pub mod misc;

pub mod preprocessing;

pub mod sharing;
