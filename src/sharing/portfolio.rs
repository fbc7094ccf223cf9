/*!
A portfolio: several engines on the same formula, each on its own thread, exchanging learnt clauses.

Each engine is given a configuration, and a portfolio with [diverse](Portfolio::diverse) configurations varies the seed, search mode, stable heuristic, and initial phase of each engine.

All engines share a single termination flag.
The first engine to find the formula satisfiable or unsatisfiable sets the flag, and the remaining engines return unknown at their next decision.
A [sharer](super::sharer::Sharer) runs on a thread of its own until every engine has returned.

# Example

```rust
# use portfolio_sat::config::Config;
# use portfolio_sat::reports::Report;
# use portfolio_sat::sharing::portfolio::Portfolio;
let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2]];

let outcome = Portfolio::diverse(Config::default(), 3).solve(&clauses).unwrap();
assert_eq!(outcome.report, Report::Satisfiable);

let model = outcome.model.unwrap();
assert_eq!(model, vec![1, 2]);
```
*/

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crossbeam::channel::unbounded;

use crate::{
    config::{mode::SearchMode, stable::StableHeuristic, Config, Glue},
    context::Context,
    misc::log::targets,
    reports::Report,
    structures::literal::ExternalLiteral,
    types::err::{ErrorKind, SharingError},
};

use super::{endpoint::Endpoint, sharer::Sharer};

/// The portfolio.
#[derive(Clone, Debug)]
pub struct Portfolio {
    /// A configuration for each engine.
    pub configs: Vec<Config>,

    /// Learnt clauses of more than one literal with glue above this limit are not shared.
    pub glue_limit: Glue,

    /// Learnt clauses of more than this many literals are not shared.
    pub max_size: usize,

    /// The most literals shared in a single round, units aside.
    pub literal_limit: usize,

    /// The pause between rounds of sharing.
    pub interval: Duration,
}

/// The result of a portfolio.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub report: Report,

    /// The engine which determined the report, if any did.
    pub engine: Option<usize>,

    /// On a satisfiable report, the value of each external variable from one, as a literal.
    pub model: Option<Vec<ExternalLiteral>>,
}

type EngineResult = Result<(Report, Option<Vec<ExternalLiteral>>), ErrorKind>;

impl Portfolio {
    pub fn new(configs: Vec<Config>) -> Self {
        Portfolio {
            configs,
            glue_limit: 8,
            max_size: 40,
            literal_limit: 1_500,
            interval: Duration::from_millis(5),
        }
    }

    /// A portfolio of `engines` engines, each a variation on `base`.
    pub fn diverse(base: Config, engines: usize) -> Self {
        let modes = [SearchMode::Focused, SearchMode::Stable, SearchMode::Switching];

        let configs = (0..engines)
            .map(|engine| {
                let mut config = base.clone();
                config
                    .random_seed
                    .set(base.random_seed.value.wrapping_add(engine as u64));
                config.mode.mode.set(modes[engine % modes.len()]);
                if (engine / modes.len()) % 2 == 1 {
                    config.stable.heuristic.set(StableHeuristic::CHB);
                    config.phase.initial.set(!base.phase.initial.value);
                }
                config
            })
            .collect();

        Portfolio::new(configs)
    }

    /// Solves the formula of `clauses` with each engine of the portfolio, returning the outcome of the first engine to determine satisfiability.
    pub fn solve(&self, clauses: &[Vec<ExternalLiteral>]) -> Result<Outcome, ErrorKind> {
        if self.configs.is_empty() {
            return Err(SharingError::NoEngines.into());
        }

        let terminate = Arc::new(AtomicBool::new(false));
        let endpoints: Vec<Arc<Endpoint>> = (0..self.configs.len())
            .map(|id| Arc::new(Endpoint::new(id, self.glue_limit)))
            .collect();
        let (sender, receiver) = unbounded::<(usize, EngineResult)>();

        std::thread::scope(|scope| {
            let sharer = {
                let mut sharer = Sharer::new(endpoints.clone(), self.max_size, self.literal_limit);
                let terminate = terminate.clone();
                let interval = self.interval;
                scope.spawn(move || {
                    while !terminate.load(Ordering::Relaxed) {
                        sharer.round();
                        std::thread::sleep(interval);
                    }
                    log::info!(target: targets::SHARING, "{} rounds, {} clauses shared", sharer.rounds, sharer.shared);
                })
            };

            let engines: Vec<_> = self
                .configs
                .iter()
                .enumerate()
                .map(|(id, config)| {
                    let endpoint = endpoints[id].clone();
                    let terminate = terminate.clone();
                    let sender = sender.clone();
                    scope.spawn(move || {
                        let result = run_engine(config.clone(), clauses, &endpoint, terminate.clone());
                        if let Ok((Report::Satisfiable | Report::Unsatisfiable, _)) = result {
                            terminate.store(true, Ordering::Relaxed);
                        }
                        let _ = sender.send((id, result));
                    })
                })
                .collect();
            drop(sender);

            let mut outcome = None;
            let mut error = None;
            for (id, result) in receiver.iter() {
                match result {
                    Ok((Report::Unknown, _)) => {}
                    Ok((report, model)) => {
                        if outcome.is_none() {
                            log::info!(target: targets::SHARING, "Engine {id} reports {report}");
                            outcome = Some(Outcome {
                                report,
                                engine: Some(id),
                                model,
                            });
                        }
                    }
                    Err(e) => {
                        log::error!(target: targets::SHARING, "Engine {id} failed: {e}");
                        error.get_or_insert(e);
                    }
                }
            }

            // Every engine has returned, so the sharer may stop.
            terminate.store(true, Ordering::Relaxed);

            let mut panicked = engines.into_iter().any(|engine| engine.join().is_err());
            panicked |= sharer.join().is_err();

            match (outcome, error) {
                (Some(outcome), _) => Ok(outcome),
                (None, Some(e)) => Err(e),
                (None, None) if panicked => Err(SharingError::EnginePanic.into()),
                (None, None) => Ok(Outcome {
                    report: Report::Unknown,
                    engine: None,
                    model: None,
                }),
            }
        })
    }
}

fn run_engine(
    config: Config,
    clauses: &[Vec<ExternalLiteral>],
    endpoint: &Arc<Endpoint>,
    terminate: Arc<AtomicBool>,
) -> EngineResult {
    let mut context = Context::from_config(config);
    context.set_terminate_flag(terminate);
    endpoint.connect(&mut context);

    for clause in clauses {
        context.add_clause(clause.iter().copied())?;
    }

    let report = context.solve()?;
    let model = match report {
        Report::Satisfiable => {
            let mut model = Vec::default();
            for variable in 1..=context.imports.max_external() {
                match context.value(variable)? {
                    Some(false) => model.push(-variable),
                    _ => model.push(variable),
                }
            }
            Some(model)
        }
        _ => None,
    };

    let (accepted, rejected) = endpoint.export_counts();
    log::info!(target: targets::SHARING, "Engine {}: {report} after {} conflicts, {accepted} exports accepted, {rejected} rejected", endpoint.id, context.counters.conflicts);

    Ok((report, model))
}
