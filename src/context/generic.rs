use std::sync::{atomic::AtomicBool, Arc};

use crate::{
    config::Config,
    db::{
        arena::Arena, assignment::Assignment, clueue::Clueue, extension::ExtensionStack,
        import::ImportMap, phases::Phases, trail::Trail, watches::Watches, LevelIndex,
    },
    decision::Orders,
    generic::luby::Reluctant,
    reports::Report,
    structures::{
        literal::{ExternalLiteral, Literal, Variable},
        value::Value,
    },
    types::err::{self, ErrorKind},
};

use super::{
    callbacks::{CallbackExport, CallbackImportClause, CallbackImportUnit, CallbackTerminate},
    Averages, ContextState, Counters, Limits,
};

/// Buffers reused across conflict analyses.
#[derive(Default)]
pub struct AnalysisBuffers {
    /// Variables marked as analyzed.
    pub analyzed: Vec<Variable>,

    /// The clause being learnt, with the asserted literal first.
    pub learned: Vec<Literal>,

    /// Variables marked as removable or poisoned during minimization.
    pub minimized: Vec<Variable>,

    /// Levels of literals in the clause being learnt, as marks indexed by level.
    pub levels: Vec<bool>,

    /// External literals of a clause to export.
    pub external: Vec<ExternalLiteral>,
}

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use portfolio_sat::context::GenericContext;
/// # use portfolio_sat::generic::random::Lcg64;
/// # use portfolio_sat::config::Config;
/// let context = GenericContext::<Lcg64>::from_config_with_rng(Config::default(), Lcg64::default());
/// assert!(!context.is_inconsistent());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The clause arena.
    /// See [db::arena](crate::db::arena) for details.
    pub arena: Arena,

    /// Watch lists, holding every binary clause.
    pub watches: Watches,

    pub assignment: Assignment,

    pub trail: Trail,

    pub phases: Phases,

    /// Decision orders of both search modes.
    pub orders: Orders,

    /// The map between external and internal variables.
    pub imports: ImportMap,

    pub extension: ExtensionStack,

    /// Recently learnt clauses, for eager subsumption.
    pub clueue: Clueue,

    pub limits: Limits,

    pub averages: Averages,

    /// The schedule of restarts in the stable mode.
    pub reluctant: Reluctant,

    /// Buffers for analysis.
    pub buffers: AnalysisBuffers,

    /// Marks on literals, e.g. for subsumption checks.
    pub(crate) marks: Vec<bool>,

    /// The count of variables which have not been eliminated.
    pub(crate) active: usize,

    /// Sticky flag, set once the empty clause has been derived.
    pub(crate) inconsistent: bool,

    /// Set on learning a unit, for a simplification at level zero.
    pub(crate) iterating: bool,

    /// Count of units assigned at level zero since the last simplification.
    pub(crate) unflushed: usize,

    /// Hyper binary clauses derived during propagation, to be watched once the propagating watch list is restored.
    pub(crate) hyper_pending: Vec<(Literal, Literal)>,

    /// Literals of a clause being added through [add_literal](GenericContext::add_literal).
    pub(crate) clause_buffer: Vec<ExternalLiteral>,

    /// The satisfying assignment, indexed by literal, extended to eliminated variables.
    pub(crate) model: Vec<Value>,

    pub(super) terminate: Arc<AtomicBool>,

    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    pub(crate) callback_export: Option<Box<CallbackExport>>,

    pub(crate) callback_import_unit: Option<Box<CallbackImportUnit>>,

    pub(crate) callback_import_clause: Option<Box<CallbackImportClause>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_with_rng(config: Config, rng: R) -> Self {
        Self {
            orders: Orders::new(&config),
            averages: Averages::new(&config),
            reluctant: Reluctant::new(
                config.restart.reluctant_period.value,
                config.restart.reluctant_max.value,
            ),
            clueue: Clueue::with_capacity(config.arena.eager_subsume.value),

            config,

            counters: Counters::default(),
            state: ContextState::Configuration,
            rng,

            arena: Arena::default(),
            watches: Watches::default(),
            assignment: Assignment::default(),
            trail: Trail::default(),
            phases: Phases::default(),
            imports: ImportMap::default(),
            extension: ExtensionStack::default(),
            limits: Limits::default(),
            buffers: AnalysisBuffers::default(),

            marks: Vec::default(),
            active: 0,
            inconsistent: false,
            iterating: false,
            unflushed: 0,
            hyper_pending: Vec::default(),
            clause_buffer: Vec::default(),
            model: Vec::default(),

            terminate: Arc::new(AtomicBool::new(false)),
            callback_terminate: None,
            callback_export: None,
            callback_import_unit: None,
            callback_import_clause: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// True if the empty clause has been derived.
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// The value of an external literal in the satisfying assignment found by a solve.
    ///
    /// None if the variable of the literal is unknown to the context.
    pub fn value(&self, literal: ExternalLiteral) -> Result<Option<bool>, ErrorKind> {
        if self.state != ContextState::Satisfiable {
            return Err(err::ApiError::NoModel.into());
        }
        let Some(import) = self.imports.get(literal) else {
            return Ok(None);
        };
        let internal = match literal > 0 {
            true => import.literal,
            false => import.literal.negate(),
        };
        Ok(self.model[internal.index()].as_bool())
    }

    /// Limits the count of conflicts of a solve.
    pub fn set_conflict_limit(&mut self, limit: u64) {
        self.limits.conflict_budget = Some(limit);
    }

    /// Limits the count of decisions of a solve.
    pub fn set_decision_limit(&mut self, limit: u64) {
        self.limits.decision_budget = Some(limit);
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// The count of variables which are neither assigned nor eliminated.
    pub fn unassigned(&self) -> usize {
        self.active - self.trail.len()
    }

    /// Marks the context as inconsistent.
    pub(crate) fn set_inconsistent(&mut self) {
        if !self.inconsistent {
            log::info!("Inconsistent after {} conflicts", self.counters.conflicts);
        }
        self.inconsistent = true;
    }

    /// Extends every structure indexed by variable or literal to the variables of the import map.
    pub(crate) fn ensure_variables(&mut self) {
        let variables = self.imports.variables();
        let previous = self.assignment.variables();
        if variables <= previous {
            return;
        }
        self.assignment.grow_to(variables);
        self.watches.grow_to(2 * variables);
        self.phases.grow_to(variables);
        self.orders.grow_to(variables);
        self.marks.resize(2 * variables, false);
        self.active += variables - previous;
    }

    /// Variables which are neither assigned nor eliminated.
    pub(crate) fn unassigned_variables(&self) -> Vec<Variable> {
        (0..self.assignment.variables() as Variable)
            .filter(|v| {
                !self.imports.is_eliminated(*v)
                    && !self.assignment.value(Literal::new(*v, true)).is_assigned()
            })
            .collect()
    }
}
