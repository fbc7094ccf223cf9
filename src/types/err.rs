//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use, and indicate a broken invariant of the library.
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//! - Some are external --- e.g. an [ApiError] is returned when a context is used in some way it does not support, such as a second call to solve.
//!
//! Unsatisfiability is not an error.
//! Instead, a context which is found to be unsatisfiable moves to the unsatisfiable [state](crate::context::ContextState) and sets a sticky flag, checked at the start of each public procedure.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Api(ApiError),
    Arena(ArenaError),
    BCP(BCPError),
    Preprocessing(PreprocessingError),
    Sharing(SharingError),

    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "analysis: {e:?}"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::Arena(e) => write!(f, "arena: {e:?}"),
            Self::BCP(e) => write!(f, "propagation: {e:?}"),
            Self::Preprocessing(e) => write!(f, "preprocessing: {e:?}"),
            Self::Sharing(e) => write!(f, "sharing: {e:?}"),
            Self::InvalidState => write!(f, "invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Resolution reached a decision, or a literal without a reason, before a unique implication point.
    MissingReason,

    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Misuse of the public interface of a context.
///
/// Each of these is a programmer error, returned at the call boundary before any state is changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiError {
    /// An external variable outside of the supported range.
    VariableLimit(i64),

    /// A zero literal inside of a clause given as a whole.
    ZeroLiteral,

    /// A solve was requested while a clause was still being added.
    UnterminatedClause,

    /// A second solve was requested, and incremental solving is not supported.
    IncrementalSolve,

    /// A clause was added after a solve.
    AddAfterSolve,

    /// A value was requested without a satisfying assignment.
    NoModel,

    /// A procedure which requires decision level zero was requested above level zero.
    NotAtRoot,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableLimit(v) => write!(f, "external variable {v} is out of range"),
            Self::ZeroLiteral => write!(f, "zero literal within a clause"),
            Self::UnterminatedClause => write!(f, "solve called with an unterminated clause"),
            Self::IncrementalSolve => write!(f, "incremental solving is not supported"),
            Self::AddAfterSolve => write!(f, "clauses may not be added after a solve"),
            Self::NoModel => write!(f, "no satisfying assignment is available"),
            Self::NotAtRoot => write!(f, "procedure requires decision level zero"),
        }
    }
}

impl From<ApiError> for ErrorKind {
    fn from(e: ApiError) -> Self {
        ErrorKind::Api(e)
    }
}

/// Errors in the clause arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArenaError {
    /// A reference from before the most recent compaction.
    StaleReference,

    /// A reference to no clause in the arena.
    InvalidReference,

    /// An attempt to store a clause with fewer than three literals.
    TooShort,

    /// The arena has no more addressable words.
    Exhausted,
}

impl From<ArenaError> for ErrorKind {
    fn from(e: ArenaError) -> Self {
        ErrorKind::Arena(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreprocessingError {
    /// Failed to eliminate pure literals.
    Pure,
}

impl From<PreprocessingError> for ErrorKind {
    fn from(e: PreprocessingError) -> Self {
        ErrorKind::Preprocessing(e)
    }
}

/// Errors from running a portfolio.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SharingError {
    /// A portfolio was requested without any engines.
    NoEngines,

    /// Some engine thread panicked.
    EnginePanic,
}

impl From<SharingError> for ErrorKind {
    fn from(e: SharingError) -> Self {
        ErrorKind::Sharing(e)
    }
}
