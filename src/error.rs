//! Typed error surface.
//!
//! Three error kinds map to the three failure boundaries of the pipeline:
//! [`ValidationError`] at profile construction, [`DataError`] at catalog
//! construction, and [`SolveError`] at the solve boundary. [`PlanError`]
//! unifies them for the request-level facade.
//!
//! Validation and data errors carry a specific reason and are detected
//! eagerly, before any model is built. Solve failures are deliberately a
//! single generic outcome: infeasibility diagnosis is out of scope, and
//! callers get the same answer for an infeasible model as for any other
//! non-optimal solver status.

use thiserror::Error;

/// Malformed or out-of-range student profile.
///
/// Raised by [`crate::models::ProfileBuilder::build`]; an invalid profile
/// never reaches the model encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Grade outside 1..=4.
    #[error("grade must be between 1 and 4, got {0}")]
    GradeOutOfRange(u8),
    /// Term within the year outside 1..=2.
    #[error("term within the year must be 1 or 2, got {0}")]
    TermOutOfRange(u8),
    /// The student's standing leaves no terms to plan.
    #[error("no terms remain to plan for grade {grade} term {term}")]
    EmptyHorizon { grade: u8, term: u8 },
    /// Per-term credit ceiling outside 9..=20.
    #[error("per-term credit cap must be between 9 and 20, got {0}")]
    CreditCapOutOfRange(u32),
    /// Declared internship term outside 1..=8.
    #[error("internship term must be between 1 and 8, got {0}")]
    InternshipTermOutOfRange(u8),
    /// Balanced-workload planning needs a per-term credit target.
    #[error("balanced workload planning requires a per-term credit target")]
    MissingTargetCredits,
    /// Per-term credit target outside 9..=20.
    #[error("per-term credit target must be between 9 and 20, got {0}")]
    TargetCreditsOutOfRange(u32),
    /// A credit target was given for a planning type that does not use one.
    #[error("a per-term credit target only applies to balanced workload planning")]
    UnexpectedTargetCredits,
    /// More than three preferred categories.
    #[error("at most 3 preferred categories may be given, got {0}")]
    TooManyPreferredCategories(usize),
}

/// Malformed catalog data.
///
/// Raised while normalizing raw course records into a
/// [`crate::catalog::Catalog`]. Several constraints key courses by name, so
/// name uniqueness is an indexing invariant, not a style check.
#[derive(Debug, Error)]
pub enum DataError {
    /// The catalog document could not be parsed.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record parsed but fails a field-level requirement.
    #[error("course '{name}': {reason}")]
    InvalidCourse { name: String, reason: String },
    /// Two records share a display name.
    #[error("duplicate course name '{0}'")]
    DuplicateName(String),
    /// Two records share an id.
    #[error("duplicate course id {0}")]
    DuplicateId(u32),
}

/// The solver capability did not return an optimal assignment.
///
/// Covers genuine infeasibility and every other non-success status,
/// indistinguishably. There is no partial result and no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No optimal solution exists for the submitted model.
    #[error("no optimal course plan exists for the given profile and catalog")]
    NoSolution,
}

/// Any failure of the planning pipeline.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Rejected student profile.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Rejected catalog data.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Solve boundary failure.
    #[error(transparent)]
    Solve(#[from] SolveError),
}
