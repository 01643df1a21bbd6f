//! Solver capability seam.
//!
//! The engine emits a declarative [`PlanModel`] and receives either an
//! optimal assignment or an infeasibility signal; the search algorithm
//! behind the seam is opaque. Any backend implementing [`PlanSolver`] can
//! stand behind it — the bundled adapter is [`MilpSolver`].
//!
//! Solving is synchronous and blocking, with no cancellation or timeout
//! hook, and there is no retry policy: a failed solve is terminal for the
//! request.

mod milp;

pub use milp::MilpSolver;

use crate::error::SolveError;
use crate::model::{ModelSolution, PlanModel};

/// A solver capable of optimizing a [`PlanModel`].
pub trait PlanSolver {
    /// Returns an assignment optimal for the full lexicographic objective
    /// stack, or [`SolveError`] when the model cannot be solved to
    /// optimality (infeasible or any other non-success status).
    fn solve(&self, model: &PlanModel) -> Result<ModelSolution, SolveError>;
}
