//! MILP adapter over `good_lp`.
//!
//! Translates the declarative model into a `good_lp` problem (pure-Rust
//! `microlp` backend) and realizes the lexicographic objective stack by
//! sequential re-optimization: each level is solved with every earlier
//! level's expression pinned to its optimal value.

use good_lp::{constraint, default_solver, variable, variables, Expression, Solution, SolverModel, Variable};
use tracing::{debug, info};

use crate::error::SolveError;
use crate::model::{CmpOp, LinConstraint, LinExpr, ModelSolution, ObjectiveLevel, PlanModel, Sense};

use super::PlanSolver;

/// Tolerance used when pinning a solved objective level.
const LEVEL_TOLERANCE: f64 = 1e-6;

/// `good_lp`-backed mixed-integer solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpSolver;

impl MilpSolver {
    /// Creates the solver.
    pub fn new() -> Self {
        Self
    }
}

impl PlanSolver for MilpSolver {
    fn solve(&self, model: &PlanModel) -> Result<ModelSolution, SolveError> {
        // Constant constraints (no variable terms) are decided here; the
        // backend is only handed constraints with variables.
        for constraint in &model.constraints {
            if constraint.expr.is_empty() && !constraint.holds_trivially() {
                return Err(SolveError::NoSolution);
            }
        }
        if model.var_count() == 0 {
            return Ok(ModelSolution::default());
        }

        if model.objectives.is_empty() {
            let (solution, _) = solve_level(model, None, &[])?;
            return Ok(solution);
        }

        let mut pinned: Vec<(&ObjectiveLevel, f64)> = Vec::new();
        let mut best = None;
        for level in &model.objectives {
            let (solution, value) = solve_level(model, Some(level), &pinned)?;
            debug!(level = level.label, value, "objective level solved");
            pinned.push((level, value));
            best = Some(solution);
        }

        info!(levels = model.objectives.len(), "lexicographic solve complete");
        best.ok_or(SolveError::NoSolution)
    }
}

/// Solves one objective level with earlier levels pinned to their optima.
///
/// A fresh backend problem is built per level: variables, all hard
/// constraints, plus one pinning constraint per already-solved level
/// (`≤ opt + ε` for minimization, `≥ opt − ε` for maximization).
fn solve_level(
    model: &PlanModel,
    level: Option<&ObjectiveLevel>,
    pinned: &[(&ObjectiveLevel, f64)],
) -> Result<(ModelSolution, f64), SolveError> {
    let mut vars = variables!();
    let handles: Vec<Variable> = model
        .iter_vars()
        .map(|(_, kind)| {
            if kind.is_binary() {
                vars.add(variable().binary())
            } else {
                vars.add(variable().min(0.0))
            }
        })
        .collect();

    let objective = match level {
        Some(l) => to_expression(&l.expr, &handles),
        None => Expression::from(0.0),
    };
    let unsolved = match level.map(|l| l.sense) {
        Some(Sense::Maximize) => vars.maximise(objective),
        _ => vars.minimise(objective),
    };

    let mut problem = unsolved.using(default_solver);
    for constraint in &model.constraints {
        if constraint.expr.is_empty() {
            continue;
        }
        problem = problem.with(to_constraint(constraint, &handles));
    }
    for (prior, optimum) in pinned {
        let expr = to_expression(&prior.expr, &handles);
        problem = problem.with(match prior.sense {
            Sense::Minimize => constraint!(expr <= optimum + LEVEL_TOLERANCE),
            Sense::Maximize => constraint!(expr >= optimum - LEVEL_TOLERANCE),
        });
    }

    let solved = problem.solve().map_err(|_| SolveError::NoSolution)?;
    let values: Vec<f64> = handles.iter().map(|&v| solved.value(v)).collect();
    let solution = ModelSolution::new(values);
    let value = level.map(|l| solution.eval(&l.expr)).unwrap_or_default();
    Ok((solution, value))
}

fn to_expression(expr: &LinExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::from(expr.constant);
    for &(var, coeff) in &expr.terms {
        out += handles[var.0] * coeff;
    }
    out
}

fn to_constraint(constraint: &LinConstraint, handles: &[Variable]) -> good_lp::Constraint {
    let expr = to_expression(&constraint.expr, handles);
    let rhs = constraint.rhs;
    match constraint.op {
        CmpOp::Le => constraint!(expr <= rhs),
        CmpOp::Ge => constraint!(expr >= rhs),
        CmpOp::Eq => constraint!(expr == rhs),
    }
}
