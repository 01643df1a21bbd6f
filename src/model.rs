//! Declarative linear constraint model.
//!
//! The encoder emits this solver-neutral representation — variables,
//! linear constraints, and a strict priority-ordered objective stack —
//! and adapters in [`crate::solver`] translate it for a concrete backend.
//! A fresh, private model is built per planning request.

use serde::{Deserialize, Serialize};

use crate::models::Term;

/// Handle to a decision variable within one [`PlanModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VarId(pub usize);

/// What a decision variable decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VarKind {
    /// Binary: the named course is taken in the given term.
    Take { course: String, term: Term },
    /// Non-negative credit deviation above the per-term target.
    OverTarget { term: Term },
    /// Non-negative credit deviation below the per-term target.
    UnderTarget { term: Term },
}

impl VarKind {
    /// Whether the variable is binary (take variables are; deviation
    /// variables are continuous non-negative).
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Take { .. })
    }
}

/// Linear expression `Σ coeff·var + constant`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinExpr {
    /// Variable terms.
    pub terms: Vec<(VarId, f64)>,
    /// Constant offset.
    pub constant: f64,
}

impl LinExpr {
    /// Creates an empty (zero) expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-term expression.
    pub fn term(var: VarId, coeff: f64) -> Self {
        Self {
            terms: vec![(var, coeff)],
            constant: 0.0,
        }
    }

    /// Appends a term.
    pub fn add_term(&mut self, var: VarId, coeff: f64) {
        self.terms.push((var, coeff));
    }

    /// Builder form of [`add_term`](Self::add_term).
    pub fn plus(mut self, var: VarId, coeff: f64) -> Self {
        self.add_term(var, coeff);
        self
    }

    /// Whether the expression has no variable terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Constraint comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    /// `expr ≤ rhs`
    Le,
    /// `expr ≥ rhs`
    Ge,
    /// `expr = rhs`
    Eq,
}

/// A linear constraint `expr ⋈ rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinConstraint {
    /// Left-hand side.
    pub expr: LinExpr,
    /// Comparison operator.
    pub op: CmpOp,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinConstraint {
    /// `expr ≤ rhs`
    pub fn le(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            op: CmpOp::Le,
            rhs,
        }
    }

    /// `expr ≥ rhs`
    pub fn ge(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            op: CmpOp::Ge,
            rhs,
        }
    }

    /// `expr = rhs`
    pub fn eq(expr: LinExpr, rhs: f64) -> Self {
        Self {
            expr,
            op: CmpOp::Eq,
            rhs,
        }
    }

    /// Whether the constraint holds for constant expressions (no variable
    /// terms). Used to decide trivial models without a solver.
    pub fn holds_trivially(&self) -> bool {
        if !self.expr.is_empty() {
            return false;
        }
        match self.op {
            CmpOp::Le => self.expr.constant <= self.rhs,
            CmpOp::Ge => self.expr.constant >= self.rhs,
            CmpOp::Eq => (self.expr.constant - self.rhs).abs() < f64::EPSILON,
        }
    }
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// Smaller is better.
    Minimize,
    /// Larger is better.
    Maximize,
}

/// One level of the lexicographic objective stack.
///
/// A level is optimized only among solutions optimal at all earlier levels.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveLevel {
    /// Short label for logging.
    pub label: &'static str,
    /// Optimization direction.
    pub sense: Sense,
    /// The objective expression.
    pub expr: LinExpr,
}

/// The complete declarative model for one planning request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanModel {
    vars: Vec<VarKind>,
    /// Hard constraints.
    pub constraints: Vec<LinConstraint>,
    /// Objective stack, highest priority first.
    pub objectives: Vec<ObjectiveLevel>,
}

impl PlanModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decision variable and returns its handle.
    pub fn add_var(&mut self, kind: VarKind) -> VarId {
        self.vars.push(kind);
        VarId(self.vars.len() - 1)
    }

    /// The kind of a registered variable.
    pub fn var(&self, id: VarId) -> &VarKind {
        &self.vars[id.0]
    }

    /// Iterates over (handle, kind) pairs.
    pub fn iter_vars(&self) -> impl Iterator<Item = (VarId, &VarKind)> {
        self.vars.iter().enumerate().map(|(i, k)| (VarId(i), k))
    }

    /// Number of decision variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of hard constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Adds a hard constraint.
    pub fn add_constraint(&mut self, constraint: LinConstraint) {
        self.constraints.push(constraint);
    }

    /// Appends an objective level (lower priority than all earlier levels).
    pub fn add_objective(&mut self, level: ObjectiveLevel) {
        self.objectives.push(level);
    }
}

/// A solved assignment of values to a model's variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSolution {
    values: Vec<f64>,
}

impl ModelSolution {
    /// Wraps raw solver values, indexed by [`VarId`].
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The solved value of a variable.
    pub fn value(&self, id: VarId) -> f64 {
        self.values[id.0]
    }

    /// Whether a binary variable is set in this solution.
    pub fn is_set(&self, id: VarId) -> bool {
        self.value(id) > 0.5
    }

    /// Evaluates an expression under this solution.
    pub fn eval(&self, expr: &LinExpr) -> f64 {
        expr.constant
            + expr
                .terms
                .iter()
                .map(|(var, coeff)| coeff * self.value(*var))
                .sum::<f64>()
    }
}
