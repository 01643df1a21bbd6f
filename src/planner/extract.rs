//! Result extraction.
//!
//! Reads the solved assignment back into per-term schedules. Extraction
//! never recovers partial results: it only runs on a solution the solver
//! reported optimal.

use crate::catalog::Catalog;
use crate::model::{ModelSolution, PlanModel, VarKind};
use crate::models::{CompleteSchedule, ScheduledCourse, SemesterSchedule, Term};

/// Builds the complete schedule from a solved model.
///
/// Every horizon term gets an entry, including terms the solver left
/// empty. Set take-variables (> 0.5) place their course's catalog
/// projection into the variable's term.
pub fn extract_schedule(
    model: &PlanModel,
    solution: &ModelSolution,
    catalog: &Catalog,
    horizon: &[Term],
) -> CompleteSchedule {
    let mut schedule = CompleteSchedule::new();
    for &term in horizon {
        schedule.insert(SemesterSchedule::new(term));
    }

    for (id, kind) in model.iter_vars() {
        if let VarKind::Take { course, term } = kind {
            if solution.is_set(id) {
                if let Some(entry) = catalog.get(course) {
                    schedule.add_course(*term, ScheduledCourse::from(entry));
                }
            }
        }
    }

    schedule
}
