//! Planning pipeline facade.
//!
//! Wires the eligibility filter, model encoder, solver seam, and result
//! extractor into one request-level operation. Each request builds an
//! entirely fresh, private model; the catalog and degree requirements are
//! shared read-only, so concurrent requests need no locking.

mod extract;

pub use extract::extract_schedule;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::encoder::PlanModelBuilder;
use crate::error::PlanError;
use crate::models::{CompleteSchedule, DegreeRequirements, StudentProfile};
use crate::solver::{MilpSolver, PlanSolver};

/// Reminder shown when the student stays on campus.
const FRONT_LOAD_ADVISORY: &str = "Since no study-abroad plan was given, required, political, \
     and physical-education courses are scheduled within the first six terms.";

/// A recommended plan plus any advisory notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The term-by-term schedule.
    pub schedule: CompleteSchedule,
    /// Optional front-loading reminder.
    pub advisory: Option<String>,
}

/// Request-level planning facade over shared reference data.
///
/// # Example
///
/// ```no_run
/// use course_plan::catalog::Catalog;
/// use course_plan::models::{DegreeRequirements, Standing, StudentProfile};
/// use course_plan::planner::Planner;
///
/// # fn main() -> Result<(), course_plan::error::PlanError> {
/// let catalog = Catalog::from_json(r#"[]"#)?;
/// let requirements = DegreeRequirements::standard();
/// let profile = StudentProfile::builder(Standing::Freshman).build()?;
///
/// let planner = Planner::new(&catalog, &requirements);
/// let recommendation = planner.recommend(&profile)?;
/// println!("{} credits", recommendation.schedule.total_credits());
/// # Ok(())
/// # }
/// ```
pub struct Planner<'a> {
    catalog: &'a Catalog,
    requirements: &'a DegreeRequirements,
}

impl<'a> Planner<'a> {
    /// Creates a planner over shared catalog and degree data.
    pub fn new(catalog: &'a Catalog, requirements: &'a DegreeRequirements) -> Self {
        Self {
            catalog,
            requirements,
        }
    }

    /// Produces a recommended multi-term plan with the bundled MILP solver.
    pub fn recommend(&self, profile: &StudentProfile) -> Result<Recommendation, PlanError> {
        self.recommend_with(&MilpSolver::new(), profile)
    }

    /// Produces a recommended plan with a caller-chosen solver.
    ///
    /// A failed or infeasible solve is terminal for the request; the
    /// caller must resubmit with different input to get a different
    /// outcome.
    pub fn recommend_with<S: PlanSolver>(
        &self,
        solver: &S,
        profile: &StudentProfile,
    ) -> Result<Recommendation, PlanError> {
        let model = PlanModelBuilder::new(self.catalog, self.requirements, profile).build();
        let solution = solver.solve(&model)?;
        let schedule = extract_schedule(&model, &solution, self.catalog, &profile.horizon());

        info!(
            terms = schedule.terms().len(),
            courses = schedule.course_count(),
            credits = schedule.total_credits(),
            "plan recommended"
        );

        let advisory = (!profile.study_abroad()).then(|| FRONT_LOAD_ADVISORY.to_string());
        Ok(Recommendation { schedule, advisory })
    }
}
