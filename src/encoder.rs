//! Plan model encoder.
//!
//! Turns the filtered catalog, degree requirements, and student profile
//! into a [`PlanModel`]: one binary take-variable per (course, term) pair,
//! every academic rule as a linear constraint, and the student's stated
//! priorities as a lexicographic objective stack.
//!
//! # Constraints
//!
//! 1. Each course is taken at most once across the horizon.
//! 2. Per-term credits never exceed the student's cap.
//! 3. Terms 1–6 carry at least 9 credits; terms 7–8 at most 12.
//! 4. Time-conflicting course pairs are mutually exclusive per term.
//! 5. Parity-restricted courses are barred from opposite-parity terms.
//! 6. A course follows its unfinished in-catalog prerequisites strictly;
//!    at the first horizon term the empty prerequisite prefix forbids it.
//! 7. Required courses still in the catalog are scheduled exactly once.
//! 8. Elective categories meet their remaining credit thresholds.
//! 9. Without study abroad, required courses stay within terms 1–6.
//! 10. Freshman anchor courses are pinned to term 1.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::eligibility::eligible_courses;
use crate::model::{LinConstraint, LinExpr, ObjectiveLevel, PlanModel, Sense, VarId, VarKind};
use crate::models::{Course, DegreeRequirements, PlanningType, StudentProfile, Term};

/// Credit floor for every horizon term up to [`FULL_LOAD_LAST_TERM`].
const MIN_TERM_CREDITS: u32 = 9;

/// Last term subject to the full-load floor.
const FULL_LOAD_LAST_TERM: Term = 6;

/// Credit ceiling for terms after [`FULL_LOAD_LAST_TERM`].
const SENIOR_TERM_CREDIT_CAP: u32 = 12;

/// Builds the optimization model for one planning request.
///
/// Catalog and requirements are shared read-only reference data; the
/// produced model is private to the request.
///
/// # Example
///
/// ```
/// use course_plan::catalog::Catalog;
/// use course_plan::encoder::PlanModelBuilder;
/// use course_plan::models::{Course, DegreeRequirements, Standing, StudentProfile};
///
/// let catalog = Catalog::new(vec![Course::new(1, "Accounting", 3)]).unwrap();
/// let requirements = DegreeRequirements::new();
/// let profile = StudentProfile::builder(Standing::Freshman).build().unwrap();
///
/// let model = PlanModelBuilder::new(&catalog, &requirements, &profile).build();
/// assert_eq!(model.var_count(), 8); // one course × eight terms
/// ```
pub struct PlanModelBuilder<'a> {
    catalog: &'a Catalog,
    requirements: &'a DegreeRequirements,
    profile: &'a StudentProfile,
}

/// The variable grid: eligible courses × horizon terms.
struct Grid<'a> {
    courses: Vec<&'a Course>,
    index_by_name: HashMap<&'a str, usize>,
    horizon: Vec<Term>,
    /// `take[course][position]`, positions following `horizon` order.
    take: Vec<Vec<VarId>>,
}

impl Grid<'_> {
    fn term_pos(&self, term: Term) -> Option<usize> {
        self.horizon.iter().position(|&t| t == term)
    }
}

impl<'a> PlanModelBuilder<'a> {
    /// Creates a builder over shared reference data and a validated profile.
    pub fn new(
        catalog: &'a Catalog,
        requirements: &'a DegreeRequirements,
        profile: &'a StudentProfile,
    ) -> Self {
        Self {
            catalog,
            requirements,
            profile,
        }
    }

    /// Encodes the request into a declarative model.
    pub fn build(&self) -> PlanModel {
        let mut model = PlanModel::new();
        let grid = self.variable_grid(&mut model);

        self.placement_limits(&mut model, &grid);
        self.credit_loads(&mut model, &grid);
        self.time_conflicts(&mut model, &grid);
        self.term_offerings(&mut model, &grid);
        self.prerequisite_ordering(&mut model, &grid);
        self.required_coverage(&mut model, &grid);
        self.elective_quotas(&mut model, &grid);
        self.freshman_anchors(&mut model, &grid);
        self.objectives(&mut model, &grid);

        debug!(
            courses = grid.courses.len(),
            terms = grid.horizon.len(),
            vars = model.var_count(),
            constraints = model.constraint_count(),
            levels = model.objectives.len(),
            "plan model built"
        );
        model
    }

    fn variable_grid(&self, model: &mut PlanModel) -> Grid<'a> {
        let courses = eligible_courses(self.catalog, self.profile.completed_courses());
        let horizon = self.profile.horizon();
        let take = courses
            .iter()
            .map(|course| {
                horizon
                    .iter()
                    .map(|&term| {
                        model.add_var(VarKind::Take {
                            course: course.name.clone(),
                            term,
                        })
                    })
                    .collect()
            })
            .collect();
        let index_by_name = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.as_str(), i))
            .collect();
        Grid {
            courses,
            index_by_name,
            horizon,
            take,
        }
    }

    /// Credits scheduled in the horizon term at `pos`.
    fn term_credits(&self, grid: &Grid, pos: usize) -> LinExpr {
        let mut expr = LinExpr::new();
        for (i, course) in grid.courses.iter().enumerate() {
            expr.add_term(grid.take[i][pos], course.credits as f64);
        }
        expr
    }

    /// Credits scheduled anywhere in the horizon.
    fn total_credits(&self, grid: &Grid) -> LinExpr {
        let mut expr = LinExpr::new();
        for (i, course) in grid.courses.iter().enumerate() {
            for pos in 0..grid.horizon.len() {
                expr.add_term(grid.take[i][pos], course.credits as f64);
            }
        }
        expr
    }

    /// Credits scheduled among courses carrying a preferred tag.
    fn preferred_credits(&self, grid: &Grid) -> LinExpr {
        let tags = self.profile.preferred_categories();
        let mut expr = LinExpr::new();
        for (i, course) in grid.courses.iter().enumerate() {
            if course.has_any_tag(tags.iter().map(String::as_str)) {
                for pos in 0..grid.horizon.len() {
                    expr.add_term(grid.take[i][pos], course.credits as f64);
                }
            }
        }
        expr
    }

    /// Rule 1: each course at most once across the horizon.
    fn placement_limits(&self, model: &mut PlanModel, grid: &Grid) {
        for vars in &grid.take {
            let mut expr = LinExpr::new();
            for &var in vars {
                expr.add_term(var, 1.0);
            }
            model.add_constraint(LinConstraint::le(expr, 1.0));
        }
    }

    /// Rules 2 and 3: per-term ceiling, full-load floor, senior light load.
    fn credit_loads(&self, model: &mut PlanModel, grid: &Grid) {
        for (pos, &term) in grid.horizon.iter().enumerate() {
            let credits = self.term_credits(grid, pos);
            model.add_constraint(LinConstraint::le(
                credits.clone(),
                self.profile.credit_cap() as f64,
            ));
            if term <= FULL_LOAD_LAST_TERM {
                model.add_constraint(LinConstraint::ge(credits, MIN_TERM_CREDITS as f64));
            } else {
                model.add_constraint(LinConstraint::le(credits, SENIOR_TERM_CREDIT_CAP as f64));
            }
        }
    }

    /// Rule 4: conflicting pairs are mutually exclusive within a term.
    fn time_conflicts(&self, model: &mut PlanModel, grid: &Grid) {
        for (i, a) in grid.courses.iter().enumerate() {
            for (j, b) in grid.courses.iter().enumerate().skip(i + 1) {
                if !a.conflicts_with(b) {
                    continue;
                }
                for pos in 0..grid.horizon.len() {
                    let expr = LinExpr::term(grid.take[i][pos], 1.0).plus(grid.take[j][pos], 1.0);
                    model.add_constraint(LinConstraint::le(expr, 1.0));
                }
            }
        }
    }

    /// Rule 5: parity-restricted courses barred from opposite-parity terms.
    fn term_offerings(&self, model: &mut PlanModel, grid: &Grid) {
        for (i, course) in grid.courses.iter().enumerate() {
            for (pos, &term) in grid.horizon.iter().enumerate() {
                if course.offering.forbids(term) {
                    model.add_constraint(LinConstraint::eq(
                        LinExpr::term(grid.take[i][pos], 1.0),
                        0.0,
                    ));
                }
            }
        }
    }

    /// Rule 6: a course follows its unfinished in-catalog prerequisites.
    ///
    /// For every horizon term the prerequisite's take-variables over all
    /// strictly earlier horizon terms must cover the course's variable. At
    /// the first term the prefix is empty, which forbids the course there.
    /// Prerequisites that are completed or absent from the catalog are
    /// already satisfied and produce no constraint.
    fn prerequisite_ordering(&self, model: &mut PlanModel, grid: &Grid) {
        for (i, course) in grid.courses.iter().enumerate() {
            for prereq in &course.prerequisites {
                if let Some(&p) = grid.index_by_name.get(prereq.as_str()) {
                    for pos in 0..grid.horizon.len() {
                        let mut expr = LinExpr::new();
                        for prior in 0..pos {
                            expr.add_term(grid.take[p][prior], 1.0);
                        }
                        expr.add_term(grid.take[i][pos], -1.0);
                        model.add_constraint(LinConstraint::ge(expr, 0.0));
                    }
                }
            }
        }
    }

    /// Rules 7 and 9: required courses scheduled exactly once; without
    /// study abroad they must land within terms 1–6 whenever the horizon
    /// still reaches that window.
    fn required_coverage(&self, model: &mut PlanModel, grid: &Grid) {
        let front_load = !self.profile.study_abroad()
            && grid.horizon.iter().any(|&t| t <= FULL_LOAD_LAST_TERM);

        for name in &self.requirements.required_courses {
            if let Some(&i) = grid.index_by_name.get(name.as_str()) {
                let mut coverage = LinExpr::new();
                for &var in &grid.take[i] {
                    coverage.add_term(var, 1.0);
                }
                model.add_constraint(LinConstraint::eq(coverage, 1.0));

                if front_load {
                    for (pos, &term) in grid.horizon.iter().enumerate() {
                        if term > FULL_LOAD_LAST_TERM {
                            model.add_constraint(LinConstraint::eq(
                                LinExpr::term(grid.take[i][pos], 1.0),
                                0.0,
                            ));
                        }
                    }
                }
            }
        }
    }

    /// Rule 8: each elective category meets its remaining credit threshold.
    ///
    /// Credits already earned in a category (completed courses found in
    /// the full catalog whose tags match) reduce the threshold.
    fn elective_quotas(&self, model: &mut PlanModel, grid: &Grid) {
        for category in &self.requirements.elective_categories {
            let earned: u32 = self
                .profile
                .completed_courses()
                .iter()
                .filter_map(|name| self.catalog.get(name))
                .filter(|course| category.admits(course))
                .map(|course| course.credits)
                .sum();
            let remaining = category.min_credits.saturating_sub(earned);
            if remaining == 0 {
                continue;
            }

            let mut expr = LinExpr::new();
            for (i, course) in grid.courses.iter().enumerate() {
                if category.admits(course) {
                    for pos in 0..grid.horizon.len() {
                        expr.add_term(grid.take[i][pos], course.credits as f64);
                    }
                }
            }
            model.add_constraint(LinConstraint::ge(expr, remaining as f64));
        }
    }

    /// Rule 10: freshman anchor courses pinned to term 1.
    fn freshman_anchors(&self, model: &mut PlanModel, grid: &Grid) {
        if !self.profile.is_freshman() {
            return;
        }
        for name in &self.requirements.freshman_anchors {
            if let Some(&i) = grid.index_by_name.get(name.as_str()) {
                // A freshman's horizon starts at term 1.
                model.add_constraint(LinConstraint::eq(
                    LinExpr::term(grid.take[i][0], 1.0),
                    1.0,
                ));
            }
        }
    }

    /// Builds the lexicographic objective stack.
    fn objectives(&self, model: &mut PlanModel, grid: &Grid) {
        let primary = match (
            self.profile.planning_type(),
            self.profile.target_credits_per_term(),
        ) {
            (PlanningType::BalancedWorkload, Some(target)) => {
                self.balanced_deviation(model, grid, target)
            }
            (PlanningType::FocusedDepth, _) => ObjectiveLevel {
                label: "preferred-credits",
                sense: Sense::Maximize,
                expr: self.preferred_credits(grid),
            },
            (PlanningType::MaximumIntensity, _) => ObjectiveLevel {
                label: "total-credits",
                sense: Sense::Maximize,
                expr: self.total_credits(grid),
            },
            // MinimalEffort; a balanced profile always carries a target by
            // profile validation.
            _ => ObjectiveLevel {
                label: "total-credits",
                sense: Sense::Minimize,
                expr: self.total_credits(grid),
            },
        };
        model.add_objective(primary);

        if let Some(term) = self.profile.internship_term() {
            if let Some(pos) = grid.term_pos(term) {
                let mut count = LinExpr::new();
                for vars in &grid.take {
                    count.add_term(vars[pos], 1.0);
                }
                model.add_objective(ObjectiveLevel {
                    label: "internship-course-count",
                    sense: Sense::Minimize,
                    expr: count,
                });
            }
        }

        // Redundant when FocusedDepth already maximizes the same expression.
        if !self.profile.preferred_categories().is_empty()
            && self.profile.planning_type() != PlanningType::FocusedDepth
        {
            model.add_objective(ObjectiveLevel {
                label: "preferred-credits",
                sense: Sense::Maximize,
                expr: self.preferred_credits(grid),
            });
        }
    }

    /// Balanced-workload deviation: one non-negative over/under pair per
    /// term, tied to the term's credits by an equality constraint.
    fn balanced_deviation(&self, model: &mut PlanModel, grid: &Grid, target: u32) -> ObjectiveLevel {
        let mut deviation = LinExpr::new();
        for (pos, &term) in grid.horizon.iter().enumerate() {
            let over = model.add_var(VarKind::OverTarget { term });
            let under = model.add_var(VarKind::UnderTarget { term });
            // credits(term) − over + under = target
            let tie = self.term_credits(grid, pos).plus(over, -1.0).plus(under, 1.0);
            model.add_constraint(LinConstraint::eq(tie, target as f64));
            deviation = deviation.plus(over, 1.0).plus(under, 1.0);
        }
        ObjectiveLevel {
            label: "balanced-deviation",
            sense: Sense::Minimize,
            expr: deviation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CmpOp;
    use crate::models::{Standing, TermOffering, TermParity};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course::new(1, "Principles of Economics", 3).with_slot("Mon", 1, 2),
            Course::new(2, "Econometrics", 3)
                .with_slot("Tue", 1, 2)
                .with_prerequisite("Principles of Economics"),
            Course::new(3, "Risk Management", 3)
                .with_slot("Mon", 2, 3)
                .with_tag("finance-elective"),
            Course::new(4, "Chinese Economy", 2)
                .with_slot("Thu", 5, 6)
                .with_offering(TermOffering::Parity(TermParity::Odd))
                .with_tag("china-related"),
        ])
        .unwrap()
    }

    fn freshman() -> StudentProfile {
        StudentProfile::builder(Standing::Freshman).build().unwrap()
    }

    fn build(requirements: &DegreeRequirements, profile: &StudentProfile) -> PlanModel {
        PlanModelBuilder::new(&catalog(), requirements, profile).build()
    }

    fn take_var(model: &PlanModel, course: &str, term: Term) -> VarId {
        model
            .iter_vars()
            .find(|(_, kind)| {
                matches!(kind, VarKind::Take { course: c, term: t } if c == course && *t == term)
            })
            .map(|(id, _)| id)
            .unwrap()
    }

    fn has_pinned_zero(model: &PlanModel, var: VarId) -> bool {
        model.constraints.iter().any(|c| {
            c.op == CmpOp::Eq && c.rhs == 0.0 && c.expr.terms == vec![(var, 1.0)]
        })
    }

    #[test]
    fn test_variable_grid_size() {
        let model = build(&DegreeRequirements::new(), &freshman());
        // 4 courses × 8 terms, no deviation variables.
        assert_eq!(model.var_count(), 32);
        assert!(model.iter_vars().all(|(_, k)| k.is_binary()));
    }

    #[test]
    fn test_completed_courses_shrink_grid() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_completed("Risk Management")
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);
        assert_eq!(model.var_count(), 24);
    }

    #[test]
    fn test_parity_restriction_pins_even_terms() {
        let model = build(&DegreeRequirements::new(), &freshman());
        for term in [2, 4, 6, 8] {
            let var = take_var(&model, "Chinese Economy", term);
            assert!(has_pinned_zero(&model, var), "term {term} should be barred");
        }
        for term in [1, 3, 5, 7] {
            let var = take_var(&model, "Chinese Economy", term);
            assert!(!has_pinned_zero(&model, var));
        }
    }

    #[test]
    fn test_prerequisite_forbidden_in_first_term() {
        let model = build(&DegreeRequirements::new(), &freshman());
        let first = take_var(&model, "Econometrics", 1);
        // The empty-prefix ordering constraint reduces to −x ≥ 0.
        assert!(model.constraints.iter().any(|c| {
            c.op == CmpOp::Ge && c.rhs == 0.0 && c.expr.terms == vec![(first, -1.0)]
        }));
    }

    #[test]
    fn test_completed_prerequisite_is_satisfied() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_completed("Principles of Economics")
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);
        let first = take_var(&model, "Econometrics", 1);
        // No ordering constraint is emitted for a completed prerequisite.
        assert!(!model.constraints.iter().any(|c| {
            c.expr.terms.contains(&(first, -1.0))
        }));
    }

    #[test]
    fn test_required_coverage_and_front_loading() {
        let requirements = DegreeRequirements::new().with_required("Principles of Economics");
        let model = build(&requirements, &freshman());

        // Exactly-once coverage over all eight terms.
        assert!(model.constraints.iter().any(|c| {
            c.op == CmpOp::Eq && c.rhs == 1.0 && c.expr.terms.len() == 8
        }));

        // Not studying abroad: barred from terms 7 and 8.
        for term in [7, 8] {
            let var = take_var(&model, "Principles of Economics", term);
            assert!(has_pinned_zero(&model, var));
        }
    }

    #[test]
    fn test_study_abroad_lifts_front_loading() {
        let requirements = DegreeRequirements::new().with_required("Principles of Economics");
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_study_abroad(true)
            .build()
            .unwrap();
        let model = PlanModelBuilder::new(&catalog(), &requirements, &profile).build();

        for term in [7, 8] {
            let var = take_var(&model, "Principles of Economics", term);
            assert!(!has_pinned_zero(&model, var));
        }
    }

    #[test]
    fn test_elective_quota_offsets_earned_credits() {
        let requirements = DegreeRequirements::new().with_category(
            crate::models::ElectiveCategory::new("china-related", 4).with_tag("china-related"),
        );

        // Nothing completed: a ≥ 4 quota constraint exists.
        let model = build(&requirements, &freshman());
        assert!(model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Ge && c.rhs == 4.0));

        // Completing the 2-credit tagged course halves the threshold.
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_completed("Chinese Economy")
            .build()
            .unwrap();
        let model = build(&requirements, &profile);
        assert!(model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Ge && c.rhs == 2.0));
        assert!(!model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Ge && c.rhs == 4.0));
    }

    #[test]
    fn test_freshman_anchor_pinned_to_term_one() {
        let requirements = DegreeRequirements::new().with_anchor("Principles of Economics");
        let model = build(&requirements, &freshman());
        let var = take_var(&model, "Principles of Economics", 1);
        assert!(model.constraints.iter().any(|c| {
            c.op == CmpOp::Eq && c.rhs == 1.0 && c.expr.terms == vec![(var, 1.0)]
        }));

        // Anchors only bind freshmen.
        let enrolled = StudentProfile::builder(Standing::Enrolled { grade: 2, term: 1 })
            .build()
            .unwrap();
        let model = PlanModelBuilder::new(&catalog(), &requirements, &enrolled).build();
        assert!(!model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Eq && c.rhs == 1.0 && c.expr.terms.len() == 1));
    }

    #[test]
    fn test_time_conflict_exclusion() {
        let model = build(&DegreeRequirements::new(), &freshman());
        // Principles of Economics (Mon 1-2) and Risk Management (Mon 2-3)
        // collide; their term-1 variables share a ≤ 1 constraint.
        let a = take_var(&model, "Principles of Economics", 1);
        let b = take_var(&model, "Risk Management", 1);
        assert!(model.constraints.iter().any(|c| {
            c.op == CmpOp::Le
                && c.rhs == 1.0
                && c.expr.terms.len() == 2
                && c.expr.terms.contains(&(a, 1.0))
                && c.expr.terms.contains(&(b, 1.0))
        }));
    }

    #[test]
    fn test_senior_terms_get_light_load() {
        let profile = StudentProfile::builder(Standing::Enrolled { grade: 4, term: 1 })
            .build()
            .unwrap();
        let model = PlanModelBuilder::new(&catalog(), &DegreeRequirements::new(), &profile).build();
        // Horizon is term 8 only: a ≤ 12 senior cap, no ≥ 9 floor.
        assert!(model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Le && c.rhs == 12.0));
        assert!(!model
            .constraints
            .iter()
            .any(|c| c.op == CmpOp::Ge && c.rhs == 9.0));
    }

    #[test]
    fn test_balanced_workload_adds_deviation_pairs() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::BalancedWorkload)
            .with_target_credits(15)
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);

        // 32 take variables + 8 over/under pairs.
        assert_eq!(model.var_count(), 48);
        let ties = model
            .constraints
            .iter()
            .filter(|c| c.op == CmpOp::Eq && c.rhs == 15.0)
            .count();
        assert_eq!(ties, 8);
        assert_eq!(model.objectives[0].label, "balanced-deviation");
        assert_eq!(model.objectives[0].sense, Sense::Minimize);
    }

    #[test]
    fn test_objective_stack_ordering() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_internship_term(7)
            .with_preferred_category("finance-elective")
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);

        let labels: Vec<&str> = model.objectives.iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["total-credits", "internship-course-count", "preferred-credits"]
        );
        assert_eq!(model.objectives[0].sense, Sense::Minimize);
        assert_eq!(model.objectives[2].sense, Sense::Maximize);
    }

    #[test]
    fn test_focused_depth_skips_duplicate_preference_level() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::FocusedDepth)
            .with_preferred_category("finance-elective")
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);

        let labels: Vec<&str> = model.objectives.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["preferred-credits"]);
        assert_eq!(model.objectives[0].sense, Sense::Maximize);
    }

    #[test]
    fn test_internship_outside_horizon_is_dropped() {
        let profile = StudentProfile::builder(Standing::Enrolled { grade: 3, term: 2 })
            .with_internship_term(3)
            .build()
            .unwrap();
        let model = PlanModelBuilder::new(&catalog(), &DegreeRequirements::new(), &profile).build();
        assert!(model
            .objectives
            .iter()
            .all(|o| o.label != "internship-course-count"));
    }

    #[test]
    fn test_maximum_intensity_maximizes_total() {
        let profile = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::MaximumIntensity)
            .build()
            .unwrap();
        let model = build(&DegreeRequirements::new(), &profile);
        assert_eq!(model.objectives[0].label, "total-credits");
        assert_eq!(model.objectives[0].sense, Sense::Maximize);
    }
}
