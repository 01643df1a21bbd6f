//! Student profile and planning horizon.
//!
//! A profile is only obtainable through [`ProfileBuilder::build`], which
//! performs every range and cross-field check. Deserialization routes
//! through the same builder, so an invalid profile can never reach the
//! model encoder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ValidationError;

use super::{Term, TERM_COUNT};

/// Where the student currently stands in the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Incoming student: grade 1, term 1, full eight-term horizon.
    Freshman,
    /// Enrolled student at `grade` (1–4), `term` (1–2) within the grade.
    Enrolled { grade: u8, term: u8 },
}

/// Overall planning intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningType {
    /// Satisfy degree rules with the fewest total credits.
    #[default]
    MinimalEffort,
    /// Keep each term close to a stated credit target.
    BalancedWorkload,
    /// Concentrate credits in the preferred categories.
    FocusedDepth,
    /// Maximize total credits.
    MaximumIntensity,
}

const CREDIT_CAP_MIN: u32 = 9;
const CREDIT_CAP_MAX: u32 = 20;
const MAX_PREFERRED_CATEGORIES: usize = 3;

/// A validated student profile.
///
/// Fields are read through accessors; the struct is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileBuilder")]
pub struct StudentProfile {
    standing: Standing,
    completed_courses: BTreeSet<String>,
    study_abroad: bool,
    internship_term: Option<Term>,
    planning_type: PlanningType,
    target_credits_per_term: Option<u32>,
    preferred_categories: Vec<String>,
    credit_cap: u32,
}

impl StudentProfile {
    /// Starts building a profile for the given standing.
    pub fn builder(standing: Standing) -> ProfileBuilder {
        ProfileBuilder::new(standing)
    }

    /// The student's standing.
    pub fn standing(&self) -> Standing {
        self.standing
    }

    /// Whether the student is an incoming freshman.
    pub fn is_freshman(&self) -> bool {
        matches!(self.standing, Standing::Freshman)
    }

    /// Names of courses already completed.
    pub fn completed_courses(&self) -> &BTreeSet<String> {
        &self.completed_courses
    }

    /// Whether the student plans to study abroad.
    pub fn study_abroad(&self) -> bool {
        self.study_abroad
    }

    /// Declared internship term, if an internship is planned.
    pub fn internship_term(&self) -> Option<Term> {
        self.internship_term
    }

    /// The chosen planning type.
    pub fn planning_type(&self) -> PlanningType {
        self.planning_type
    }

    /// Per-term credit target (present iff balanced workload).
    pub fn target_credits_per_term(&self) -> Option<u32> {
        self.target_credits_per_term
    }

    /// Preferred category tags (at most three).
    pub fn preferred_categories(&self) -> &[String] {
        &self.preferred_categories
    }

    /// Per-term credit ceiling.
    pub fn credit_cap(&self) -> u32 {
        self.credit_cap
    }

    /// Terms remaining to plan, in order: 1..=8 for a freshman, otherwise
    /// `(2·(grade−1)+term+1)..=8`. Non-empty by validation.
    pub fn horizon(&self) -> Vec<Term> {
        let first = match self.standing {
            Standing::Freshman => 1,
            Standing::Enrolled { grade, term } => 2 * (grade - 1) + term + 1,
        };
        (first..=TERM_COUNT).collect()
    }
}

impl TryFrom<ProfileBuilder> for StudentProfile {
    type Error = ValidationError;

    fn try_from(builder: ProfileBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Builder for [`StudentProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBuilder {
    standing: Standing,
    #[serde(default)]
    completed_courses: BTreeSet<String>,
    #[serde(default)]
    study_abroad: bool,
    #[serde(default)]
    internship_term: Option<Term>,
    #[serde(default)]
    planning_type: PlanningType,
    #[serde(default)]
    target_credits_per_term: Option<u32>,
    #[serde(default)]
    preferred_categories: Vec<String>,
    #[serde(default = "default_credit_cap")]
    credit_cap: u32,
}

fn default_credit_cap() -> u32 {
    CREDIT_CAP_MAX
}

impl ProfileBuilder {
    /// Creates a builder with defaults: no completed courses, no study
    /// abroad, no internship, minimal-effort planning, credit cap 20.
    pub fn new(standing: Standing) -> Self {
        Self {
            standing,
            completed_courses: BTreeSet::new(),
            study_abroad: false,
            internship_term: None,
            planning_type: PlanningType::default(),
            target_credits_per_term: None,
            preferred_categories: Vec::new(),
            credit_cap: default_credit_cap(),
        }
    }

    /// Marks a course as completed.
    pub fn with_completed(mut self, name: impl Into<String>) -> Self {
        self.completed_courses.insert(name.into());
        self
    }

    /// Marks several courses as completed.
    pub fn with_completed_courses<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_courses
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the study-abroad flag.
    pub fn with_study_abroad(mut self, study_abroad: bool) -> Self {
        self.study_abroad = study_abroad;
        self
    }

    /// Declares an internship in the given term.
    pub fn with_internship_term(mut self, term: Term) -> Self {
        self.internship_term = Some(term);
        self
    }

    /// Sets the planning type.
    pub fn with_planning_type(mut self, planning_type: PlanningType) -> Self {
        self.planning_type = planning_type;
        self
    }

    /// Sets the per-term credit target (balanced workload only).
    pub fn with_target_credits(mut self, target: u32) -> Self {
        self.target_credits_per_term = Some(target);
        self
    }

    /// Adds a preferred category tag.
    pub fn with_preferred_category(mut self, tag: impl Into<String>) -> Self {
        self.preferred_categories.push(tag.into());
        self
    }

    /// Sets the per-term credit ceiling.
    pub fn with_credit_cap(mut self, cap: u32) -> Self {
        self.credit_cap = cap;
        self
    }

    /// Validates and produces the profile.
    pub fn build(self) -> Result<StudentProfile, ValidationError> {
        if let Standing::Enrolled { grade, term } = self.standing {
            if !(1..=4).contains(&grade) {
                return Err(ValidationError::GradeOutOfRange(grade));
            }
            if !(1..=2).contains(&term) {
                return Err(ValidationError::TermOutOfRange(term));
            }
            if 2 * (grade - 1) + term >= TERM_COUNT {
                return Err(ValidationError::EmptyHorizon { grade, term });
            }
        }

        if !(CREDIT_CAP_MIN..=CREDIT_CAP_MAX).contains(&self.credit_cap) {
            return Err(ValidationError::CreditCapOutOfRange(self.credit_cap));
        }

        if let Some(term) = self.internship_term {
            if !(1..=TERM_COUNT).contains(&term) {
                return Err(ValidationError::InternshipTermOutOfRange(term));
            }
        }

        match (self.planning_type, self.target_credits_per_term) {
            (PlanningType::BalancedWorkload, None) => {
                return Err(ValidationError::MissingTargetCredits)
            }
            (PlanningType::BalancedWorkload, Some(target))
                if !(CREDIT_CAP_MIN..=CREDIT_CAP_MAX).contains(&target) =>
            {
                return Err(ValidationError::TargetCreditsOutOfRange(target))
            }
            (PlanningType::BalancedWorkload, Some(_)) => {}
            (_, Some(_)) => return Err(ValidationError::UnexpectedTargetCredits),
            (_, None) => {}
        }

        if self.preferred_categories.len() > MAX_PREFERRED_CATEGORIES {
            return Err(ValidationError::TooManyPreferredCategories(
                self.preferred_categories.len(),
            ));
        }

        Ok(StudentProfile {
            standing: self.standing,
            completed_courses: self.completed_courses,
            study_abroad: self.study_abroad,
            internship_term: self.internship_term,
            planning_type: self.planning_type,
            target_credits_per_term: self.target_credits_per_term,
            preferred_categories: self.preferred_categories,
            credit_cap: self.credit_cap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshman_horizon_is_full() {
        let profile = StudentProfile::builder(Standing::Freshman).build().unwrap();
        assert!(profile.is_freshman());
        assert_eq!(profile.horizon(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_enrolled_horizon() {
        let profile = StudentProfile::builder(Standing::Enrolled { grade: 3, term: 2 })
            .build()
            .unwrap();
        assert_eq!(profile.horizon(), vec![7, 8]);

        let profile = StudentProfile::builder(Standing::Enrolled { grade: 1, term: 1 })
            .build()
            .unwrap();
        assert_eq!(profile.horizon(), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_grade_and_term_ranges() {
        let err = StudentProfile::builder(Standing::Enrolled { grade: 5, term: 1 })
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::GradeOutOfRange(5));

        let err = StudentProfile::builder(Standing::Enrolled { grade: 2, term: 3 })
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TermOutOfRange(3));
    }

    #[test]
    fn test_final_term_has_empty_horizon() {
        let err = StudentProfile::builder(Standing::Enrolled { grade: 4, term: 2 })
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyHorizon { grade: 4, term: 2 });
    }

    #[test]
    fn test_credit_cap_range() {
        let err = StudentProfile::builder(Standing::Freshman)
            .with_credit_cap(8)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::CreditCapOutOfRange(8));

        let err = StudentProfile::builder(Standing::Freshman)
            .with_credit_cap(21)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::CreditCapOutOfRange(21));
    }

    #[test]
    fn test_internship_term_range() {
        let err = StudentProfile::builder(Standing::Freshman)
            .with_internship_term(9)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::InternshipTermOutOfRange(9));

        let profile = StudentProfile::builder(Standing::Freshman)
            .with_internship_term(7)
            .build()
            .unwrap();
        assert_eq!(profile.internship_term(), Some(7));
    }

    #[test]
    fn test_target_credits_iff_balanced() {
        let err = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::BalancedWorkload)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingTargetCredits);

        let err = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::BalancedWorkload)
            .with_target_credits(25)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TargetCreditsOutOfRange(25));

        let err = StudentProfile::builder(Standing::Freshman)
            .with_target_credits(15)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::UnexpectedTargetCredits);

        let profile = StudentProfile::builder(Standing::Freshman)
            .with_planning_type(PlanningType::BalancedWorkload)
            .with_target_credits(15)
            .build()
            .unwrap();
        assert_eq!(profile.target_credits_per_term(), Some(15));
    }

    #[test]
    fn test_preferred_category_limit() {
        let err = StudentProfile::builder(Standing::Freshman)
            .with_preferred_category("a")
            .with_preferred_category("b")
            .with_preferred_category("c")
            .with_preferred_category("d")
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::TooManyPreferredCategories(4));
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: StudentProfile = serde_json::from_value(serde_json::json!({
            "standing": {"enrolled": {"grade": 2, "term": 1}},
            "completed_courses": ["Microeconomics"],
            "credit_cap": 12
        }))
        .unwrap();
        assert_eq!(ok.horizon(), vec![4, 5, 6, 7, 8]);
        assert_eq!(ok.planning_type(), PlanningType::MinimalEffort);

        let bad = serde_json::from_value::<StudentProfile>(serde_json::json!({
            "standing": "freshman",
            "credit_cap": 30
        }));
        assert!(bad.is_err());
    }
}
