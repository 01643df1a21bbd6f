//! Degree requirement reference data.
//!
//! Static, per-program data: the required-course name set, the elective
//! categories with their minimum-credit thresholds, and the freshman
//! first-term anchor courses. Constructed once at process start and passed
//! explicitly into the model encoder — never ambient mutable state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Course;

/// An elective category: a set of accepted tags plus a minimum credit total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveCategory {
    /// Category name, for reporting.
    pub name: String,
    /// Tags that count toward this category.
    pub tags: BTreeSet<String>,
    /// Minimum credits a graduate must earn in this category.
    pub min_credits: u32,
}

impl ElectiveCategory {
    /// Creates a category with the given minimum credit threshold.
    pub fn new(name: impl Into<String>, min_credits: u32) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
            min_credits,
        }
    }

    /// Adds an accepted tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Whether a course counts toward this category (tag intersection).
    pub fn admits(&self, course: &Course) -> bool {
        course
            .category_tags
            .iter()
            .any(|tag| self.tags.contains(tag))
    }
}

/// Immutable degree-rule reference data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeRequirements {
    /// Names of courses every graduate must take.
    pub required_courses: BTreeSet<String>,
    /// Elective categories with credit thresholds.
    pub elective_categories: Vec<ElectiveCategory>,
    /// Orientation courses pinned to a freshman's first term.
    pub freshman_anchors: Vec<String>,
}

impl DegreeRequirements {
    /// Creates empty requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requirements seeded with the standard elective categories:
    /// finance electives (12 credits), China-related (4), other
    /// electives (8), each accepting its namesake tag.
    pub fn standard() -> Self {
        Self::new()
            .with_category(ElectiveCategory::new("finance-elective", 12).with_tag("finance-elective"))
            .with_category(ElectiveCategory::new("china-related", 4).with_tag("china-related"))
            .with_category(ElectiveCategory::new("other-elective", 8).with_tag("other-elective"))
    }

    /// Adds a required course name.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required_courses.insert(name.into());
        self
    }

    /// Adds an elective category.
    pub fn with_category(mut self, category: ElectiveCategory) -> Self {
        self.elective_categories.push(category);
        self
    }

    /// Adds a freshman first-term anchor course.
    pub fn with_anchor(mut self, name: impl Into<String>) -> Self {
        self.freshman_anchors.push(name.into());
        self
    }

    /// Whether `name` is a required course.
    pub fn is_required(&self, name: &str) -> bool {
        self.required_courses.contains(name)
    }
}
