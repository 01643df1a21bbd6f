//! Eligibility filtering.
//!
//! Restricts the catalog to courses the student has not yet completed.
//! This is the only filtering step: prerequisite satisfaction is
//! deliberately NOT checked here, because a prerequisite may legitimately
//! be scheduled earlier within the same horizon. Prerequisites enter the
//! model as temporal constraints instead.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::models::Course;

/// Catalog entries still available to schedule: everything whose name is
/// not in the completed set.
pub fn eligible_courses<'a>(catalog: &'a Catalog, completed: &BTreeSet<String>) -> Vec<&'a Course> {
    catalog
        .all()
        .iter()
        .filter(|course| !completed.contains(&course.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course::new(1, "Microeconomics", 3),
            Course::new(2, "Macroeconomics", 3).with_prerequisite("Microeconomics"),
            Course::new(3, "Accounting", 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_completed_courses_are_dropped() {
        let completed: BTreeSet<String> = ["Accounting".to_string()].into_iter().collect();
        let catalog = catalog();
        let eligible = eligible_courses(&catalog, &completed);
        let names: Vec<&str> = eligible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Microeconomics", "Macroeconomics"]);
    }

    #[test]
    fn test_unmet_prerequisites_do_not_filter() {
        // Macroeconomics stays eligible even though its prerequisite is
        // not completed; ordering is the encoder's job.
        let catalog = catalog();
        let eligible = eligible_courses(&catalog, &BTreeSet::new());
        assert_eq!(eligible.len(), 3);
    }

    #[test]
    fn test_unknown_completed_names_are_ignored() {
        let completed: BTreeSet<String> = ["Underwater Basket Weaving".to_string()]
            .into_iter()
            .collect();
        assert_eq!(eligible_courses(&catalog(), &completed).len(), 3);
    }
}
