//! Recommended plan (solution) model.
//!
//! A complete schedule maps each horizon term to the courses placed there.
//! Built once by the result extractor from a solved model; never mutated
//! after construction. Credit totals are pure derived sums.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Course, CourseExtras, Term, TimeSlot};

/// A course as it appears in a recommended plan.
///
/// A display projection of the catalog entry: name, credits, tags, meeting
/// slots, plus whatever optional details the catalog provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// Course display name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Category tags.
    pub category_tags: BTreeSet<String>,
    /// Weekly meeting slots.
    pub time_slots: Vec<TimeSlot>,
    /// Display-only extras (teacher, location, note).
    #[serde(flatten)]
    pub extras: CourseExtras,
}

impl From<&Course> for ScheduledCourse {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            credits: course.credits,
            category_tags: course.category_tags.clone(),
            time_slots: course.time_slots.clone(),
            extras: course.extras.clone(),
        }
    }
}

/// One term's recommended course load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterSchedule {
    /// Term number (1–8).
    pub term: Term,
    /// Courses placed in this term.
    pub courses: Vec<ScheduledCourse>,
}

impl SemesterSchedule {
    /// Creates an empty schedule for a term.
    pub fn new(term: Term) -> Self {
        Self {
            term,
            courses: Vec::new(),
        }
    }

    /// Adds a course to this term.
    pub fn add_course(&mut self, course: ScheduledCourse) {
        self.courses.push(course);
    }

    /// Total credits placed in this term.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Number of courses placed in this term.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether a course with the given name is placed here.
    pub fn contains(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c.name == name)
    }

    /// Whether any two courses in this term collide in time.
    pub fn has_conflicts(&self) -> bool {
        for (i, a) in self.courses.iter().enumerate() {
            for b in &self.courses[i + 1..] {
                let collide = a
                    .time_slots
                    .iter()
                    .any(|s| b.time_slots.iter().any(|t| s.conflicts_with(t)));
                if collide {
                    return true;
                }
            }
        }
        false
    }
}

/// The full multi-term recommendation, keyed by term number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteSchedule {
    /// Per-term schedules, one entry per horizon term (possibly empty).
    pub semesters: BTreeMap<Term, SemesterSchedule>,
}

impl CompleteSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a term schedule, replacing any existing entry for the term.
    pub fn insert(&mut self, semester: SemesterSchedule) {
        self.semesters.insert(semester.term, semester);
    }

    /// Adds a course to the given term, creating the term entry if needed.
    pub fn add_course(&mut self, term: Term, course: ScheduledCourse) {
        self.semesters
            .entry(term)
            .or_insert_with(|| SemesterSchedule::new(term))
            .add_course(course);
    }

    /// The schedule for a term, if present.
    pub fn term(&self, term: Term) -> Option<&SemesterSchedule> {
        self.semesters.get(&term)
    }

    /// Terms covered by this schedule, in order.
    pub fn terms(&self) -> Vec<Term> {
        self.semesters.keys().copied().collect()
    }

    /// Total credits across all terms.
    pub fn total_credits(&self) -> u32 {
        self.semesters.values().map(|s| s.total_credits()).sum()
    }

    /// Total number of placed courses.
    pub fn course_count(&self) -> usize {
        self.semesters.values().map(|s| s.course_count()).sum()
    }

    /// The term a course is placed in, if any.
    pub fn course_term(&self, name: &str) -> Option<Term> {
        self.semesters
            .values()
            .find(|s| s.contains(name))
            .map(|s| s.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, credits: u32, weekday: &str, start: u8, end: u8) -> ScheduledCourse {
        ScheduledCourse::from(&Course::new(0, name, credits).with_slot(weekday, start, end))
    }

    fn sample_schedule() -> CompleteSchedule {
        let mut complete = CompleteSchedule::new();
        complete.add_course(1, course("Microeconomics", 3, "Mon", 1, 2));
        complete.add_course(1, course("Accounting", 3, "Tue", 1, 2));
        complete.add_course(2, course("Macroeconomics", 4, "Mon", 1, 2));
        complete
    }

    #[test]
    fn test_semester_totals() {
        let schedule = sample_schedule();
        assert_eq!(schedule.term(1).unwrap().total_credits(), 6);
        assert_eq!(schedule.term(1).unwrap().course_count(), 2);
        assert_eq!(schedule.term(2).unwrap().total_credits(), 4);
        assert_eq!(schedule.total_credits(), 10);
        assert_eq!(schedule.course_count(), 3);
    }

    #[test]
    fn test_course_term_lookup() {
        let schedule = sample_schedule();
        assert_eq!(schedule.course_term("Macroeconomics"), Some(2));
        assert_eq!(schedule.course_term("Microeconomics"), Some(1));
        assert_eq!(schedule.course_term("Marketing"), None);
    }

    #[test]
    fn test_conflict_detection() {
        let mut term = SemesterSchedule::new(1);
        term.add_course(course("Microeconomics", 3, "Mon", 1, 2));
        term.add_course(course("Accounting", 3, "Tue", 1, 2));
        assert!(!term.has_conflicts());

        term.add_course(course("Marketing", 2, "Mon", 2, 3));
        assert!(term.has_conflicts());
    }

    #[test]
    fn test_empty_terms_are_kept() {
        let mut schedule = CompleteSchedule::new();
        schedule.insert(SemesterSchedule::new(7));
        schedule.insert(SemesterSchedule::new(8));
        assert_eq!(schedule.terms(), vec![7, 8]);
        assert_eq!(schedule.total_credits(), 0);
        assert_eq!(schedule.term(7).unwrap().course_count(), 0);
    }

    #[test]
    fn test_extras_flatten_into_serialized_course() {
        let mut entry = Course::new(9, "Investments", 3).with_slot("Fri", 3, 4);
        entry.extras.teacher = Some("Prof. Lin".into());
        let placed = ScheduledCourse::from(&entry);

        let value = serde_json::to_value(&placed).unwrap();
        assert_eq!(value["teacher"], "Prof. Lin");
        assert_eq!(value["credits"], 3);
        assert!(value.get("location").is_none());
    }
}
