//! Course catalog index.
//!
//! Normalizes raw course records into typed [`Course`] entries and answers
//! lookup queries by name, by id, and by category tag. Loaded once at
//! process or request startup; read-only thereafter.
//!
//! Name uniqueness is enforced here because prerequisites, required-course
//! lists, and category membership all key courses by name.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::DataError;
use crate::models::{Course, CourseExtras, Term, TermOffering, TimeSlot, TERM_COUNT};

/// Raw prerequisite field: a list, a single name, or a "none" sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrerequisiteSpec {
    /// A single prerequisite name, or the sentinel meaning none.
    One(String),
    /// Zero or more prerequisite names.
    Many(Vec<String>),
}

impl PrerequisiteSpec {
    fn into_names(self) -> Vec<String> {
        match self {
            Self::One(name) if is_none_sentinel(&name) => Vec::new(),
            Self::One(name) => vec![name],
            Self::Many(names) => names.into_iter().filter(|n| !is_none_sentinel(n)).collect(),
        }
    }
}

impl Default for PrerequisiteSpec {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

fn is_none_sentinel(name: &str) -> bool {
    name.is_empty() || name.eq_ignore_ascii_case("none")
}

/// A raw course record as it appears in the serialized catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Numeric id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Credit count.
    pub credits: u32,
    /// Weekly meeting slots.
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Offering-term specification. A single entry denotes a parity class.
    pub eligible_terms: Vec<Term>,
    /// Prerequisite specification.
    #[serde(default)]
    pub prerequisites: PrerequisiteSpec,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Category tags.
    #[serde(default)]
    pub category_tags: Vec<String>,
    /// Optional display fields (teacher, location, note).
    #[serde(flatten)]
    pub extras: CourseExtras,
}

impl CourseRecord {
    /// Normalizes the record into a typed catalog entry.
    fn into_course(self) -> Result<Course, DataError> {
        let invalid = |name: &str, reason: &str| DataError::InvalidCourse {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if self.credits == 0 {
            return Err(invalid(&self.name, "credits must be positive"));
        }
        if self.eligible_terms.is_empty() {
            return Err(invalid(&self.name, "no eligible terms"));
        }
        if self
            .eligible_terms
            .iter()
            .any(|t| !(1..=TERM_COUNT).contains(t))
        {
            return Err(invalid(&self.name, "eligible term outside 1-8"));
        }
        for slot in &self.time_slots {
            if slot.periods.start == 0 || slot.periods.start > slot.periods.end {
                return Err(invalid(&self.name, "malformed period range"));
            }
        }

        Ok(Course {
            id: self.id,
            name: self.name,
            credits: self.credits,
            time_slots: self.time_slots,
            offering: TermOffering::from_terms(&self.eligible_terms),
            prerequisites: self.prerequisites.into_names(),
            category_tags: self.category_tags.into_iter().collect(),
            description: self.description,
            extras: self.extras,
        })
    }
}

/// Read-only course catalog with id and name indexes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    /// Indexes already-normalized courses.
    pub fn new(courses: Vec<Course>) -> Result<Self, DataError> {
        let mut catalog = Self {
            by_name: HashMap::with_capacity(courses.len()),
            by_id: HashMap::with_capacity(courses.len()),
            courses,
        };
        for (index, course) in catalog.courses.iter().enumerate() {
            if catalog
                .by_name
                .insert(course.name.clone(), index)
                .is_some()
            {
                return Err(DataError::DuplicateName(course.name.clone()));
            }
            if catalog.by_id.insert(course.id, index).is_some() {
                return Err(DataError::DuplicateId(course.id));
            }
        }
        Ok(catalog)
    }

    /// Normalizes raw records into an indexed catalog.
    pub fn from_records(records: Vec<CourseRecord>) -> Result<Self, DataError> {
        let courses = records
            .into_iter()
            .map(CourseRecord::into_course)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(courses)
    }

    /// Parses and indexes a serialized catalog document (a JSON array of
    /// course records).
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let records: Vec<CourseRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Looks up a course by display name.
    pub fn get(&self, name: &str) -> Option<&Course> {
        self.by_name.get(name).map(|&i| &self.courses[i])
    }

    /// Looks up a course by id.
    pub fn get_by_id(&self, id: u32) -> Option<&Course> {
        self.by_id.get(&id).map(|&i| &self.courses[i])
    }

    /// All catalog entries, in load order.
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Entries whose name is in `names`.
    pub fn with_names(&self, names: &BTreeSet<String>) -> Vec<&Course> {
        names.iter().filter_map(|n| self.get(n)).collect()
    }

    /// Entries carrying the given category tag.
    pub fn in_category(&self, tag: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.category_tags.contains(tag))
            .collect()
    }

    /// Whether a course with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
