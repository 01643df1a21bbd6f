//! Course (catalog entry) model.
//!
//! A course is the unit of planning: it carries credits, weekly meeting
//! slots, the terms it is offered in, prerequisites by name, and category
//! tags drawn from a controlled vocabulary.
//!
//! # Time Model
//!
//! A meeting slot is a weekday plus an inclusive range of class periods.
//! Two slots collide when they fall on the same weekday and their period
//! ranges share at least one period.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Academic term number (1–8).
pub type Term = u8;

/// Number of terms in a full degree program.
pub const TERM_COUNT: Term = 8;

/// Inclusive range of class periods within one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// First occupied period (1-based, inclusive).
    pub start: u8,
    /// Last occupied period (inclusive).
    pub end: u8,
}

impl PeriodRange {
    /// Creates a period range.
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Whether two ranges share at least one period.
    ///
    /// Ranges [a,b] and [c,d] overlap unless b < c or d < a.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

/// A weekly meeting slot: weekday plus period range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Weekday label. Opaque to the engine; compared by equality only.
    pub weekday: String,
    /// Occupied periods on that weekday.
    pub periods: PeriodRange,
}

impl TimeSlot {
    /// Creates a slot occupying periods `start..=end` on `weekday`.
    pub fn new(weekday: impl Into<String>, start: u8, end: u8) -> Self {
        Self {
            weekday: weekday.into(),
            periods: PeriodRange::new(start, end),
        }
    }

    /// Whether two slots collide (same weekday, overlapping periods).
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.weekday == other.weekday && self.periods.overlaps(&other.periods)
    }
}

/// Parity class of a term number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermParity {
    /// Terms 1, 3, 5, 7.
    Odd,
    /// Terms 2, 4, 6, 8.
    Even,
}

impl TermParity {
    /// Parity of a term number.
    pub fn of(term: Term) -> Self {
        if term % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }

    /// Whether `term` has this parity.
    pub fn matches(&self, term: Term) -> bool {
        Self::of(term) == *self
    }
}

/// Terms in which a course is offered.
///
/// A record declaring exactly one eligible term means "every term of that
/// parity"; an explicit multi-term list is informational and places no
/// term restriction on the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermOffering {
    /// Offered in every term of the given parity.
    Parity(TermParity),
    /// Offered in the listed terms.
    Terms(Vec<Term>),
}

impl TermOffering {
    /// Normalizes a raw eligible-term list: a single entry denotes its
    /// parity class, several entries stay an explicit list.
    pub fn from_terms(terms: &[Term]) -> Self {
        match terms {
            [single] => Self::Parity(TermParity::of(*single)),
            _ => Self::Terms(terms.to_vec()),
        }
    }

    /// Whether the offering forbids placement in `term`.
    pub fn forbids(&self, term: Term) -> bool {
        match self {
            Self::Parity(parity) => !parity.matches(term),
            Self::Terms(_) => false,
        }
    }
}

impl Default for TermOffering {
    fn default() -> Self {
        Self::Terms(Vec::new())
    }
}

/// Display-only course details not consumed by the planning model.
///
/// Populated only when the catalog format provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseExtras {
    /// Instructor name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    /// Classroom or building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A catalog entry.
///
/// Constructed once per catalog load and read-only thereafter; owned
/// exclusively by the [`crate::catalog::Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique numeric id.
    pub id: u32,
    /// Unique display name. Prerequisites, required-course lists, and
    /// category membership all key courses by this name.
    pub name: String,
    /// Credit value (positive).
    pub credits: u32,
    /// Weekly meeting slots.
    pub time_slots: Vec<TimeSlot>,
    /// Terms the course is offered in.
    pub offering: TermOffering,
    /// Names of prerequisite courses. Empty means none.
    pub prerequisites: Vec<String>,
    /// Category tags from the controlled vocabulary.
    pub category_tags: BTreeSet<String>,
    /// Free-text description. Opaque to the engine.
    pub description: String,
    /// Display-only extras.
    pub extras: CourseExtras,
}

impl Course {
    /// Creates a course with the given id, name, and credits.
    pub fn new(id: u32, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id,
            name: name.into(),
            credits,
            time_slots: Vec::new(),
            offering: TermOffering::default(),
            prerequisites: Vec::new(),
            category_tags: BTreeSet::new(),
            description: String::new(),
            extras: CourseExtras::default(),
        }
    }

    /// Adds a weekly meeting slot.
    pub fn with_slot(mut self, weekday: impl Into<String>, start: u8, end: u8) -> Self {
        self.time_slots.push(TimeSlot::new(weekday, start, end));
        self
    }

    /// Sets the term offering.
    pub fn with_offering(mut self, offering: TermOffering) -> Self {
        self.offering = offering;
        self
    }

    /// Adds a prerequisite course name.
    pub fn with_prerequisite(mut self, name: impl Into<String>) -> Self {
        self.prerequisites.push(name.into());
        self
    }

    /// Adds a category tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.category_tags.insert(tag.into());
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether any meeting slot collides with any of `other`'s.
    pub fn conflicts_with(&self, other: &Course) -> bool {
        self.time_slots
            .iter()
            .any(|a| other.time_slots.iter().any(|b| a.conflicts_with(b)))
    }

    /// Whether the course carries any of the given tags.
    pub fn has_any_tag<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().any(|t| self.category_tags.contains(t))
    }
}
