//! Course planning domain models.
//!
//! Provides the core data types for planning requests and results:
//! catalog entries, degree-requirement reference data, the validated
//! student profile, and the recommended-schedule types.
//!
//! Catalog entries and degree requirements are immutable reference data,
//! shared read-only across planning requests; profiles and schedules are
//! per-request values.

mod course;
mod profile;
mod requirements;
mod schedule;

pub use course::{
    Course, CourseExtras, PeriodRange, Term, TermOffering, TermParity, TimeSlot, TERM_COUNT,
};
pub use profile::{PlanningType, ProfileBuilder, Standing, StudentProfile};
pub use requirements::{DegreeRequirements, ElectiveCategory};
pub use schedule::{CompleteSchedule, ScheduledCourse, SemesterSchedule};
