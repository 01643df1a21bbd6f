//! Degree-aware course planning engine.
//!
//! Turns a course catalog, degree requirements, and a student profile into
//! a mixed-integer plan model — one binary "take course C in term T"
//! variable per pair — with every academic rule as a linear constraint and
//! the student's stated priorities as a lexicographic objective stack, then
//! reads the solved assignment back as a term-by-term schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `DegreeRequirements`,
//!   `StudentProfile`, `SemesterSchedule`, `CompleteSchedule`
//! - **`catalog`**: Course catalog index (record normalization, lookups)
//! - **`eligibility`**: Completed-course filtering
//! - **`model`**: Declarative linear model emitted by the encoder
//! - **`encoder`**: Decision variables, hard constraints, objective stack
//! - **`solver`**: Solver capability seam and the bundled MILP adapter
//! - **`planner`**: Request-level facade and result extraction
//! - **`error`**: Typed error surface
//!
//! # Pipeline
//!
//! Eligibility Filter → Model Encoder → Solver → Result Extractor.
//! The catalog and degree reference data are read-only and safely shared
//! across requests; the model, solution, and schedule are private to each
//! request.

pub mod catalog;
pub mod eligibility;
pub mod encoder;
pub mod error;
pub mod model;
pub mod models;
pub mod planner;
pub mod solver;
