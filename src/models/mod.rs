//! Seating domain models.
//!
//! Input records (students, classroom seats, preference records) are built
//! fresh for each arrangement run and never mutated by the engine. Output
//! records (`AssignmentEntry`) are handed back to the caller for persistence.
//!
//! # Domain Mappings
//!
//! | seat-arrange | Classroom | Exam hall | Event |
//! |--------------|-----------|-----------|-------|
//! | Student | Pupil | Candidate | Guest |
//! | Seat | Desk | Exam desk | Chair |
//! | PreferenceRecord | Wish form | Accommodation request | RSVP note |

mod assignment;
mod preference;
mod seat;
mod student;

pub use assignment::{AssignmentEntry, AssignmentMethod, SeatingPlan};
pub use preference::{PreferenceIndex, PreferenceRecord, PriorityClass, Submitter};
pub use seat::{Classroom, Seat};
pub use student::{HeightCategory, SpecialNeeds, Student};
