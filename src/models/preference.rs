//! Preference records ("wishes") and the per-run lookup index.
//!
//! A record is submitted either by the student or by an administrator on the
//! student's behalf. Administrator records act as a pseudo-student submission
//! and default to elevated priority, which moves the student to the front of
//! the greedy initializer's queue.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Who submitted a preference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submitter {
    /// The student themself.
    Student,
    /// An administrator acting for the student.
    Administrator { admin_id: String },
}

/// Priority class of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    #[default]
    Normal,
    Elevated,
}

/// A student's seating preferences for one arrangement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Student the record applies to.
    pub student_id: String,
    /// Submitter of the record.
    pub submitter: Submitter,
    /// Preferred seat ids, most wanted first.
    pub preferred_seats: Vec<String>,
    /// Seat ids to avoid.
    pub avoided_seats: Vec<String>,
    /// Classmates the student would like to sit near.
    pub preferred_neighbors: Vec<String>,
    /// Classmates the student would rather not sit near.
    pub avoided_neighbors: Vec<String>,
    /// Free-text special requirement.
    pub special_requirements: String,
    /// Priority class.
    pub priority: PriorityClass,
}

impl PreferenceRecord {
    /// Creates an empty student-submitted record.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            submitter: Submitter::Student,
            preferred_seats: Vec::new(),
            avoided_seats: Vec::new(),
            preferred_neighbors: Vec::new(),
            avoided_neighbors: Vec::new(),
            special_requirements: String::new(),
            priority: PriorityClass::Normal,
        }
    }

    /// Creates an empty record submitted by an administrator.
    ///
    /// Priority defaults to `Elevated`.
    pub fn from_admin(student_id: impl Into<String>, admin_id: impl Into<String>) -> Self {
        Self {
            submitter: Submitter::Administrator {
                admin_id: admin_id.into(),
            },
            priority: PriorityClass::Elevated,
            ..Self::new(student_id)
        }
    }

    /// Appends a preferred seat (lower rank than those already added).
    pub fn prefer_seat(mut self, seat_id: impl Into<String>) -> Self {
        self.preferred_seats.push(seat_id.into());
        self
    }

    /// Adds a seat to avoid.
    pub fn avoid_seat(mut self, seat_id: impl Into<String>) -> Self {
        self.avoided_seats.push(seat_id.into());
        self
    }

    /// Adds a preferred neighbor.
    pub fn prefer_neighbor(mut self, student_id: impl Into<String>) -> Self {
        self.preferred_neighbors.push(student_id.into());
        self
    }

    /// Adds a neighbor to avoid.
    pub fn avoid_neighbor(mut self, student_id: impl Into<String>) -> Self {
        self.avoided_neighbors.push(student_id.into());
        self
    }

    /// Sets the free-text requirement.
    pub fn with_requirements(mut self, text: impl Into<String>) -> Self {
        self.special_requirements = text.into();
        self
    }

    /// Sets the priority class.
    pub fn with_priority(mut self, priority: PriorityClass) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the seat is on the preferred list.
    pub fn prefers(&self, seat_id: &str) -> bool {
        self.preferred_seats.iter().any(|s| s == seat_id)
    }

    /// Whether the seat is on the avoided list.
    pub fn avoids(&self, seat_id: &str) -> bool {
        self.avoided_seats.iter().any(|s| s == seat_id)
    }

    /// 1-based rank of a preferred seat, if listed.
    pub fn preference_rank(&self, seat_id: &str) -> Option<usize> {
        self.preferred_seats
            .iter()
            .position(|s| s == seat_id)
            .map(|i| i + 1)
    }

    /// Whether an administrator submitted this record.
    pub fn is_administrative(&self) -> bool {
        matches!(self.submitter, Submitter::Administrator { .. })
    }
}

/// Student id → preference record lookup for one run.
///
/// When the input holds several records for the same student, the one that
/// appears last wins.
#[derive(Debug, Clone, Default)]
pub struct PreferenceIndex<'a> {
    by_student: HashMap<&'a str, &'a PreferenceRecord>,
}

impl<'a> PreferenceIndex<'a> {
    /// Builds the index.
    pub fn build(records: &'a [PreferenceRecord]) -> Self {
        let mut by_student = HashMap::with_capacity(records.len());
        for record in records {
            by_student.insert(record.student_id.as_str(), record);
        }
        Self { by_student }
    }

    /// Record for a student, if any.
    #[inline]
    pub fn get(&self, student_id: &str) -> Option<&'a PreferenceRecord> {
        self.by_student.get(student_id).copied()
    }

    /// Priority class of a student (`Normal` without a record).
    pub fn priority_of(&self, student_id: &str) -> PriorityClass {
        self.get(student_id)
            .map(|r| r.priority)
            .unwrap_or(PriorityClass::Normal)
    }

    /// Number of indexed students.
    pub fn len(&self) -> usize {
        self.by_student.len()
    }

    /// Whether no student has a record.
    pub fn is_empty(&self) -> bool {
        self.by_student.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let r = PreferenceRecord::new("S1")
            .prefer_seat("1-1")
            .prefer_seat("1-2")
            .avoid_seat("5-1")
            .prefer_neighbor("S2")
            .avoid_neighbor("S3")
            .with_requirements("near the window");

        assert!(r.prefers("1-2"));
        assert!(!r.prefers("5-1"));
        assert!(r.avoids("5-1"));
        assert_eq!(r.preference_rank("1-1"), Some(1));
        assert_eq!(r.preference_rank("1-2"), Some(2));
        assert_eq!(r.preference_rank("9-9"), None);
        assert_eq!(r.priority, PriorityClass::Normal);
        assert!(!r.is_administrative());
    }

    #[test]
    fn test_admin_record_is_elevated() {
        let r = PreferenceRecord::from_admin("S1", "A1");
        assert!(r.is_administrative());
        assert_eq!(r.priority, PriorityClass::Elevated);
        assert_eq!(r.student_id, "S1");
    }

    #[test]
    fn test_index_last_record_wins() {
        let records = vec![
            PreferenceRecord::new("S1").prefer_seat("1-1"),
            PreferenceRecord::new("S2"),
            PreferenceRecord::new("S1").prefer_seat("2-2"),
        ];
        let index = PreferenceIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert!(index.get("S1").unwrap().prefers("2-2"));
        assert!(!index.get("S1").unwrap().prefers("1-1"));
        assert!(index.get("S9").is_none());
    }

    #[test]
    fn test_priority_of() {
        let records = vec![PreferenceRecord::new("S1").with_priority(PriorityClass::Elevated)];
        let index = PreferenceIndex::build(&records);
        assert_eq!(index.priority_of("S1"), PriorityClass::Elevated);
        assert_eq!(index.priority_of("S2"), PriorityClass::Normal);
        assert!(PriorityClass::Elevated > PriorityClass::Normal);
    }

    #[test]
    fn test_submitter_serde() {
        let r = PreferenceRecord::from_admin("S1", "A1");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["submitter"]["administrator"]["admin_id"], "A1");
        assert_eq!(json["priority"], "elevated");
    }
}
