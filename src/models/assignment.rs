//! Seating plan arena and assignment output records.
//!
//! During a run, students and seats are addressed by their index into the
//! roster slice and the available-seat slice. `SeatingPlan` keeps both
//! directions of the mapping (`student → seat`, `seat → student`) and only
//! mutates them together, so the one-student-per-seat and one-seat-per-student
//! invariants hold after every operation.

use serde::{Deserialize, Serialize};

/// How an entry was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMethod {
    /// Greedy initialization followed by swap search.
    Optimized,
    /// Uniform random pairing.
    RandomFallback,
}

/// One student-to-seat assignment in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// Assigned student.
    pub student_id: String,
    /// Assigned seat.
    pub seat_id: String,
    /// Per-student satisfaction (0.0..=1.0).
    pub satisfaction: f64,
    /// Producing strategy.
    pub method: AssignmentMethod,
    /// Assignment time, Unix epoch (ms).
    pub assigned_at_ms: i64,
}

impl AssignmentEntry {
    /// Creates an entry; the satisfaction is clamped to [0, 1].
    pub fn new(
        student_id: impl Into<String>,
        seat_id: impl Into<String>,
        satisfaction: f64,
        method: AssignmentMethod,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            seat_id: seat_id.into(),
            satisfaction: satisfaction.clamp(0.0, 1.0),
            method,
            assigned_at_ms: 0,
        }
    }

    /// Sets the assignment timestamp.
    pub fn at(mut self, assigned_at_ms: i64) -> Self {
        self.assigned_at_ms = assigned_at_ms;
        self
    }
}

/// Index-addressed two-way seating map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatingPlan {
    seat_of: Vec<Option<usize>>,
    occupant: Vec<Option<usize>>,
}

impl SeatingPlan {
    /// Creates an empty plan for `students` students and `seats` seats.
    pub fn new(students: usize, seats: usize) -> Self {
        Self {
            seat_of: vec![None; students],
            occupant: vec![None; seats],
        }
    }

    /// Number of students the plan addresses.
    pub fn student_capacity(&self) -> usize {
        self.seat_of.len()
    }

    /// Number of seats the plan addresses.
    pub fn seat_capacity(&self) -> usize {
        self.occupant.len()
    }

    /// Seats a student.
    ///
    /// Returns `false` (and changes nothing) if either index is out of range,
    /// the student already has a seat, or the seat is taken.
    pub fn assign(&mut self, student: usize, seat: usize) -> bool {
        match (self.seat_of.get(student), self.occupant.get(seat)) {
            (Some(None), Some(None)) => {
                self.seat_of[student] = Some(seat);
                self.occupant[seat] = Some(student);
                true
            }
            _ => false,
        }
    }

    /// Exchanges the seats of two assigned students.
    ///
    /// Returns `false` if either student is unassigned or `a == b`.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let (Some(seat_a), Some(seat_b)) = (self.seat_of(a), self.seat_of(b)) else {
            return false;
        };
        self.seat_of[a] = Some(seat_b);
        self.seat_of[b] = Some(seat_a);
        self.occupant[seat_a] = Some(b);
        self.occupant[seat_b] = Some(a);
        true
    }

    /// Seat held by a student.
    #[inline]
    pub fn seat_of(&self, student: usize) -> Option<usize> {
        self.seat_of.get(student).copied().flatten()
    }

    /// Student sitting in a seat.
    #[inline]
    pub fn occupant(&self, seat: usize) -> Option<usize> {
        self.occupant.get(seat).copied().flatten()
    }

    /// Whether the seat is free.
    #[inline]
    pub fn is_free(&self, seat: usize) -> bool {
        self.occupant(seat).is_none()
    }

    /// `(student, seat)` pairs in student index order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.seat_of
            .iter()
            .enumerate()
            .filter_map(|(student, seat)| seat.map(|s| (student, s)))
    }

    /// Assigned students in index order.
    pub fn assigned_students(&self) -> Vec<usize> {
        self.pairs().map(|(student, _)| student).collect()
    }

    /// Students without a seat.
    pub fn unassigned_students(&self) -> Vec<usize> {
        self.seat_of
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Seats without a student.
    pub fn free_seats(&self) -> Vec<usize> {
        self.occupant
            .iter()
            .enumerate()
            .filter(|(_, student)| student.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of seated students.
    pub fn assigned_count(&self) -> usize {
        self.seat_of.iter().filter(|s| s.is_some()).count()
    }

    /// Whether nobody is seated.
    pub fn is_empty(&self) -> bool {
        self.assigned_count() == 0
    }
}
