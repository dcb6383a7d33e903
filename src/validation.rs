//! Input validation for seating runs.
//!
//! Checks structural integrity of the roster, the seat catalog, and the
//! engine configuration before any assignment work. Detects:
//! - Duplicate IDs
//! - More students than available seats
//! - Classrooms with no usable seat
//! - Seats outside the 1-based row grid
//! - Out-of-range configuration values
//!
//! Preference records are checked separately by [`validate_preference`], the
//! intake-side rule set applied when a record is submitted.

use crate::config::EngineConfig;
use crate::models::{Classroom, PreferenceRecord, Student};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Most preferred (or avoided) seats one record may list.
pub const MAX_SEAT_SELECTIONS: usize = 5;
/// Most preferred (or avoided) neighbors one record may list.
pub const MAX_NEIGHBOR_SELECTIONS: usize = 3;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// More students than available seats.
    CapacityExceeded,
    /// Non-empty roster but no available seat.
    EmptyClassroom,
    /// A seat lies outside the grid (row or column 0).
    InvalidSeat,
    /// A configuration value is out of range.
    InvalidConfig,
    /// A preference record contradicts itself.
    InvalidPreference,
    /// A reference to a student not on the roster.
    UnknownStudent,
    /// A reference to a seat that is missing or unavailable.
    UnknownSeat,
    /// A preference record lists too many seats or neighbors.
    TooManySelections,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of one arrangement run.
///
/// Checks:
/// 1. No duplicate student IDs
/// 2. No duplicate seat IDs
/// 3. Every seat sits at row >= 1 and column >= 1
/// 4. A non-empty roster has at least one available seat
/// 5. Students do not outnumber available seats
/// 6. Configuration values are in range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    students: &[Student],
    classroom: &Classroom,
    config: &EngineConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut student_ids = HashSet::new();
    for s in students {
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    let mut seat_ids = HashSet::new();
    for seat in &classroom.seats {
        if !seat_ids.insert(seat.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate seat ID: {}", seat.id),
            ));
        }
        if seat.row == 0 || seat.col == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSeat,
                format!(
                    "Seat '{}' is at row {}, column {}; rows and columns start at 1",
                    seat.id, seat.row, seat.col
                ),
            ));
        }
    }

    // Capacity
    let available = classroom.available_seat_count();
    if !students.is_empty() && available == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyClassroom,
            format!("Classroom '{}' has no available seats", classroom.id),
        ));
    } else if students.len() > available {
        errors.push(ValidationError::new(
            ValidationErrorKind::CapacityExceeded,
            format!(
                "{} students exceed {} available seats in classroom '{}'",
                students.len(),
                available,
                classroom.id
            ),
        ));
    }

    if let Err(config_errors) = validate_config(config) {
        errors.extend(config_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates engine configuration ranges.
///
/// Weights must be finite and non-negative, `min_satisfaction` must lie in
/// [0, 1] and `max_iterations` must not exceed
/// [`EngineConfig::MAX_ITERATIONS_LIMIT`].
pub fn validate_config(config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let weights = [
        ("wish_weight", config.wish_weight),
        ("teaching_weight", config.teaching_weight),
        ("fairness_weight", config.fairness_weight),
        ("constraint_weight", config.constraint_weight),
    ];
    for (name, value) in weights {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                format!("{name} must be a non-negative number, got {value}"),
            ));
        }
    }

    if !(0.0..=1.0).contains(&config.min_satisfaction) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "min_satisfaction must be within [0, 1], got {}",
                config.min_satisfaction
            ),
        ));
    }

    if config.max_iterations > EngineConfig::MAX_ITERATIONS_LIMIT {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "max_iterations must not exceed {}, got {}",
                EngineConfig::MAX_ITERATIONS_LIMIT,
                config.max_iterations
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a submitted preference record against the roster and classroom.
///
/// Checks:
/// 1. The owning student is on the roster
/// 2. Every preferred/avoided seat exists and is available
/// 3. At most [`MAX_SEAT_SELECTIONS`] preferred and avoided seats
/// 4. No seat is both preferred and avoided
/// 5. Every preferred/avoided neighbor is a classmate on the roster
/// 6. At most [`MAX_NEIGHBOR_SELECTIONS`] preferred and avoided neighbors
/// 7. The student does not list themself as a neighbor
pub fn validate_preference(
    record: &PreferenceRecord,
    students: &[Student],
    classroom: &Classroom,
) -> ValidationResult {
    let mut errors = Vec::new();

    let roster: HashSet<&str> = students.iter().map(|s| s.id.as_str()).collect();
    let available: HashSet<&str> = classroom
        .seats
        .iter()
        .filter(|s| s.available)
        .map(|s| s.id.as_str())
        .collect();

    if !roster.contains(record.student_id.as_str()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownStudent,
            format!("Student '{}' is not on the roster", record.student_id),
        ));
    }

    for (label, seats) in [
        ("preferred", &record.preferred_seats),
        ("avoided", &record.avoided_seats),
    ] {
        for seat in seats {
            if !available.contains(seat.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSeat,
                    format!("{label} seat '{seat}' is not an available seat"),
                ));
            }
        }
        if seats.len() > MAX_SEAT_SELECTIONS {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManySelections,
                format!(
                    "At most {MAX_SEAT_SELECTIONS} {label} seats allowed, got {}",
                    seats.len()
                ),
            ));
        }
    }

    for seat in &record.preferred_seats {
        if record.avoids(seat) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPreference,
                format!("Seat '{seat}' is both preferred and avoided"),
            ));
        }
    }

    for (label, neighbors) in [
        ("preferred", &record.preferred_neighbors),
        ("avoided", &record.avoided_neighbors),
    ] {
        for neighbor in neighbors {
            if neighbor == &record.student_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPreference,
                    format!("Student '{neighbor}' lists themself as a {label} neighbor"),
                ));
            } else if !roster.contains(neighbor.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStudent,
                    format!("{label} neighbor '{neighbor}' is not in the same class"),
                ));
            }
        }
        if neighbors.len() > MAX_NEIGHBOR_SELECTIONS {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManySelections,
                format!(
                    "At most {MAX_NEIGHBOR_SELECTIONS} {label} neighbors allowed, got {}",
                    neighbors.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
