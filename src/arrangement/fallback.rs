//! Uniform random fallback assignment.
//!
//! Shuffles the roster and the available seats independently
//! (Fisher-Yates via [`SliceRandom::shuffle`]) and pairs them position by
//! position, stopping at the shorter list. Entries carry a nominal
//! satisfaction of [`FALLBACK_SATISFACTION`] instead of a computed score.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{AssignmentEntry, AssignmentMethod, Seat, Student};

/// Nominal satisfaction recorded for every fallback entry.
pub const FALLBACK_SATISFACTION: f64 = 0.5;

/// Pairs shuffled students with shuffled seats.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seat_arrange::arrangement::random_fallback;
/// use seat_arrange::models::{Classroom, Student};
///
/// let students = vec![Student::new("S1"), Student::new("S2")];
/// let room = Classroom::grid("R1", 1, 3);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let entries = random_fallback(&students, &room.available_seats(), &mut rng);
/// assert_eq!(entries.len(), 2);
/// ```
pub fn random_fallback<R: Rng + ?Sized>(
    students: &[Student],
    seats: &[&Seat],
    rng: &mut R,
) -> Vec<AssignmentEntry> {
    let mut students: Vec<&Student> = students.iter().collect();
    let mut seats: Vec<&Seat> = seats.to_vec();
    students.shuffle(rng);
    seats.shuffle(rng);

    students
        .into_iter()
        .zip(seats)
        .map(|(student, seat)| {
            AssignmentEntry::new(
                &student.id,
                &seat.id,
                FALLBACK_SATISFACTION,
                AssignmentMethod::RandomFallback,
            )
        })
        .collect()
}
