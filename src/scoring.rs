//! Seat desirability scoring.
//!
//! A scorer rates how well a seat suits a student on a [0, 1] scale. The
//! greedy initializer, the swap optimizer, and the satisfaction statistics
//! all read the same scorer, so a seat that looks good to one stage looks
//! equally good to the others.
//!
//! # Weighted model
//!
//! `WeightedScorer` starts every pair at 0.5 and adds three terms:
//!
//! | Term | Value |
//! |------|-------|
//! | Wish | `+wish` if the seat is preferred, `-0.8 * wish` if avoided |
//! | Teaching | `teaching * (max_row - row + 1) / max_row` |
//! | Constraint | `constraint * (0.5 + needs adjustments)` |
//!
//! Needs adjustments: `+0.3` vision-impaired in rows 1-3, `-0.2`
//! hearing-impaired behind row 5, `-0.2` tall in rows 1-2. The sum is
//! clamped to [0, 1]. Neighbor preferences do not enter the score.

use std::fmt::Debug;

use crate::config::EngineConfig;
use crate::models::{Classroom, PreferenceRecord, Seat, Student};

/// Score every pair starts from.
pub const BASE_SCORE: f64 = 0.5;
/// Avoided-seat penalty as a fraction of the wish weight.
pub const AVOIDED_SEAT_PENALTY: f64 = 0.8;

/// Rates a (student, seat) pair.
///
/// # Score Convention
/// **Higher score = better fit.** Implementations should return values in
/// [0, 1]; a non-finite value is treated as a failure of the calling stage.
pub trait SeatScorer: Send + Sync + Debug {
    /// Scorer name (e.g., "weighted").
    fn name(&self) -> &'static str;

    /// Scores placing `student` in `seat`.
    fn score(&self, student: &Student, seat: &Seat, preference: Option<&PreferenceRecord>) -> f64;
}

/// The weighted wish/teaching/constraint scorer.
///
/// # Example
/// ```
/// use seat_arrange::config::EngineConfig;
/// use seat_arrange::models::{Classroom, PreferenceRecord, Student};
/// use seat_arrange::scoring::{SeatScorer, WeightedScorer};
///
/// let room = Classroom::grid("R1", 2, 1);
/// let scorer = WeightedScorer::for_classroom(&EngineConfig::default(), &room);
/// let wish = PreferenceRecord::new("S1").prefer_seat("2-1");
///
/// let s = scorer.score(&Student::new("S1"), &room.seats[1], Some(&wish));
/// assert!(s <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScorer {
    wish_weight: f64,
    teaching_weight: f64,
    constraint_weight: f64,
    max_row: u32,
}

impl WeightedScorer {
    /// Creates a scorer for a classroom whose last available row is `max_row`.
    pub fn new(config: &EngineConfig, max_row: u32) -> Self {
        Self {
            wish_weight: config.wish_weight,
            teaching_weight: config.teaching_weight,
            constraint_weight: config.constraint_weight,
            max_row,
        }
    }

    /// Creates a scorer normalized to the classroom's available rows.
    pub fn for_classroom(config: &EngineConfig, classroom: &Classroom) -> Self {
        Self::new(config, classroom.max_row())
    }

    /// Row used to normalize the teaching term.
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Unweighted wish term in [-0.8, 1.0].
    pub fn wish_term(seat: &Seat, preference: Option<&PreferenceRecord>) -> f64 {
        let Some(pref) = preference else {
            return 0.0;
        };
        let mut term = 0.0;
        if pref.prefers(&seat.id) {
            term += 1.0;
        }
        if pref.avoids(&seat.id) {
            term -= AVOIDED_SEAT_PENALTY;
        }
        term
    }

    /// Unweighted teaching term: 1.0 in the front row, falling toward the back.
    pub fn teaching_term(&self, seat: &Seat) -> f64 {
        if self.max_row == 0 {
            return 0.0;
        }
        let max_row = f64::from(self.max_row);
        (max_row - f64::from(seat.row) + 1.0) / max_row
    }

    /// Unweighted constraint subtotal for the student's needs.
    pub fn constraint_term(student: &Student, seat: &Seat) -> f64 {
        let mut term = 0.5;
        if student.special_needs.vision_impaired && seat.row <= 3 {
            term += 0.3;
        }
        if student.special_needs.hearing_impaired && seat.row > 5 {
            term -= 0.2;
        }
        if student.is_tall() && seat.row <= 2 {
            term -= 0.2;
        }
        term
    }
}

impl SeatScorer for WeightedScorer {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn score(&self, student: &Student, seat: &Seat, preference: Option<&PreferenceRecord>) -> f64 {
        let total = BASE_SCORE
            + self.wish_weight * Self::wish_term(seat, preference)
            + self.teaching_weight * self.teaching_term(seat)
            + self.constraint_weight * Self::constraint_term(student, seat);
        total.clamp(0.0, 1.0)
    }
}
