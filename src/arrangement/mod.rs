//! Arrangement stages: greedy initialization, swap search, fallback, statistics.
//!
//! # Algorithm
//!
//! `GreedyInitializer` seats students one at a time (elevated priority
//! first), each taking the best-scoring free seat. `SwapOptimizer` then
//! sweeps all pairs of seated students and exchanges their seats whenever
//! that raises the pair's combined score by more than a small epsilon.
//! Neither is optimal; together they give a fast, reproducible plan.
//!
//! `random_fallback` pairs a shuffled roster with shuffled seats when the
//! optimized plan is not good enough or a stage fails.
//!
//! # Statistics
//!
//! `ArrangementStats` summarizes a finished run: counts, mean satisfaction,
//! rounds used, convergence, and wall-clock duration.

mod fallback;
mod greedy;
mod local_search;
mod stats;

pub use fallback::{random_fallback, FALLBACK_SATISFACTION};
pub use greedy::GreedyInitializer;
pub use local_search::{OptimizationOutcome, SwapOptimizer, SWAP_EPSILON};
pub use stats::{
    overall_satisfaction, ArrangementStats, BandCount, SatisfactionDistribution,
    EXCELLENT_SATISFACTION, GOOD_SATISFACTION,
};

use thiserror::Error;

use crate::models::{Classroom, PreferenceIndex, PreferenceRecord, Seat, SeatingPlan, Student};
use crate::scoring::SeatScorer;

/// A scorer produced a value that is not a finite number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("scorer '{scorer}' returned {value} for student '{student_id}' in seat '{seat_id}'")]
pub struct ScoringFault {
    pub scorer: &'static str,
    pub student_id: String,
    pub seat_id: String,
    pub value: f64,
}

/// Failure of the swap search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrangementError {
    #[error(transparent)]
    Scoring(#[from] ScoringFault),

    /// The plan was sized for a different roster or seat list.
    #[error(
        "plan sized for {plan_students} students and {plan_seats} seats, \
         context has {students} students and {seats} seats"
    )]
    PlanMismatch {
        plan_students: usize,
        plan_seats: usize,
        students: usize,
        seats: usize,
    },
}

/// Read-only inputs shared by every stage of one run.
///
/// Students are addressed by their roster index and seats by their index
/// into the available-seat list, which keeps catalog order.
#[derive(Debug)]
pub struct ArrangementContext<'a> {
    /// Roster, in input order.
    pub students: &'a [Student],
    /// Available seats, in catalog order.
    pub seats: Vec<&'a Seat>,
    /// Preference lookup.
    pub preferences: PreferenceIndex<'a>,
    scorer: &'a dyn SeatScorer,
}

impl<'a> ArrangementContext<'a> {
    /// Creates a context over the classroom's available seats.
    pub fn new(
        students: &'a [Student],
        classroom: &'a Classroom,
        preferences: &'a [PreferenceRecord],
        scorer: &'a dyn SeatScorer,
    ) -> Self {
        Self {
            students,
            seats: classroom.available_seats(),
            preferences: PreferenceIndex::build(preferences),
            scorer,
        }
    }

    /// Scores student `student` in seat `seat`, clamped to [0, 1].
    ///
    /// # Panics
    /// Panics if either index is out of range for this context.
    pub fn score(&self, student: usize, seat: usize) -> Result<f64, ScoringFault> {
        let student = &self.students[student];
        let seat = self.seats[seat];
        let value = self
            .scorer
            .score(student, seat, self.preferences.get(&student.id));
        if value.is_finite() {
            Ok(value.clamp(0.0, 1.0))
        } else {
            Err(ScoringFault {
                scorer: self.scorer.name(),
                student_id: student.id.clone(),
                seat_id: seat.id.clone(),
                value,
            })
        }
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of available seats.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Checks that `plan` indexes this context's students and seats.
    pub fn check_plan(&self, plan: &SeatingPlan) -> Result<(), ArrangementError> {
        if plan.student_capacity() == self.student_count()
            && plan.seat_capacity() == self.seat_count()
        {
            return Ok(());
        }
        Err(ArrangementError::PlanMismatch {
            plan_students: plan.student_capacity(),
            plan_seats: plan.seat_capacity(),
            students: self.student_count(),
            seats: self.seat_count(),
        })
    }

    /// Name of the active scorer.
    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }
}
