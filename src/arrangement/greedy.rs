//! Priority-driven greedy seat initializer.
//!
//! # Algorithm
//!
//! 1. Stable-sort students by priority class (elevated first, roster order
//!    within a class).
//! 2. For each student, score every free seat in catalog order.
//! 3. Claim the highest-scoring seat; the first seat seen wins exact ties.
//!
//! A student who finds no free seat stays unassigned. Validation rules that
//! out before a run starts, so this only matters for direct callers.
//!
//! # Complexity
//! O(n * m) score evaluations, n = students, m = available seats.

use tracing::{debug, trace};

use super::{ArrangementContext, ScoringFault};
use crate::models::SeatingPlan;

/// Greedy best-free-seat initializer.
///
/// # Example
///
/// ```
/// use seat_arrange::arrangement::{ArrangementContext, GreedyInitializer};
/// use seat_arrange::config::EngineConfig;
/// use seat_arrange::models::{Classroom, PreferenceRecord, Student};
/// use seat_arrange::scoring::WeightedScorer;
///
/// let students = vec![Student::new("S1"), Student::new("S2")];
/// let room = Classroom::grid("R1", 2, 1);
/// let wishes = vec![PreferenceRecord::new("S2").prefer_seat("2-1")];
/// let scorer = WeightedScorer::for_classroom(&EngineConfig::default(), &room);
/// let ctx = ArrangementContext::new(&students, &room, &wishes, &scorer);
///
/// let plan = GreedyInitializer::new().initialize(&ctx).unwrap();
/// assert_eq!(plan.assigned_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyInitializer;

impl GreedyInitializer {
    /// Creates a new initializer.
    pub fn new() -> Self {
        Self
    }

    /// Seats every student it can.
    pub fn initialize(&self, ctx: &ArrangementContext<'_>) -> Result<SeatingPlan, ScoringFault> {
        let mut plan = SeatingPlan::new(ctx.student_count(), ctx.seat_count());

        for student in self.priority_order(ctx) {
            let mut best: Option<(usize, f64)> = None;

            for seat in 0..ctx.seat_count() {
                if !plan.is_free(seat) {
                    continue;
                }
                let score = ctx.score(student, seat)?;
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((seat, score));
                }
            }

            match best {
                Some((seat, score)) => {
                    plan.assign(student, seat);
                    trace!(
                        student = %ctx.students[student].id,
                        seat = %ctx.seats[seat].id,
                        score,
                        "seat claimed"
                    );
                }
                None => {
                    debug!(student = %ctx.students[student].id, "no free seat left");
                }
            }
        }

        Ok(plan)
    }

    /// Roster indices in seating order.
    pub fn priority_order(&self, ctx: &ArrangementContext<'_>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..ctx.student_count()).collect();
        // sort_by_key is stable
        indices.sort_by_key(|&i| {
            std::cmp::Reverse(ctx.preferences.priority_of(&ctx.students[i].id))
        });
        indices
    }
}
