//! Pairwise swap local search.
//!
//! # Algorithm
//!
//! Each round visits every unordered pair `(a, b)` of seated students in
//! roster index order and compares
//!
//! ```text
//! before = s(a, seat_a) + s(b, seat_b)
//! after  = s(a, seat_b) + s(b, seat_a)
//! ```
//!
//! The seats are exchanged as soon as `after > before + epsilon`. Later pairs
//! in the same round see the updated plan.
//!
//! The search stops when:
//! - the plan already meets `min_satisfaction` (checked after initialization
//!   and after every round), or
//! - a round makes no swap, or
//! - `max_iterations` rounds have run (not converged).
//!
//! The first two count as convergence. They are independent checks: a plan
//! can converge on "no improving swap" while still below the threshold.
//!
//! # Complexity
//! O(n²) pair evaluations per round, n = seated students.

use tracing::{debug, trace};

use super::stats::overall_satisfaction;
use super::{ArrangementContext, ArrangementError, ScoringFault};
use crate::config::EngineConfig;
use crate::models::SeatingPlan;

/// Minimum combined gain for a swap to be applied.
pub const SWAP_EPSILON: f64 = 0.01;

/// Result of a swap search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationOutcome {
    /// Stopped on threshold or on a swap-free round.
    pub converged: bool,
    /// Rounds run.
    pub iterations: usize,
    /// Swaps applied across all rounds.
    pub swaps: usize,
    /// Overall satisfaction of the final plan.
    pub satisfaction: f64,
}

/// Pairwise seat-swap optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOptimizer {
    max_iterations: usize,
    min_satisfaction: f64,
}

impl SwapOptimizer {
    /// Creates an optimizer.
    pub fn new(max_iterations: usize, min_satisfaction: f64) -> Self {
        Self {
            max_iterations,
            min_satisfaction,
        }
    }

    /// Creates an optimizer from engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_iterations, config.min_satisfaction)
    }

    /// Improves `plan` in place.
    ///
    /// # Errors
    /// `PlanMismatch` if `plan` was not sized for `ctx`, `Scoring` if the
    /// scorer returns a non-finite value.
    pub fn optimize(
        &self,
        ctx: &ArrangementContext<'_>,
        plan: &mut SeatingPlan,
    ) -> Result<OptimizationOutcome, ArrangementError> {
        ctx.check_plan(plan)?;
        let mut satisfaction = overall_satisfaction(ctx, plan)?;
        if satisfaction >= self.min_satisfaction {
            debug!(satisfaction, "threshold met after initialization");
            return Ok(OptimizationOutcome {
                converged: true,
                iterations: 0,
                swaps: 0,
                satisfaction,
            });
        }

        // Swaps never change who is seated, so the pair order is fixed up front.
        let seated = plan.assigned_students();
        let mut swaps = 0;

        for round in 1..=self.max_iterations {
            let round_swaps = self.sweep(ctx, plan, &seated)?;
            swaps += round_swaps;
            satisfaction = overall_satisfaction(ctx, plan)?;
            debug!(round, swaps = round_swaps, satisfaction, "swap round");

            if round_swaps == 0 || satisfaction >= self.min_satisfaction {
                return Ok(OptimizationOutcome {
                    converged: true,
                    iterations: round,
                    swaps,
                    satisfaction,
                });
            }
        }

        Ok(OptimizationOutcome {
            converged: false,
            iterations: self.max_iterations,
            swaps,
            satisfaction,
        })
    }

    /// One pass over all pairs. Returns the number of swaps applied.
    fn sweep(
        &self,
        ctx: &ArrangementContext<'_>,
        plan: &mut SeatingPlan,
        seated: &[usize],
    ) -> Result<usize, ScoringFault> {
        let mut swaps = 0;
        for (pos, &a) in seated.iter().enumerate() {
            for &b in &seated[pos + 1..] {
                let (Some(seat_a), Some(seat_b)) = (plan.seat_of(a), plan.seat_of(b)) else {
                    continue;
                };
                let before = ctx.score(a, seat_a)? + ctx.score(b, seat_b)?;
                let after = ctx.score(a, seat_b)? + ctx.score(b, seat_a)?;
                if after > before + SWAP_EPSILON && plan.swap(a, b) {
                    swaps += 1;
                    trace!(
                        a = %ctx.students[a].id,
                        b = %ctx.students[b].id,
                        gain = after - before,
                        "seats swapped"
                    );
                }
            }
        }
        Ok(swaps)
    }
}
