//! Arrangement quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Number of assignment entries |
//! | Fallback | Entries produced by the random fallback |
//! | Overall satisfaction | Mean per-entry satisfaction (0 when empty) |
//! | Iterations | Optimizer rounds run |
//! | Converged | No improving swap left, or threshold reached |
//! | Distribution | Entries per satisfaction band, with their share |
//! | Duration | Wall-clock time of the run |
//!
//! # Satisfaction bands
//!
//! | Band | Satisfaction |
//! |------|--------------|
//! | Excellent | >= 0.8 |
//! | Good | >= 0.6 |
//! | Fair | < 0.6 |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ArrangementContext, ScoringFault};
use crate::models::{AssignmentEntry, AssignmentMethod, SeatingPlan};

/// Lower bound of the excellent band.
pub const EXCELLENT_SATISFACTION: f64 = 0.8;
/// Lower bound of the good band.
pub const GOOD_SATISFACTION: f64 = 0.6;

/// Mean score over all seated students; 0.0 for an empty plan.
pub fn overall_satisfaction(
    ctx: &ArrangementContext<'_>,
    plan: &SeatingPlan,
) -> Result<f64, ScoringFault> {
    let mut total = 0.0;
    let mut count = 0usize;
    for (student, seat) in plan.pairs() {
        total += ctx.score(student, seat)?;
        count += 1;
    }
    Ok(if count == 0 { 0.0 } else { total / count as f64 })
}

/// Entry count of one satisfaction band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandCount {
    /// Entries in the band.
    pub count: usize,
    /// Fraction of all entries (0.0 when there are none).
    pub share: f64,
}

/// Entries grouped by satisfaction band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionDistribution {
    pub excellent: BandCount,
    pub good: BandCount,
    pub fair: BandCount,
}

impl SatisfactionDistribution {
    /// Sorts entries into bands.
    pub fn from_entries(entries: &[AssignmentEntry]) -> Self {
        let (mut excellent, mut good, mut fair) = (0, 0, 0);
        for e in entries {
            if e.satisfaction >= EXCELLENT_SATISFACTION {
                excellent += 1;
            } else if e.satisfaction >= GOOD_SATISFACTION {
                good += 1;
            } else {
                fair += 1;
            }
        }

        let band = |count: usize| BandCount {
            count,
            share: if entries.is_empty() {
                0.0
            } else {
                count as f64 / entries.len() as f64
            },
        };
        Self {
            excellent: band(excellent),
            good: band(good),
            fair: band(fair),
        }
    }
}

/// Run-level statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementStats {
    /// Students on the roster.
    pub total_students: usize,
    /// Entries in the result.
    pub assigned_count: usize,
    /// Entries placed by the random fallback.
    pub fallback_count: usize,
    /// Mean entry satisfaction (0.0..=1.0).
    pub overall_satisfaction: f64,
    /// Optimizer rounds used.
    pub iterations_used: usize,
    /// Whether the optimizer converged.
    pub converged: bool,
    /// Whether the result came from the fallback.
    pub used_fallback: bool,
    /// Entries per satisfaction band.
    pub distribution: SatisfactionDistribution,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl ArrangementStats {
    /// Computes statistics from final entries.
    ///
    /// # Arguments
    /// * `entries` - The final assignment entries.
    /// * `total_students` - Roster size.
    /// * `iterations_used` - Optimizer rounds run.
    /// * `converged` - Optimizer convergence flag.
    /// * `duration` - Wall-clock duration.
    pub fn calculate(
        entries: &[AssignmentEntry],
        total_students: usize,
        iterations_used: usize,
        converged: bool,
        duration: Duration,
    ) -> Self {
        let fallback_count = entries
            .iter()
            .filter(|e| e.method == AssignmentMethod::RandomFallback)
            .count();

        let overall_satisfaction = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.satisfaction).sum::<f64>() / entries.len() as f64
        };

        Self {
            total_students,
            assigned_count: entries.len(),
            fallback_count,
            overall_satisfaction,
            iterations_used,
            converged,
            used_fallback: fallback_count > 0,
            distribution: SatisfactionDistribution::from_entries(entries),
            duration,
        }
    }

    /// Students left without a seat.
    pub fn unassigned_count(&self) -> usize {
        self.total_students.saturating_sub(self.assigned_count)
    }
}
