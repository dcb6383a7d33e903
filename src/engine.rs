//! Seating engine facade.
//!
//! Runs one arrangement end to end and returns a [`ResultEnvelope`]:
//!
//! ```text
//! Idle → Preprocessing → Initializing → Optimizing → Evaluating
//!      → { Finalizing | Fallback } → Done
//! ```
//!
//! `Preprocessing` rejects invalid input with [`EngineError::Validation`]
//! before any assignment work. `Evaluating` sends the run to `Fallback` when
//! the optimized plan is below `min_satisfaction`, or when an earlier stage
//! failed and `enable_random_fallback` is set; a failure with the fallback
//! disabled ends in `Error` and is returned to the caller.
//!
//! The engine keeps no state between runs. Every stage transition is logged
//! through `tracing` and recorded in the envelope's diagnostic trail.

use std::fmt;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::arrangement::{
    random_fallback, ArrangementContext, ArrangementStats, GreedyInitializer, OptimizationOutcome,
    SwapOptimizer,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{AssignmentEntry, AssignmentMethod, Classroom, PreferenceRecord, Student};
use crate::scoring::{SeatScorer, WeightedScorer};
use crate::validation::validate_input;

/// Stage of an arrangement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineStage {
    Idle,
    Preprocessing,
    Initializing,
    Optimizing,
    Evaluating,
    Finalizing,
    Fallback,
    Done,
    Error,
}

impl fmt::Display for EngineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Preprocessing => "preprocessing",
            Self::Initializing => "initializing",
            Self::Optimizing => "optimizing",
            Self::Evaluating => "evaluating",
            Self::Finalizing => "finalizing",
            Self::Fallback => "fallback",
            Self::Done => "done",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// One entry of the diagnostic trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Stage the event belongs to.
    pub stage: EngineStage,
    /// What happened.
    pub message: String,
}

/// Output of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// One entry per seated student.
    pub assignments: Vec<AssignmentEntry>,
    /// Run statistics.
    pub stats: ArrangementStats,
    /// Stage-by-stage trail.
    pub diagnostics: Vec<DiagnosticEvent>,
    /// Failure recovered by the fallback, if any.
    pub error: Option<String>,
}

impl ResultEnvelope {
    /// Whether the fallback produced the assignments.
    pub fn used_fallback(&self) -> bool {
        self.stats.used_fallback
    }

    /// Stages visited, in order.
    pub fn stages(&self) -> Vec<EngineStage> {
        let mut stages: Vec<EngineStage> = Vec::new();
        for event in &self.diagnostics {
            if stages.last() != Some(&event.stage) {
                stages.push(event.stage);
            }
        }
        stages
    }

    /// Entry for a student.
    pub fn assignment_for(&self, student_id: &str) -> Option<&AssignmentEntry> {
        self.assignments.iter().find(|a| a.student_id == student_id)
    }
}

/// Stage tracker and diagnostic trail for one run.
#[derive(Debug)]
struct RunState {
    stage: EngineStage,
    diagnostics: Vec<DiagnosticEvent>,
}

impl RunState {
    fn new() -> Self {
        Self {
            stage: EngineStage::Idle,
            diagnostics: Vec::new(),
        }
    }

    fn enter(&mut self, stage: EngineStage, message: impl Into<String>) {
        debug!(from = %self.stage, to = %stage, "stage transition");
        self.stage = stage;
        self.note(message);
    }

    fn note(&mut self, message: impl Into<String>) {
        self.diagnostics.push(DiagnosticEvent {
            stage: self.stage,
            message: message.into(),
        });
    }
}

/// Optimized plan turned into scored entries.
struct Optimized {
    entries: Vec<AssignmentEntry>,
    outcome: OptimizationOutcome,
}

/// Seat arrangement engine.
///
/// # Example
///
/// ```
/// use seat_arrange::config::EngineConfig;
/// use seat_arrange::engine::SeatingEngine;
/// use seat_arrange::models::{AssignmentMethod, Classroom, PreferenceRecord, Student};
///
/// let students = vec![Student::new("S1"), Student::new("S2").vision_impaired()];
/// let room = Classroom::grid("R101", 3, 2);
/// let wishes = vec![PreferenceRecord::new("S1").prefer_seat("2-2")];
/// let config = EngineConfig::default().with_min_satisfaction(0.5);
///
/// let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
/// assert_eq!(result.assignments.len(), 2);
/// assert_eq!(result.assignment_for("S1").unwrap().seat_id, "2-2");
/// assert!(result.assignments.iter().all(|a| a.method == AssignmentMethod::Optimized));
/// ```
#[derive(Debug, Default)]
pub struct SeatingEngine {
    config: EngineConfig,
    scorer: Option<Box<dyn SeatScorer>>,
}

impl SeatingEngine {
    /// Creates an engine using the weighted scorer.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            scorer: None,
        }
    }

    /// Replaces the weighted scorer.
    pub fn with_scorer<S: SeatScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    /// Runs an arrangement.
    ///
    /// The fallback shuffle is seeded from `config.random_seed`, or from the
    /// OS when no seed is set.
    pub fn run(
        &self,
        students: &[Student],
        classroom: &Classroom,
        preferences: &[PreferenceRecord],
    ) -> Result<ResultEnvelope> {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(students, classroom, preferences, &mut rng)
    }

    /// Runs an arrangement with a caller-supplied random source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        students: &[Student],
        classroom: &Classroom,
        preferences: &[PreferenceRecord],
        rng: &mut R,
    ) -> Result<ResultEnvelope> {
        let started = Instant::now();
        let mut run = RunState::new();

        run.enter(
            EngineStage::Preprocessing,
            format!(
                "{} students, {} available seats, {} preference records",
                students.len(),
                classroom.available_seat_count(),
                preferences.len()
            ),
        );
        info!(
            students = students.len(),
            seats = classroom.available_seat_count(),
            preferences = preferences.len(),
            classroom = %classroom.id,
            "seat arrangement started"
        );

        if let Err(errors) = validate_input(students, classroom, &self.config) {
            for e in &errors {
                run.note(e.message.clone());
            }
            run.enter(EngineStage::Error, "input rejected");
            warn!(errors = errors.len(), "seat arrangement rejected by validation");
            return Err(EngineError::Validation(errors));
        }

        let weighted;
        let scorer: &dyn SeatScorer = match &self.scorer {
            Some(scorer) => scorer.as_ref(),
            None => {
                weighted = WeightedScorer::for_classroom(&self.config, classroom);
                &weighted
            }
        };
        let ctx = ArrangementContext::new(students, classroom, preferences, scorer);

        let optimized = self.optimize(&ctx, &mut run);

        run.enter(EngineStage::Evaluating, "checking plan quality");
        let min = self.config.min_satisfaction;
        let (entries, iterations, converged, error) = match optimized {
            Ok(optimized) if students.is_empty() || optimized.outcome.satisfaction >= min => {
                run.enter(
                    EngineStage::Finalizing,
                    format!(
                        "satisfaction {:.3} meets threshold {min:.3}",
                        optimized.outcome.satisfaction
                    ),
                );
                let outcome = optimized.outcome;
                (optimized.entries, outcome.iterations, outcome.converged, None)
            }
            Ok(optimized) => {
                let outcome = optimized.outcome;
                run.enter(
                    EngineStage::Fallback,
                    format!(
                        "satisfaction {:.3} below threshold {min:.3}",
                        outcome.satisfaction
                    ),
                );
                warn!(
                    satisfaction = outcome.satisfaction,
                    min_satisfaction = min,
                    "optimized plan below threshold, using random fallback"
                );
                let entries = random_fallback(students, &ctx.seats, rng);
                (entries, outcome.iterations, outcome.converged, None)
            }
            Err(err) if self.config.enable_random_fallback => {
                let message = err.to_string();
                run.enter(EngineStage::Fallback, format!("recovering from: {message}"));
                warn!(error = %message, "stage failed, using random fallback");
                let entries = random_fallback(students, &ctx.seats, rng);
                (entries, 0, false, Some(message))
            }
            Err(err) => {
                run.enter(EngineStage::Error, err.to_string());
                warn!(error = %err, "seat arrangement failed");
                return Err(err);
            }
        };

        let assigned_at_ms = now_ms();
        let assignments: Vec<AssignmentEntry> =
            entries.into_iter().map(|e| e.at(assigned_at_ms)).collect();
        let stats = ArrangementStats::calculate(
            &assignments,
            students.len(),
            iterations,
            converged,
            started.elapsed(),
        );

        run.enter(
            EngineStage::Done,
            format!(
                "{} of {} students seated, satisfaction {:.3}",
                stats.assigned_count, stats.total_students, stats.overall_satisfaction
            ),
        );
        info!(
            assigned = stats.assigned_count,
            unassigned = stats.unassigned_count(),
            fallback = stats.used_fallback,
            satisfaction = stats.overall_satisfaction,
            iterations = stats.iterations_used,
            converged = stats.converged,
            elapsed_ms = stats.duration.as_millis() as u64,
            "seat arrangement finished"
        );

        Ok(ResultEnvelope {
            assignments,
            stats,
            diagnostics: run.diagnostics,
            error,
        })
    }

    /// Initializing and Optimizing, then scores the final plan.
    fn optimize(
        &self,
        ctx: &ArrangementContext<'_>,
        run: &mut RunState,
    ) -> Result<Optimized> {
        run.enter(
            EngineStage::Initializing,
            format!("greedy initialization with '{}' scorer", ctx.scorer_name()),
        );
        let mut plan = GreedyInitializer::new()
            .initialize(ctx)
            .map_err(|fault| {
                EngineError::unexpected(EngineStage::Initializing, fault.to_string())
            })?;
        run.note(format!("{} students seated", plan.assigned_count()));
        let unassigned = plan.unassigned_students();
        if !unassigned.is_empty() {
            run.note(format!("{} students left without a seat", unassigned.len()));
        }

        run.enter(
            EngineStage::Optimizing,
            format!(
                "swap search, budget {} rounds, target {:.3}",
                self.config.max_iterations, self.config.min_satisfaction
            ),
        );
        let outcome = SwapOptimizer::from_config(&self.config)
            .optimize(ctx, &mut plan)
            .map_err(|fault| EngineError::unexpected(EngineStage::Optimizing, fault.to_string()))?;
        run.note(format!(
            "{} rounds, {} swaps, converged: {}, satisfaction {:.3}",
            outcome.iterations, outcome.swaps, outcome.converged, outcome.satisfaction
        ));

        let mut entries = Vec::with_capacity(plan.assigned_count());
        for (student, seat) in plan.pairs() {
            let satisfaction = ctx
                .score(student, seat)
                .map_err(|fault| {
                    EngineError::unexpected(EngineStage::Evaluating, fault.to_string())
                })?;
            entries.push(AssignmentEntry::new(
                &ctx.students[student].id,
                &ctx.seats[seat].id,
                satisfaction,
                AssignmentMethod::Optimized,
            ));
        }

        Ok(Optimized { entries, outcome })
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::FALLBACK_SATISFACTION;
    use crate::models::{HeightCategory, Seat};
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns 0.5 for the first `healthy_calls` scores, NaN afterwards.
    #[derive(Debug)]
    struct FailingScorer {
        calls: AtomicUsize,
        healthy_calls: usize,
    }

    impl FailingScorer {
        fn after(healthy_calls: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                healthy_calls,
            }
        }
    }

    impl SeatScorer for FailingScorer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn score(&self, _: &Student, _: &Seat, _: Option<&PreferenceRecord>) -> f64 {
            if self.calls.fetch_add(1, Ordering::SeqCst) < self.healthy_calls {
                0.5
            } else {
                f64::NAN
            }
        }
    }

    fn roster(n: usize) -> Vec<Student> {
        (1..=n)
            .map(|i| Student::new(format!("S{i}")).with_name(format!("Student {i}")))
            .collect()
    }

    fn class_of_twelve() -> (Vec<Student>, Classroom, Vec<PreferenceRecord>) {
        let mut students = roster(10);
        students.push(Student::new("V").vision_impaired());
        students.push(Student::new("T").with_height(HeightCategory::Tall));
        let room = Classroom::grid("R101", 4, 4).with_unavailable("1-4");
        let wishes = vec![
            PreferenceRecord::new("S1").prefer_seat("2-2").prefer_seat("2-3"),
            PreferenceRecord::new("S2").avoid_seat("4-1").avoid_seat("4-2"),
            PreferenceRecord::from_admin("S3", "A1").prefer_seat("1-1"),
            PreferenceRecord::new("S4").prefer_seat("1-1").prefer_neighbor("S5"),
        ];
        (students, room, wishes)
    }

    fn assert_one_to_one(result: &ResultEnvelope) {
        let students: HashSet<&str> = result
            .assignments
            .iter()
            .map(|a| a.student_id.as_str())
            .collect();
        let seats: HashSet<&str> = result
            .assignments
            .iter()
            .map(|a| a.seat_id.as_str())
            .collect();
        assert_eq!(students.len(), result.assignments.len());
        assert_eq!(seats.len(), result.assignments.len());
    }

    #[test]
    fn test_complete_assignment() {
        let (students, room, wishes) = class_of_twelve();
        let config = EngineConfig::default().with_min_satisfaction(0.0);
        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();

        assert_eq!(result.assignments.len(), students.len().min(room.available_seat_count()));
        assert_one_to_one(&result);
        assert!(result
            .assignments
            .iter()
            .all(|a| (0.0..=1.0).contains(&a.satisfaction)));
        assert!(!result.used_fallback());
        assert!(result.error.is_none());
        assert_eq!(result.stats.total_students, 12);
        assert_eq!(result.stats.assigned_count, 12);
        // unavailable seat never used
        assert!(result.assignments.iter().all(|a| a.seat_id != "1-4"));
    }

    #[test]
    fn test_admin_record_wins_contested_seat() {
        let (students, room, wishes) = class_of_twelve();
        let config = EngineConfig::default().with_min_satisfaction(0.0);
        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
        assert_eq!(result.assignment_for("S3").unwrap().seat_id, "1-1");
    }

    #[test]
    fn test_stage_sequence_optimized() {
        let (students, room, wishes) = class_of_twelve();
        let config = EngineConfig::default().with_min_satisfaction(0.0);
        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
        assert_eq!(
            result.stages(),
            vec![
                EngineStage::Preprocessing,
                EngineStage::Initializing,
                EngineStage::Optimizing,
                EngineStage::Evaluating,
                EngineStage::Finalizing,
                EngineStage::Done,
            ]
        );
    }

    #[test]
    fn test_min_satisfaction_zero_converges_immediately() {
        let (students, room, wishes) = class_of_twelve();
        let config = EngineConfig::default().with_min_satisfaction(0.0);
        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
        assert!(result.stats.converged);
        assert_eq!(result.stats.iterations_used, 0);
    }

    #[test]
    fn test_scenario_a_preferred_front_seat() {
        let students = roster(2);
        let room = Classroom::new("R1")
            .with_seat(Seat::new("front", 1, 1))
            .with_seat(Seat::new("back", 2, 1));
        let wishes = vec![PreferenceRecord::new("S1").prefer_seat("front")];
        let config = EngineConfig::default().with_min_satisfaction(0.0);

        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
        assert_eq!(result.assignment_for("S1").unwrap().seat_id, "front");
        assert_eq!(result.assignment_for("S2").unwrap().seat_id, "back");
        assert_eq!(result.stats.iterations_used, 0);
    }

    #[test]
    fn test_scenario_b_too_many_students() {
        let students = roster(5);
        let room = Classroom::grid("R1", 1, 3);
        let err = SeatingEngine::new(EngineConfig::default())
            .run(&students, &room, &[])
            .unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CapacityExceeded));
        assert!(err.to_string().contains("exceed"));
    }

    #[test]
    fn test_empty_classroom_rejected() {
        let students = roster(1);
        let room = Classroom::grid("R1", 1, 1).with_unavailable("1-1");
        let err = SeatingEngine::new(EngineConfig::default())
            .run(&students, &room, &[])
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_min_satisfaction(-0.5);
        let err = SeatingEngine::new(config)
            .run(&roster(1), &Classroom::grid("R1", 1, 1), &[])
            .unwrap_err();
        assert!(err
            .validation_errors()
            .unwrap()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConfig));
    }

    #[test]
    fn test_scenario_c_zero_weights() {
        let students = roster(6);
        let room = Classroom::grid("R1", 3, 3);
        let wishes = vec![PreferenceRecord::new("S1").prefer_seat("1-1").avoid_seat("3-3")];
        let config = EngineConfig::default()
            .with_weights(0.0, 0.0, 0.0, 0.0)
            .with_min_satisfaction(0.0);

        let result = SeatingEngine::new(config).run(&students, &room, &wishes).unwrap();
        assert!(result.assignments.iter().all(|a| a.satisfaction == 0.5));
        assert!(result.stats.converged);
        assert_eq!(result.stats.iterations_used, 0);
        assert!(!result.used_fallback());
    }

    #[test]
    fn test_scenario_d_failure_without_fallback() {
        // 3 students, 3 seats: greedy scores 6 pairs, the first satisfaction
        // check 3 more; the 10th call lands inside the first swap round.
        let students = roster(3);
        let room = Classroom::grid("R1", 1, 3);
        let config = EngineConfig::default()
            .with_min_satisfaction(1.0)
            .with_random_fallback(false);
        let engine = SeatingEngine::new(config).with_scorer(FailingScorer::after(9));

        let err = engine.run(&students, &room, &[]).unwrap_err();
        match err {
            EngineError::Unexpected { stage, ref message } => {
                assert_eq!(stage, EngineStage::Optimizing);
                assert!(message.contains("failing"));
            }
            other => panic!("expected unexpected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_recovered_by_fallback() {
        let students = roster(3);
        let room = Classroom::grid("R1", 1, 3);
        let config = EngineConfig::default()
            .with_min_satisfaction(1.0)
            .with_random_seed(11);
        let engine = SeatingEngine::new(config).with_scorer(FailingScorer::after(9));

        let result = engine.run(&students, &room, &[]).unwrap();
        assert!(result.used_fallback());
        assert_eq!(result.assignments.len(), 3);
        assert_eq!(result.stats.fallback_count, 3);
        assert_eq!(result.stats.iterations_used, 0);
        assert!(!result.stats.converged);
        assert!(result.error.as_deref().unwrap().contains("optimizing"));
        assert_eq!(result.stages().last(), Some(&EngineStage::Done));
        assert!(result.stages().contains(&EngineStage::Fallback));
    }

    #[test]
    fn test_low_satisfaction_falls_back() {
        let students = roster(4);
        let room = Classroom::grid("R1", 2, 2);
        let config = EngineConfig::default()
            .with_weights(0.0, 0.0, 0.0, 0.0)
            .with_min_satisfaction(0.9)
            .with_random_seed(3);

        let result = SeatingEngine::new(config).run(&students, &room, &[]).unwrap();
        assert!(result.used_fallback());
        assert!(result.error.is_none());
        assert_one_to_one(&result);
        for a in &result.assignments {
            assert_eq!(a.method, AssignmentMethod::RandomFallback);
            assert_eq!(a.satisfaction, FALLBACK_SATISFACTION);
        }
        assert!((result.stats.overall_satisfaction - 0.5).abs() < 1e-10);
        assert_eq!(result.stats.distribution.fair.count, 4);
        // constant scores: first round makes no swap
        assert_eq!(result.stats.iterations_used, 1);
        assert!(result.stats.converged);
    }

    #[test]
    fn test_scenario_e_vision_impaired_front_rows() {
        let mut students = roster(4);
        students.insert(2, Student::new("V").vision_impaired());
        let room = Classroom::grid("R1", 5, 2);
        let config = EngineConfig::default().with_min_satisfaction(0.0);

        let result = SeatingEngine::new(config).run(&students, &room, &[]).unwrap();
        let seat_id = &result.assignment_for("V").unwrap().seat_id;
        assert!(room.seat(seat_id).unwrap().row <= 3);
    }

    #[test]
    fn test_deterministic_optimized_path() {
        let (students, room, wishes) = class_of_twelve();
        let engine = SeatingEngine::new(EngineConfig::default().with_min_satisfaction(0.0));
        let a = engine.run(&students, &room, &wishes).unwrap();
        let b = engine.run(&students, &room, &wishes).unwrap();
        let pairs = |r: &ResultEnvelope| {
            r.assignments
                .iter()
                .map(|e| (e.student_id.clone(), e.seat_id.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&a), pairs(&b));
        assert_eq!(a.stats.overall_satisfaction, b.stats.overall_satisfaction);
    }

    #[test]
    fn test_seeded_fallback_repeats() {
        let students = roster(6);
        let room = Classroom::grid("R1", 3, 3);
        let config = EngineConfig::default().with_min_satisfaction(1.0);
        let engine = SeatingEngine::new(config);

        let a = engine
            .run_with_rng(&students, &room, &[], &mut SmallRng::seed_from_u64(21))
            .unwrap();
        let b = engine
            .run_with_rng(&students, &room, &[], &mut SmallRng::seed_from_u64(21))
            .unwrap();
        assert!(a.used_fallback());
        let seats = |r: &ResultEnvelope| {
            r.assignments
                .iter()
                .map(|e| e.seat_id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(seats(&a), seats(&b));
    }

    #[test]
    fn test_empty_roster() {
        let result = SeatingEngine::new(EngineConfig::default())
            .run(&[], &Classroom::grid("R1", 2, 2), &[])
            .unwrap();
        assert!(result.assignments.is_empty());
        assert!(!result.used_fallback());
        assert_eq!(result.stats.overall_satisfaction, 0.0);
    }

    #[test]
    fn test_timestamps_set() {
        let result = SeatingEngine::new(EngineConfig::default().with_min_satisfaction(0.0))
            .run(&roster(2), &Classroom::grid("R1", 1, 2), &[])
            .unwrap();
        assert!(result.assignments.iter().all(|a| a.assigned_at_ms > 0));
    }

    #[test]
    fn test_envelope_serializes() {
        let result = SeatingEngine::new(EngineConfig::default().with_random_seed(1))
            .run(&roster(2), &Classroom::grid("R1", 1, 2), &[])
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["assignments"].is_array());
        assert_eq!(json["diagnostics"][0]["stage"], "preprocessing");
        assert!(json["stats"]["used_fallback"].is_boolean());
        assert!(json["stats"]["distribution"]["excellent"]["count"].is_u64());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(EngineStage::Optimizing.to_string(), "optimizing");
        assert_eq!(EngineStage::Fallback.to_string(), "fallback");
    }
}
