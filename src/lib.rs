//! Classroom seat arrangement engine.
//!
//! Assigns students to classroom seats from their seat and neighbor wishes,
//! teaching priorities, and special needs. A greedy pass seats students in
//! priority order, a pairwise swap search improves the plan, and a seeded
//! random assignment takes over when the result is not good enough.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `Seat`, `Classroom`,
//!   `PreferenceRecord`, `SeatingPlan`, `AssignmentEntry`
//! - **`scoring`**: `SeatScorer` trait and the weighted scorer
//! - **`arrangement`**: Greedy initializer, swap optimizer, random fallback,
//!   run statistics
//! - **`engine`**: `SeatingEngine` run lifecycle and result envelope
//! - **`config`**: `EngineConfig` weights and limits, TOML loading
//! - **`validation`**: Input, configuration, and preference checks
//! - **`error`**: `EngineError`
//!
//! # Example
//!
//! ```
//! use seat_arrange::{EngineConfig, SeatingEngine};
//! use seat_arrange::models::{Classroom, PreferenceRecord, Student};
//!
//! let students = vec![Student::new("S1"), Student::new("S2")];
//! let room = Classroom::grid("R101", 2, 2);
//! let wishes = vec![PreferenceRecord::new("S2").prefer_seat("1-1")];
//!
//! let result = SeatingEngine::new(EngineConfig::default().with_random_seed(42))
//!     .run(&students, &room, &wishes)
//!     .unwrap();
//! assert_eq!(result.assignments.len(), 2);
//! ```

pub mod arrangement;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod scoring;
pub mod validation;

pub use config::EngineConfig;
pub use engine::{ResultEnvelope, SeatingEngine};
pub use error::EngineError;
