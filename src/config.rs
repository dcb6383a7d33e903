//! Engine configuration.
//!
//! Weights and stopping rules for one arrangement run. Every field has a
//! default, so a TOML file only needs to name what it overrides.
//!
//! # Example
//!
//! ```
//! use seat_arrange::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     wish_weight = 0.6
//!     max_iterations = 200
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert!((config.wish_weight - 0.6).abs() < 1e-10);
//! assert!((config.teaching_weight - 0.3).abs() < 1e-10);
//! assert_eq!(config.max_iterations, 200);
//! assert_eq!(config.random_seed, Some(7));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scoring weights and optimizer limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Weight of preferred/avoided seat matches.
    pub wish_weight: f64,
    /// Weight of the front-row teaching term.
    pub teaching_weight: f64,
    /// Fairness weight. Validated and carried, not used by the seat score.
    pub fairness_weight: f64,
    /// Weight of the special-needs constraint term.
    pub constraint_weight: f64,
    /// Maximum optimizer rounds.
    pub max_iterations: usize,
    /// Minimum acceptable overall satisfaction (0.0..=1.0).
    pub min_satisfaction: f64,
    /// Recover stage failures with a random assignment.
    pub enable_random_fallback: bool,
    /// Seed for the fallback shuffle. `None` seeds from the OS.
    pub random_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wish_weight: 0.4,
            teaching_weight: 0.3,
            fairness_weight: 0.2,
            constraint_weight: 0.1,
            max_iterations: 1000,
            min_satisfaction: 0.7,
            enable_random_fallback: true,
            random_seed: None,
        }
    }
}

impl EngineConfig {
    /// Upper bound accepted for `max_iterations`.
    pub const MAX_ITERATIONS_LIMIT: usize = 100_000;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Checks value ranges.
    ///
    /// Every problem found is joined into one `ConfigError::Invalid`
    /// message. Use [`crate::validation::validate_config`] to get them as
    /// separate `ValidationError`s.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match crate::validation::validate_config(&self) {
            Ok(()) => Ok(self),
            Err(errors) => Err(ConfigError::Invalid(
                errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            )),
        }
    }

    /// Sets all four weights.
    pub fn with_weights(
        mut self,
        wish: f64,
        teaching: f64,
        fairness: f64,
        constraint: f64,
    ) -> Self {
        self.wish_weight = wish;
        self.teaching_weight = teaching;
        self.fairness_weight = fairness;
        self.constraint_weight = constraint;
        self
    }

    /// Sets the round budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the satisfaction threshold.
    pub fn with_min_satisfaction(mut self, min_satisfaction: f64) -> Self {
        self.min_satisfaction = min_satisfaction;
        self
    }

    /// Enables or disables the random fallback on stage failure.
    pub fn with_random_fallback(mut self, enabled: bool) -> Self {
        self.enable_random_fallback = enabled;
        self
    }

    /// Sets the fallback shuffle seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::default();
        assert!((c.wish_weight - 0.4).abs() < 1e-10);
        assert!((c.teaching_weight - 0.3).abs() < 1e-10);
        assert!((c.fairness_weight - 0.2).abs() < 1e-10);
        assert!((c.constraint_weight - 0.1).abs() < 1e-10);
        assert_eq!(c.max_iterations, 1000);
        assert!((c.min_satisfaction - 0.7).abs() < 1e-10);
        assert!(c.enable_random_fallback);
        assert_eq!(c.random_seed, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(c, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let c = EngineConfig::from_toml_str(
            r#"
            min_satisfaction = 0.5
            enable_random_fallback = false
            "#,
        )
        .unwrap();
        assert!((c.min_satisfaction - 0.5).abs() < 1e-10);
        assert!(!c.enable_random_fallback);
        assert_eq!(c.max_iterations, 1000);
    }

    #[test]
    fn test_bad_toml() {
        let err = EngineConfig::from_toml_str("wish_weight = \"heavy\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/seat-arrange.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validated() {
        assert!(EngineConfig::default().validated().is_ok());
        let err = EngineConfig::default()
            .with_min_satisfaction(1.5)
            .validated()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("min_satisfaction")));
    }

    #[test]
    fn test_validated_reports_every_problem() {
        let err = EngineConfig::default()
            .with_min_satisfaction(1.5)
            .with_max_iterations(EngineConfig::MAX_ITERATIONS_LIMIT + 1)
            .validated()
            .unwrap_err();
        let message = match err {
            ConfigError::Invalid(message) => message,
            other => panic!("expected invalid config, got {other:?}"),
        };
        assert!(message.contains("min_satisfaction"));
        assert!(message.contains("max_iterations"));
        assert_eq!(message.matches("; ").count(), 1);
    }

    #[test]
    fn test_builders() {
        let c = EngineConfig::new()
            .with_weights(0.0, 0.0, 0.0, 0.0)
            .with_max_iterations(5)
            .with_min_satisfaction(0.0)
            .with_random_fallback(false)
            .with_random_seed(99);
        assert_eq!(c.wish_weight, 0.0);
        assert_eq!(c.max_iterations, 5);
        assert!(!c.enable_random_fallback);
        assert_eq!(c.random_seed, Some(99));
    }
}
