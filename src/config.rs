//! Planner configuration.
//!
//! Loaded from YAML text or a YAML file. Every key is optional; missing
//! keys fall back to the defaults below.
//!
//! ```yaml
//! strategy: balanced      # conservative | balanced | aggressive | burnout
//! horizon: 4              # number of upcoming terms, >= 1
//! target-gpa: 3.7         # grade assumed for each retake
//! grade-ceiling: 4.0      # courses graded at or above this are not candidates
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Strategy;
use crate::valuation::{DEFAULT_GRADE_CEILING, DEFAULT_TARGET_GPA};

/// Default number of planned terms.
pub const DEFAULT_HORIZON: usize = 2;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Planning inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlannerConfig {
    /// Selection and placement strategy. Unknown names are kept as
    /// [`Strategy::Unspecified`].
    pub strategy: Strategy,

    /// Number of upcoming terms to plan.
    pub horizon: usize,

    /// Grade assumed for each retaken course.
    pub target_gpa: f64,

    /// Exclusive upper grade bound for retake eligibility.
    pub grade_ceiling: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Conservative,
            horizon: DEFAULT_HORIZON,
            target_gpa: DEFAULT_TARGET_GPA,
            grade_ceiling: DEFAULT_GRADE_CEILING,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of planned terms.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the target grade.
    pub fn with_target_gpa(mut self, target_gpa: f64) -> Self {
        self.target_gpa = target_gpa;
        self
    }

    /// Sets the eligibility grade ceiling.
    pub fn with_grade_ceiling(mut self, grade_ceiling: f64) -> Self {
        self.grade_ceiling = grade_ceiling;
        self
    }

    /// Parses and validates YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let config = Self::from_yaml_str(&content)?;
        log::info!("Loaded planner config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::Invalid("horizon must be > 0".to_string()));
        }
        if !self.target_gpa.is_finite() || !(0.0..=4.0).contains(&self.target_gpa) {
            return Err(ConfigError::Invalid(format!(
                "target-gpa must be within 0.0..=4.0, got {}",
                self.target_gpa
            )));
        }
        if !self.grade_ceiling.is_finite() || !(0.0..=4.0).contains(&self.grade_ceiling) {
            return Err(ConfigError::Invalid(format!(
                "grade-ceiling must be within 0.0..=4.0, got {}",
                self.grade_ceiling
            )));
        }
        if self.strategy == Strategy::Unspecified {
            log::warn!("Unrecognized strategy, using least-loaded placement with 8 selections");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.strategy, Strategy::Conservative);
        assert_eq!(config.horizon, 2);
        assert_eq!(config.target_gpa, 4.0);
        assert_eq!(config.grade_ceiling, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = PlannerConfig::from_yaml_str("strategy: burnout\nhorizon: 4\n").unwrap();
        assert_eq!(config.strategy, Strategy::Burnout);
        assert_eq!(config.horizon, 4);
        assert_eq!(config.target_gpa, 4.0);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = "strategy: balanced\nhorizon: 3\ntarget-gpa: 3.5\ngrade-ceiling: 3.7\n";
        let config = PlannerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            PlannerConfig::new()
                .with_strategy(Strategy::Balanced)
                .with_horizon(3)
                .with_target_gpa(3.5)
                .with_grade_ceiling(3.7)
        );
    }

    #[test]
    fn test_unknown_strategy_is_lenient() {
        let config = PlannerConfig::from_yaml_str("strategy: yolo\n").unwrap();
        assert_eq!(config.strategy, Strategy::Unspecified);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            PlannerConfig::from_yaml_str("horizon: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PlannerConfig::from_yaml_str("target-gpa: 4.5\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(PlannerConfig::new()
            .with_grade_ceiling(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            PlannerConfig::from_yaml_str("horizon: [1, 2\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PlannerConfig::from_yaml_str("horizon: many\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "strategy: aggressive").unwrap();
        writeln!(file, "horizon: 6").unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Aggressive);
        assert_eq!(config.horizon, 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PlannerConfig::load(dir.path().join("missing.yml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
