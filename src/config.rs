//! Configuration management for the career-readiness engine
//!
//! Scoring weights, roadmap content knobs, and the compliance window are
//! tunable configuration. The behavioral invariants (monotonic trending
//! score, deterministic generation, the gap arithmetic) hold for any
//! non-negative weights.

use crate::error::{CareerReadinessError, Result};
use crate::roadmap::content::DEFAULT_PHASES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub roadmap: RoadmapConfig,
    pub compliance: ComplianceConfig,
    pub output: OutputConfig,
}

/// Weights for the trending (market value) score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f32,
    /// Points per skill held, up to `breadth_cap` skills.
    pub breadth_weight: f32,
    pub breadth_cap: usize,
    /// Points per high-demand registry skill the candidate holds.
    pub presence_weight: f32,
    /// Penalty per registry skill the candidate lacks; keep this smaller
    /// than `presence_weight`.
    pub absence_penalty: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// How many future-skill predictions to emit.
    pub prediction_count: usize,
    /// Phase labels the weekly plan cycles through.
    pub phases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Days an assessment score stays valid.
    pub validity_days: i64,
    /// Minimum passing score.
    pub min_score: u8,
    /// Emit the expiry warning when this many days or fewer remain.
    pub warning_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                base_score: 35.0,
                breadth_weight: 2.0,
                breadth_cap: 10,
                presence_weight: 5.0,
                absence_penalty: 1.5,
            },
            roadmap: RoadmapConfig {
                prediction_count: 3,
                phases: DEFAULT_PHASES.iter().map(|p| p.to_string()).collect(),
            },
            compliance: ComplianceConfig {
                validity_days: 15,
                min_score: 75,
                warning_days: 3,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CareerReadinessError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerReadinessError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-readiness")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.compliance.validity_days, 15);
        assert_eq!(config.compliance.min_score, 75);
        assert_eq!(config.roadmap.prediction_count, 3);
        assert!(config.scoring.presence_weight > config.scoring.absence_penalty);
        assert!(!config.roadmap.phases.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(back.compliance.min_score, config.compliance.min_score);
        assert_eq!(back.roadmap.phases, config.roadmap.phases);
    }
}
