use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::scoring::{DEFAULT_BONUS_WEIGHT, DEFAULT_DISQUALIFIED_SCORE};
use crate::core::ScoringConfig;
use crate::error::ConfigError;
use crate::models::WeightConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_bonus_weight")]
    pub bonus_weight: f64,
    #[serde(default = "default_disqualified_score")]
    pub disqualified_score: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            bonus_weight: default_bonus_weight(),
            disqualified_score: default_disqualified_score(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[serde(default = "default_general_skills_weight")]
    pub general_skills: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            experience: default_experience_weight(),
            education: default_education_weight(),
            general_skills: default_general_skills_weight(),
        }
    }
}

fn default_experience_weight() -> f64 {
    0.5
}
fn default_education_weight() -> f64 {
    0.2
}
fn default_general_skills_weight() -> f64 {
    0.3
}
fn default_bonus_weight() -> f64 {
    DEFAULT_BONUS_WEIGHT
}
fn default_disqualified_score() -> f64 {
    DEFAULT_DISQUALIFIED_SCORE
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RANK_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RANK_)
            // e.g., RANK_SCORING__BONUS_WEIGHT -> scoring.bonus_weight
            .add_source(
                Environment::with_prefix("RANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RANK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate the raw scoring settings into an engine-ready config.
    /// A weight triple that does not sum to 1.0 is rejected here, before
    /// any candidate is scored.
    pub fn scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        let weights = WeightConfig::new(
            self.scoring.weights.experience,
            self.scoring.weights.education,
            self.scoring.weights.general_skills,
        )?;

        Ok(ScoringConfig {
            weights,
            bonus_weight: self.scoring.bonus_weight,
            disqualified_score: self.scoring.disqualified_score,
        })
    }
}
