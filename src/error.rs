use thiserror::Error;

/// Configuration-time failures. All of these surface before any candidate
/// is scored; disqualification during scoring is a normal outcome, not an
/// error, and is recorded on the breakdown instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scoring weights must sum to 1.0, got {sum:.4} (experience {experience}, education {education}, general skills {general_skills})")]
    WeightSum {
        experience: f64,
        education: f64,
        general_skills: f64,
        sum: f64,
    },

    #[error("scoring weight '{name}' must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("unknown degree level '{0}'")]
    UnknownDegreeLevel(String),

    #[error("unknown language level '{0}'")]
    UnknownLanguageLevel(String),

    #[error("taxonomy closeness for '{from}' -> '{to}' must be in (0, 1], got {closeness}")]
    InvalidCloseness {
        from: String,
        to: String,
        closeness: f64,
    },

    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}
