//! Resume Rank - deterministic scoring and ranking engine for job candidates
//!
//! This library scores structured candidate profiles against a required and
//! an optional requirement specification, producing a reproducible 1-10
//! score per candidate and a deterministically ordered ranking with
//! explanations. Document extraction, inference transport and result
//! export live outside this crate and hand over fully-formed profiles.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{score_candidate, Ranker, ScoringConfig, SkillTaxonomy};
pub use crate::error::ConfigError;
pub use crate::models::{
    CandidateProfile, DegreeLevel, LanguageLevel, RankedResult, RequirementSpec, ScoreBreakdown,
    SkillRequirement, WeightConfig,
};
