// Core engine exports
pub mod evaluators;
pub mod ranker;
pub mod scoring;
pub mod taxonomy;

pub use evaluators::{
    evaluate_education, evaluate_general_skills, evaluate_location, evaluate_skills,
    evaluate_work_type,
};
pub use ranker::Ranker;
pub use scoring::{score_candidate, ScoringConfig, DEFAULT_BONUS_WEIGHT, DEFAULT_DISQUALIFIED_SCORE};
pub use taxonomy::SkillTaxonomy;
