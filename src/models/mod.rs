// Model exports
pub mod domain;

pub use domain::{
    CandidateProfile, DegreeLevel, EducationProfile, EducationRequirement, LanguageLevel,
    LocationRequirement, RankedResult, RequirementSpec, Residence, ScoreBreakdown,
    SkillRequirement, WeightConfig, WEIGHT_SUM_TOLERANCE,
};
