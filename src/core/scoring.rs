use crate::core::evaluators::{
    evaluate_education, evaluate_general_skills, evaluate_location, evaluate_skills,
    evaluate_work_type,
};
use crate::core::taxonomy::SkillTaxonomy;
use crate::models::{CandidateProfile, RequirementSpec, ScoreBreakdown, WeightConfig};

/// Fraction of the optional-spec composite added on top of the required
/// composite. Kept outside the weight triple so the required weights still
/// sum to exactly 1.
pub const DEFAULT_BONUS_WEIGHT: f64 = 0.1;

/// Score a candidate is forced to when any hard filter fails: the scale
/// minimum, so disqualified candidates stay visible at the bottom.
pub const DEFAULT_DISQUALIFIED_SCORE: f64 = 1.0;

/// Tunables for one ranking run, threaded explicitly into every scoring
/// call rather than held in process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    pub weights: WeightConfig,
    pub bonus_weight: f64,
    pub disqualified_score: f64,
}

impl ScoringConfig {
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            bonus_weight: DEFAULT_BONUS_WEIGHT,
            disqualified_score: DEFAULT_DISQUALIFIED_SCORE,
        }
    }
}

/// Evaluate one candidate against the required and optional specs.
///
/// Hard-filter failures (missing exact-only skill, unmet education or
/// language tier, work-type mismatch, location mismatch) force the final
/// score to the configured floor regardless of the weighted math; the
/// breakdown records every failing reason. Otherwise the final score is
/// `round(1 + 9 * clamp(composite + bonus, 0, 1), 1)`.
pub fn score_candidate(
    profile: &CandidateProfile,
    required: &RequirementSpec,
    optional: &RequirementSpec,
    config: &ScoringConfig,
    taxonomy: &SkillTaxonomy,
) -> ScoreBreakdown {
    let (experience, mut failures) = evaluate_skills(profile, &required.specific_skills, taxonomy);
    let (education, education_failures) = evaluate_education(profile, &required.education);
    failures.extend(education_failures);
    let general_skills = evaluate_general_skills(profile, &required.general_skills);

    if let Some(failure) = evaluate_work_type(profile, &required.work_types) {
        failures.push(failure);
    }
    failures.extend(evaluate_location(profile, &required.personal_information));

    let optional_bonus = optional_bonus(profile, optional, taxonomy, config.bonus_weight);

    if !failures.is_empty() {
        return ScoreBreakdown {
            experience,
            education,
            general_skills,
            optional_bonus,
            passed_required: false,
            disqualifications: failures,
            final_score: config.disqualified_score,
        };
    }

    let weights = &config.weights;
    let composite = weights.experience() * experience
        + weights.education() * education
        + weights.general_skills() * general_skills;

    ScoreBreakdown {
        experience,
        education,
        general_skills,
        optional_bonus,
        passed_required: true,
        disqualifications: Vec::new(),
        final_score: to_scale(composite + optional_bonus),
    }
}

/// Average of the optional sub-scores actually evaluated, scaled by the
/// bonus weight. Categories the optional spec leaves empty are skipped,
/// not counted as zero, and optional requirements never disqualify.
fn optional_bonus(
    profile: &CandidateProfile,
    optional: &RequirementSpec,
    taxonomy: &SkillTaxonomy,
    bonus_weight: f64,
) -> f64 {
    let mut scores = Vec::new();

    if !optional.specific_skills.is_empty() {
        let (score, _) = evaluate_skills(profile, &optional.specific_skills, taxonomy);
        scores.push(score);
    }
    if optional.has_education() {
        let (score, _) = evaluate_education(profile, &optional.education);
        scores.push(score);
    }
    if !optional.general_skills.is_empty() {
        scores.push(evaluate_general_skills(profile, &optional.general_skills));
    }

    if scores.is_empty() {
        return 0.0;
    }

    scores.iter().sum::<f64>() / scores.len() as f64 * bonus_weight
}

/// Linear map from [0, 1] onto the 1-10 scale, one decimal of precision.
fn to_scale(value: f64) -> f64 {
    let clamped = value.clamp(0.0, 1.0);
    ((1.0 + 9.0 * clamped) * 10.0).round() / 10.0
}
