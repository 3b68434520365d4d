use tracing::{debug, info};

use crate::core::scoring::{score_candidate, ScoringConfig};
use crate::core::taxonomy::SkillTaxonomy;
use crate::models::{CandidateProfile, RankedResult, RequirementSpec, ScoreBreakdown};

/// Sub-score at or above this reads as a strength in the explanation.
const STRONG_THRESHOLD: f64 = 0.8;
/// Sub-score below this reads as a weakness.
const WEAK_THRESHOLD: f64 = 0.4;

/// Ranking orchestrator: evaluates every candidate independently, then
/// orders them with a fully deterministic sort.
///
/// # Sort key
/// 1. Final score, descending
/// 2. Experience sub-score, descending
/// 3. Candidate name, ascending
#[derive(Debug, Clone)]
pub struct Ranker {
    config: ScoringConfig,
    taxonomy: SkillTaxonomy,
}

impl Ranker {
    pub fn new(config: ScoringConfig, taxonomy: SkillTaxonomy) -> Self {
        Self { config, taxonomy }
    }

    /// Default weights and bonus plus the built-in software skill table.
    pub fn with_defaults() -> Self {
        Self {
            config: ScoringConfig::default(),
            taxonomy: SkillTaxonomy::software_default(),
        }
    }

    /// Score and order all candidates for one ranking run.
    ///
    /// Every candidate appears in the output, disqualified ones included
    /// (at the floor score, with their reasons), and rank positions are a
    /// contiguous 1..N permutation. Identical inputs produce byte-identical
    /// output.
    pub fn rank(
        &self,
        candidates: &[CandidateProfile],
        required: &RequirementSpec,
        optional: &RequirementSpec,
    ) -> Vec<RankedResult> {
        let mut scored: Vec<(String, ScoreBreakdown)> = candidates
            .iter()
            .map(|candidate| {
                let breakdown =
                    score_candidate(candidate, required, optional, &self.config, &self.taxonomy);
                debug!(
                    candidate = %candidate.name,
                    score = breakdown.final_score,
                    passed = breakdown.passed_required,
                    "scored candidate"
                );
                (candidate.name.clone(), breakdown)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.final_score
                .total_cmp(&a.1.final_score)
                .then_with(|| b.1.experience.total_cmp(&a.1.experience))
                .then_with(|| a.0.cmp(&b.0))
        });

        let results: Vec<RankedResult> = scored
            .into_iter()
            .enumerate()
            .map(|(index, (name, breakdown))| {
                let explanation = explain(&breakdown);
                RankedResult {
                    name,
                    rank: index + 1,
                    breakdown,
                    explanation,
                }
            })
            .collect();

        info!(candidates = candidates.len(), "ranking run complete");
        results
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Render the deterministic explanation for one breakdown. Template only,
/// no free-form generation, so reruns reproduce the text exactly.
fn explain(breakdown: &ScoreBreakdown) -> String {
    if !breakdown.passed_required {
        return format!(
            "Disqualified: {}. Scored at the floor; category sub-scores were \
             experience {:.2}, education {:.2}, general skills {:.2}.",
            breakdown.disqualifications.join("; "),
            breakdown.experience,
            breakdown.education,
            breakdown.general_skills,
        );
    }

    let categories = [
        ("experience", breakdown.experience),
        ("education", breakdown.education),
        ("general skills", breakdown.general_skills),
    ];
    let strong: Vec<&str> = categories
        .iter()
        .filter(|(_, score)| *score >= STRONG_THRESHOLD)
        .map(|(label, _)| *label)
        .collect();
    let weak: Vec<&str> = categories
        .iter()
        .filter(|(_, score)| *score < WEAK_THRESHOLD)
        .map(|(label, _)| *label)
        .collect();

    let mut text = format!(
        "Score {:.1}/10; all required criteria met.",
        breakdown.final_score
    );
    if !strong.is_empty() {
        text.push_str(&format!(" Strong: {}.", strong.join(", ")));
    }
    if !weak.is_empty() {
        text.push_str(&format!(" Weak: {}.", weak.join(", ")));
    }
    if breakdown.optional_bonus > 0.0 {
        text.push_str(&format!(
            " Optional qualities add +{:.2}.",
            breakdown.optional_bonus
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Residence, SkillRequirement};
    use std::collections::BTreeMap;

    fn candidate(name: &str, python_years: f64) -> CandidateProfile {
        CandidateProfile {
            name: name.to_string(),
            education: Default::default(),
            skills_years: BTreeMap::from([("python".to_string(), python_years)]),
            general_skills: Default::default(),
            accepted_work_types: Default::default(),
            residence: Residence::default(),
        }
    }

    fn python_requirement(years: f64) -> RequirementSpec {
        RequirementSpec {
            specific_skills: BTreeMap::from([(
                "python".to_string(),
                SkillRequirement {
                    years,
                    relative_skills_accepted: false,
                },
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn ranks_are_contiguous_and_ordered_by_score() {
        let ranker = Ranker::with_defaults();
        let candidates = vec![
            candidate("Junior", 1.0),
            candidate("Senior", 4.0),
            candidate("Mid", 2.0),
        ];

        let results = ranker.rank(
            &candidates,
            &python_requirement(4.0),
            &RequirementSpec::default(),
        );

        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(results[0].name, "Senior");
        assert_eq!(results[1].name, "Mid");
        assert_eq!(results[2].name, "Junior");
        assert!(results[0].breakdown.final_score >= results[1].breakdown.final_score);
    }

    #[test]
    fn ties_break_on_name_ascending() {
        let ranker = Ranker::with_defaults();
        // Identical profiles, so identical scores and sub-scores.
        let candidates = vec![candidate("Zoe", 2.0), candidate("Alice", 2.0)];

        let results = ranker.rank(
            &candidates,
            &python_requirement(2.0),
            &RequirementSpec::default(),
        );

        assert_eq!(results[0].name, "Alice");
        assert_eq!(results[1].name, "Zoe");
    }

    #[test]
    fn disqualified_candidates_stay_in_the_output() {
        let ranker = Ranker::with_defaults();
        let mut no_python = candidate("No Python", 0.0);
        no_python.skills_years.clear();

        let candidates = vec![candidate("Has Python", 3.0), no_python];
        let results = ranker.rank(
            &candidates,
            &python_requirement(2.0),
            &RequirementSpec::default(),
        );

        assert_eq!(results.len(), 2);
        let last = &results[1];
        assert_eq!(last.name, "No Python");
        assert!(!last.breakdown.passed_required);
        assert_eq!(last.breakdown.final_score, 1.0);
        assert!(last.explanation.starts_with("Disqualified:"));
    }

    #[test]
    fn explanation_flags_strong_and_weak_categories() {
        let breakdown = ScoreBreakdown {
            experience: 0.9,
            education: 0.5,
            general_skills: 0.2,
            optional_bonus: 0.05,
            passed_required: true,
            disqualifications: Vec::new(),
            final_score: 7.1,
        };

        let text = explain(&breakdown);
        assert!(text.contains("Strong: experience."));
        assert!(text.contains("Weak: general skills."));
        assert!(text.contains("+0.05"));
    }

    #[test]
    fn explanation_is_reproducible() {
        let breakdown = ScoreBreakdown {
            experience: 0.6,
            education: 1.0,
            general_skills: 1.0,
            optional_bonus: 0.0,
            passed_required: true,
            disqualifications: Vec::new(),
            final_score: 8.2,
        };

        assert_eq!(explain(&breakdown), explain(&breakdown));
    }
}
