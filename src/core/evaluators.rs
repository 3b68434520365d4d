use std::collections::{BTreeMap, BTreeSet};

use crate::core::taxonomy::{normalize, SkillTaxonomy};
use crate::models::{
    CandidateProfile, DegreeLevel, EducationRequirement, LanguageLevel, LocationRequirement,
    SkillRequirement,
};

/// Score the candidate's specific skills against the required map.
///
/// Per required skill:
/// - exact match: `min(candidate_years / required_years, 1.0)`
/// - no exact match but related skills accepted: best
///   `relatedness * min(years / required_years, 1.0)` over the candidate's
///   skills, 0 if none is related
/// - no exact match and exact-only: 0, and a hard-filter failure
///
/// The category score is the arithmetic mean over all required skills;
/// missing skills contribute 0 without shrinking the denominator. An empty
/// requirement map is vacuously satisfied.
pub fn evaluate_skills(
    profile: &CandidateProfile,
    required: &BTreeMap<String, SkillRequirement>,
    taxonomy: &SkillTaxonomy,
) -> (f64, Vec<String>) {
    if required.is_empty() {
        return (1.0, Vec::new());
    }

    let candidate_skills: Vec<(String, f64)> = profile
        .skills_years
        .iter()
        .map(|(skill, years)| (normalize(skill), *years))
        .collect();

    let mut total = 0.0;
    let mut failures = Vec::new();

    for (skill, requirement) in required {
        let key = normalize(skill);
        let ratio = |years: f64| {
            if requirement.years <= 0.0 {
                1.0
            } else {
                (years / requirement.years).min(1.0)
            }
        };

        let exact = candidate_skills
            .iter()
            .find(|(candidate, _)| *candidate == key);

        let score = match exact {
            Some((_, years)) => ratio(*years),
            None if requirement.relative_skills_accepted => candidate_skills
                .iter()
                .filter_map(|(candidate, years)| {
                    taxonomy
                        .relatedness(&key, candidate)
                        .map(|closeness| closeness * ratio(*years))
                })
                .fold(0.0, f64::max),
            None => {
                failures.push(format!(
                    "missing required skill '{skill}' (exact match required)"
                ));
                0.0
            }
        };

        total += score;
    }

    (total / required.len() as f64, failures)
}

/// Score degree and language requirements. Tiers are discrete: each
/// requirement is met all-or-nothing by ordinal comparison, and every
/// unmet requirement is a hard-filter failure. The sub-score is the
/// fraction of requirements met.
pub fn evaluate_education(
    profile: &CandidateProfile,
    required: &EducationRequirement,
) -> (f64, Vec<String>) {
    let total = required.degrees.len() + required.languages.len();
    if total == 0 {
        return (1.0, Vec::new());
    }

    let degrees: BTreeMap<String, DegreeLevel> = profile
        .education
        .degrees
        .iter()
        .map(|(field, level)| (normalize(field), *level))
        .collect();
    let languages: BTreeMap<String, LanguageLevel> = profile
        .education
        .languages
        .iter()
        .map(|(language, level)| (normalize(language), *level))
        .collect();

    let mut met = 0usize;
    let mut failures = Vec::new();

    for (field, minimum) in &required.degrees {
        let attained = degrees
            .get(&normalize(field))
            .copied()
            .unwrap_or(DegreeLevel::None);
        if attained >= *minimum {
            met += 1;
        } else {
            failures.push(format!(
                "education in '{field}' below required level ({attained} < {minimum})"
            ));
        }
    }

    for (language, minimum) in &required.languages {
        let attained = languages
            .get(&normalize(language))
            .copied()
            .unwrap_or(LanguageLevel::None);
        if attained >= *minimum {
            met += 1;
        } else {
            failures.push(format!(
                "language '{language}' below required level ({attained} < {minimum})"
            ));
        }
    }

    (met as f64 / total as f64, failures)
}

/// Fraction of required soft skills the candidate demonstrates. Purely
/// additive signal, never a hard filter; an empty requirement scores 1.0.
pub fn evaluate_general_skills(profile: &CandidateProfile, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }

    let demonstrated: BTreeSet<String> =
        profile.general_skills.iter().map(|s| normalize(s)).collect();
    let matched = required
        .iter()
        .filter(|skill| demonstrated.contains(&normalize(skill)))
        .count();

    matched as f64 / required.len() as f64
}

/// Binary gate: the candidate's accepted work types must intersect the
/// required set. Returns the failure reason when the intersection is empty.
pub fn evaluate_work_type(
    profile: &CandidateProfile,
    required: &BTreeSet<String>,
) -> Option<String> {
    if required.is_empty() {
        return None;
    }

    let accepted: BTreeSet<String> = profile
        .accepted_work_types
        .iter()
        .map(|t| normalize(t))
        .collect();

    if required.iter().any(|t| accepted.contains(&normalize(t))) {
        None
    } else {
        let wanted: Vec<&str> = required.iter().map(String::as_str).collect();
        Some(format!(
            "accepts none of the required work types ({})",
            wanted.join(", ")
        ))
    }
}

/// Binary gate on residence. Only the fields the requirement specifies are
/// checked; both country and locality must match exactly when present.
pub fn evaluate_location(
    profile: &CandidateProfile,
    required: &LocationRequirement,
) -> Vec<String> {
    let mut failures = Vec::new();

    if let Some(country) = &required.country {
        if normalize(&profile.residence.country) != normalize(country) {
            failures.push(format!(
                "resides in country '{}', required '{}'",
                profile.residence.country, country
            ));
        }
    }

    if let Some(locality) = &required.locality {
        if normalize(&profile.residence.locality) != normalize(locality) {
            failures.push(format!(
                "resides in locality '{}', required '{}'",
                profile.residence.locality, locality
            ));
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Residence;

    fn profile_with_skills(skills: &[(&str, f64)]) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            education: Default::default(),
            skills_years: skills
                .iter()
                .map(|(s, y)| (s.to_string(), *y))
                .collect(),
            general_skills: Default::default(),
            accepted_work_types: Default::default(),
            residence: Residence::default(),
        }
    }

    fn skill_req(years: f64, relatives: bool) -> SkillRequirement {
        SkillRequirement {
            years,
            relative_skills_accepted: relatives,
        }
    }

    #[test]
    fn exact_skill_ratio_is_capped_at_one() {
        let profile = profile_with_skills(&[("python", 6.0)]);
        let required = BTreeMap::from([("python".to_string(), skill_req(2.0, false))]);

        let (score, failures) = evaluate_skills(&profile, &required, &SkillTaxonomy::empty());
        assert_eq!(score, 1.0);
        assert!(failures.is_empty());
    }

    #[test]
    fn partial_years_give_partial_credit() {
        let profile = profile_with_skills(&[("python", 1.0)]);
        let required = BTreeMap::from([("python".to_string(), skill_req(2.0, false))]);

        let (score, failures) = evaluate_skills(&profile, &required, &SkillTaxonomy::empty());
        assert_eq!(score, 0.5);
        assert!(failures.is_empty());
    }

    #[test]
    fn related_skill_earns_scaled_credit() {
        // php -> python 0.6, 4 years against a 2-year requirement: 0.6 * 1.0
        let profile = profile_with_skills(&[("php", 4.0)]);
        let required = BTreeMap::from([("python".to_string(), skill_req(2.0, true))]);
        let taxonomy = SkillTaxonomy::from_relations([("php", "python", 0.6)]).unwrap();

        let (score, failures) = evaluate_skills(&profile, &required, &taxonomy);
        assert!((score - 0.6).abs() < 1e-12);
        assert!(failures.is_empty());
    }

    #[test]
    fn missing_exact_only_skill_is_a_hard_failure() {
        let profile = profile_with_skills(&[("python", 5.0)]);
        let required = BTreeMap::from([("aws".to_string(), skill_req(2.0, false))]);

        let (score, failures) = evaluate_skills(&profile, &required, &SkillTaxonomy::empty());
        assert_eq!(score, 0.0);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("aws"));
    }

    #[test]
    fn missing_skill_keeps_the_denominator() {
        // One perfect skill, one missing: mean over both, not over one.
        let profile = profile_with_skills(&[("python", 2.0)]);
        let required = BTreeMap::from([
            ("python".to_string(), skill_req(2.0, false)),
            ("aws".to_string(), skill_req(2.0, true)),
        ]);

        let (score, failures) = evaluate_skills(&profile, &required, &SkillTaxonomy::empty());
        assert_eq!(score, 0.5);
        assert!(failures.is_empty());
    }

    #[test]
    fn empty_skill_requirements_are_vacuously_satisfied() {
        let profile = profile_with_skills(&[]);
        let (score, failures) =
            evaluate_skills(&profile, &BTreeMap::new(), &SkillTaxonomy::empty());
        assert_eq!(score, 1.0);
        assert!(failures.is_empty());
    }

    #[test]
    fn education_tiers_are_all_or_nothing() {
        let mut profile = profile_with_skills(&[]);
        profile
            .education
            .degrees
            .insert("computer science".to_string(), DegreeLevel::Bachelor);
        profile
            .education
            .languages
            .insert("english".to_string(), LanguageLevel::Fluent);

        let required = EducationRequirement {
            degrees: BTreeMap::from([("computer science".to_string(), DegreeLevel::Master)]),
            languages: BTreeMap::from([("english".to_string(), LanguageLevel::Conversational)]),
        };

        let (score, failures) = evaluate_education(&profile, &required);
        assert_eq!(score, 0.5);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("computer science"));
    }

    #[test]
    fn higher_degree_satisfies_lower_requirement() {
        let mut profile = profile_with_skills(&[]);
        profile
            .education
            .degrees
            .insert("physics".to_string(), DegreeLevel::Doctorate);

        let required = EducationRequirement {
            degrees: BTreeMap::from([("physics".to_string(), DegreeLevel::Bachelor)]),
            languages: BTreeMap::new(),
        };

        let (score, failures) = evaluate_education(&profile, &required);
        assert_eq!(score, 1.0);
        assert!(failures.is_empty());
    }

    #[test]
    fn missing_language_counts_as_none() {
        let profile = profile_with_skills(&[]);
        let required = EducationRequirement {
            degrees: BTreeMap::new(),
            languages: BTreeMap::from([("greek".to_string(), LanguageLevel::Conversational)]),
        };

        let (score, failures) = evaluate_education(&profile, &required);
        assert_eq!(score, 0.0);
        assert!(failures[0].contains("greek"));
    }

    #[test]
    fn general_skills_score_is_the_overlap_fraction() {
        let mut profile = profile_with_skills(&[]);
        profile.general_skills.insert("Team Work".to_string());

        let required = BTreeSet::from(["team work".to_string(), "adaptability".to_string()]);
        assert_eq!(evaluate_general_skills(&profile, &required), 0.5);
    }

    #[test]
    fn empty_general_requirement_scores_full() {
        let profile = profile_with_skills(&[]);
        assert_eq!(evaluate_general_skills(&profile, &BTreeSet::new()), 1.0);
    }

    #[test]
    fn work_type_gate_requires_intersection() {
        let mut profile = profile_with_skills(&[]);
        profile.accepted_work_types.insert("on-site".to_string());

        let required = BTreeSet::from(["remote".to_string(), "hybrid".to_string()]);
        let failure = evaluate_work_type(&profile, &required);
        assert!(failure.is_some());

        profile.accepted_work_types.insert("Remote".to_string());
        assert!(evaluate_work_type(&profile, &required).is_none());
    }

    #[test]
    fn unspecified_location_fields_are_not_checked() {
        let mut profile = profile_with_skills(&[]);
        profile.residence = Residence {
            country: "Greece".to_string(),
            locality: "Athens".to_string(),
        };

        let country_only = LocationRequirement {
            country: Some("greece".to_string()),
            locality: None,
        };
        assert!(evaluate_location(&profile, &country_only).is_empty());

        let both = LocationRequirement {
            country: Some("Greece".to_string()),
            locality: Some("Thessaloniki".to_string()),
        };
        let failures = evaluate_location(&profile, &both);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("Thessaloniki"));
    }
}
