use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Tolerance applied when checking that scoring weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

fn canonical_tier(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Highest attained (or minimum required) degree, compared as an ordinal
/// tier. `Ord` follows the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DegreeLevel {
    #[default]
    None,
    HighSchool,
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HighSchool => "high-school",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Doctorate => "doctorate",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts the canonical kebab-case names plus the phrasings the
        // extraction layer emits ("bachelor degree", "high school diploma").
        Ok(match canonical_tier(s).as_str() {
            "none" | "no education" | "no-education" => Self::None,
            "high-school" | "high school" | "high school diploma" | "school" => Self::HighSchool,
            "bachelor" | "bachelors" | "bachelor degree" | "bachelor's degree" => Self::Bachelor,
            "master" | "masters" | "master degree" | "master's degree" => Self::Master,
            "doctorate" | "phd" | "doctoral degree" => Self::Doctorate,
            _ => return Err(ConfigError::UnknownDegreeLevel(s.to_string())),
        })
    }
}

impl TryFrom<String> for DegreeLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DegreeLevel> for String {
    fn from(value: DegreeLevel) -> Self {
        value.as_str().to_string()
    }
}

/// Language proficiency as an ordinal tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LanguageLevel {
    #[default]
    None,
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl LanguageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Conversational => "conversational",
            Self::Fluent => "fluent",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match canonical_tier(s).as_str() {
            "none" => Self::None,
            "basic" | "beginner" => Self::Basic,
            "conversational" | "intermediate" => Self::Conversational,
            "fluent" | "advanced" => Self::Fluent,
            "native" | "bilingual" => Self::Native,
            _ => return Err(ConfigError::UnknownLanguageLevel(s.to_string())),
        })
    }
}

impl TryFrom<String> for LanguageLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageLevel> for String {
    fn from(value: LanguageLevel) -> Self {
        value.as_str().to_string()
    }
}

/// Structured candidate data, produced by the external extraction
/// collaborator. Immutable once handed to the engine.
///
/// Collections are ordered so that reason strings and explanations
/// generated from them come out in a stable order on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub education: EducationProfile,
    /// Skill name -> years of demonstrated experience.
    #[serde(default)]
    pub skills_years: BTreeMap<String, f64>,
    #[serde(default)]
    pub general_skills: BTreeSet<String>,
    #[serde(default)]
    pub accepted_work_types: BTreeSet<String>,
    #[serde(default)]
    pub residence: Residence,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationProfile {
    /// Highest attained degree per field of study.
    #[serde(default)]
    pub degrees: BTreeMap<String, DegreeLevel>,
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageLevel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Residence {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub locality: String,
}

/// Minimum years for one required skill and whether taxonomy-related
/// skills may substitute for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub years: f64,
    #[serde(default)]
    pub relative_skills_accepted: bool,
}

/// One requirement/preference specification. Two instances exist per
/// ranking run: the required spec (hard filters + weighted scoring) and
/// the optional spec (bonus-only, any subset of fields populated).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementSpec {
    #[serde(default)]
    pub education: EducationRequirement,
    #[serde(default)]
    pub specific_skills: BTreeMap<String, SkillRequirement>,
    #[serde(default)]
    pub general_skills: BTreeSet<String>,
    /// Candidate must accept at least one of these when non-empty.
    #[serde(default)]
    pub work_types: BTreeSet<String>,
    #[serde(default)]
    pub personal_information: LocationRequirement,
}

impl RequirementSpec {
    pub fn has_education(&self) -> bool {
        !self.education.degrees.is_empty() || !self.education.languages.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRequirement {
    /// Minimum degree per field of study.
    #[serde(default)]
    pub degrees: BTreeMap<String, DegreeLevel>,
    /// Minimum proficiency per language.
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageLevel>,
}

/// Residence requirement; a field left unset is not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRequirement {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
}

/// Category weights for the composite score. Constructed through
/// [`WeightConfig::new`], which rejects negative weights and sums away
/// from 1.0, so an instance in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightConfig {
    experience: f64,
    education: f64,
    general_skills: f64,
}

impl WeightConfig {
    pub fn new(experience: f64, education: f64, general_skills: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("experience", experience),
            ("education", education),
            ("general_skills", general_skills),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        let sum = experience + education + general_skills;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                experience,
                education,
                general_skills,
                sum,
            });
        }

        Ok(Self {
            experience,
            education,
            general_skills,
        })
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn education(&self) -> f64 {
        self.education
    }

    pub fn general_skills(&self) -> f64 {
        self.general_skills
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            experience: 0.5,
            education: 0.2,
            general_skills: 0.3,
        }
    }
}

/// Per-candidate scoring detail for one ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Skills+years sub-score in [0, 1].
    pub experience: f64,
    /// Degree/language sub-score in [0, 1].
    pub education: f64,
    /// Soft-skills sub-score in [0, 1].
    pub general_skills: f64,
    /// Bonus earned against the optional spec, already weighted.
    pub optional_bonus: f64,
    pub passed_required: bool,
    /// Every hard-filter failure, in a deterministic order. Empty when
    /// `passed_required` is true.
    pub disqualifications: Vec<String>,
    /// Final score on the 1-10 scale, one decimal of precision.
    pub final_score: f64,
}

/// One entry of the ordered ranking output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    /// 1-based position; positions form a contiguous permutation of 1..N.
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
    /// Deterministic template text; identical inputs render identical text.
    pub explanation: String,
}
