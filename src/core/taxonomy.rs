use std::collections::HashMap;

use crate::error::ConfigError;

/// Lowercase and collapse runs of whitespace. Every skill, work-type and
/// location comparison in the engine goes through this.
pub(crate) fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Static table of skill relatedness. Relations are directional: declaring
/// `php -> python (0.6)` says php earns 0.6 credit toward a python
/// requirement. Lookups try the required skill's neighbors first, then the
/// candidate skill's neighbors in reverse.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    relations: HashMap<String, HashMap<String, f64>>,
}

impl SkillTaxonomy {
    /// A taxonomy with no relations; only exact matches earn credit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a taxonomy from `(skill, related_skill, closeness)` triples.
    /// Closeness outside (0, 1] is a configuration error.
    pub fn from_relations<I, S>(relations: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut taxonomy = Self::default();
        for (from, to, closeness) in relations {
            if closeness <= 0.0 || closeness > 1.0 {
                return Err(ConfigError::InvalidCloseness {
                    from: from.as_ref().to_string(),
                    to: to.as_ref().to_string(),
                    closeness,
                });
            }
            taxonomy.insert(from.as_ref(), to.as_ref(), closeness);
        }
        Ok(taxonomy)
    }

    /// A starter table for software-engineering roles: substitute skills
    /// mapped onto the canonical skill they count toward.
    pub fn software_default() -> Self {
        let mut t = Self::default();
        t.insert("php", "python", 0.6);
        t.insert("django", "python", 0.8);
        t.insert("flask", "python", 0.8);
        t.insert("ruby", "python", 0.5);
        t.insert("typescript", "javascript", 0.9);
        t.insert("nodejs", "javascript", 0.8);
        t.insert("react", "javascript", 0.7);
        t.insert("llm", "machine learning", 0.7);
        t.insert("deep learning", "machine learning", 0.8);
        t.insert("data science", "machine learning", 0.6);
        t.insert("azure", "aws", 0.7);
        t.insert("gcp", "aws", 0.7);
        t.insert("kotlin", "java", 0.8);
        t.insert("scala", "java", 0.6);
        t.insert("podman", "docker", 0.8);
        t.insert("docker", "kubernetes", 0.5);
        t
    }

    fn insert(&mut self, from: &str, to: &str, closeness: f64) {
        self.relations
            .entry(normalize(from))
            .or_default()
            .insert(normalize(to), closeness);
    }

    /// Credit `skill_b` earns toward `skill_a`. Equal after normalization
    /// is always exactly 1.0; undeclared pairs earn nothing.
    pub fn relatedness(&self, skill_a: &str, skill_b: &str) -> Option<f64> {
        let a = normalize(skill_a);
        let b = normalize(skill_b);
        if a == b {
            return Some(1.0);
        }

        self.relations
            .get(&a)
            .and_then(|related| related.get(&b))
            .or_else(|| self.relations.get(&b).and_then(|related| related.get(&a)))
            .copied()
    }
}
