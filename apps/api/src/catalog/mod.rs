//! Keyword catalog: the skill vocabulary plus role and company requirement tables.
//!
//! The catalog is read-only configuration. It is built once at startup (from the
//! built-in tables or a JSON file), validated, and then shared behind an `Arc`.
//! Nothing mutates it after `validate()` succeeds.

pub mod defaults;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Raised when the catalog cannot be used for scoring. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("catalog defines no skill keywords")]
    NoSkills,

    #[error("skill keyword '{0}' is listed more than once")]
    DuplicateSkill(String),

    #[error("blank skill keyword in {0}")]
    BlankSkill(String),

    #[error("skill keyword '{keyword}' in {location} is not lowercase")]
    NotLowercase { keyword: String, location: String },

    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    skills: Vec<String>,
    role_requirements: BTreeMap<String, BTreeSet<String>>,
    company_requirements: BTreeMap<String, BTreeSet<String>>,
}

impl KeywordCatalog {
    /// The built-in catalog: 20 skills, 7 roles, 5 company profiles.
    pub fn builtin() -> Self {
        Self {
            skills: defaults::SKILL_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            role_requirements: to_requirement_map(defaults::ROLE_REQUIREMENTS),
            company_requirements: to_requirement_map(defaults::COMPANY_REQUIREMENTS),
        }
    }

    /// Loads a catalog from a JSON file and validates it.
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: KeywordCatalog =
            serde_json::from_str(&raw).map_err(|source| ConfigurationError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        catalog.validate()?;

        info!(
            path = %path.display(),
            skills = catalog.skills.len(),
            roles = catalog.role_requirements.len(),
            companies = catalog.company_requirements.len(),
            "Loaded keyword catalog from file"
        );
        Ok(catalog)
    }

    /// Checks the invariants scoring relies on:
    /// at least one skill, no duplicates, no blank keywords, every keyword lowercase.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.skills.is_empty() {
            return Err(ConfigurationError::NoSkills);
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            check_keyword(skill, "skills")?;
            if !seen.insert(skill.as_str()) {
                return Err(ConfigurationError::DuplicateSkill(skill.clone()));
            }
        }

        for (role, required) in &self.role_requirements {
            for keyword in required {
                check_keyword(keyword, &format!("role '{role}'"))?;
            }
        }
        for (company, required) in &self.company_requirements {
            for keyword in required {
                check_keyword(keyword, &format!("company '{company}'"))?;
            }
        }

        Ok(())
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Denominator for the skill-count score.
    pub fn total_keywords(&self) -> usize {
        self.skills.len()
    }

    pub fn role_requirements(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.role_requirements
    }

    pub fn company_requirements(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.company_requirements
    }

    /// Company names in sorted order, i.e. the options offered to the user.
    pub fn company_names(&self) -> Vec<&str> {
        self.company_requirements.keys().map(String::as_str).collect()
    }

    pub fn has_company(&self, company: &str) -> bool {
        self.company_requirements.contains_key(company)
    }
}

fn to_requirement_map(table: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
    table
        .iter()
        .map(|(name, keywords)| {
            (
                name.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

fn check_keyword(keyword: &str, location: &str) -> Result<(), ConfigurationError> {
    if keyword.trim().is_empty() {
        return Err(ConfigurationError::BlankSkill(location.to_string()));
    }
    if keyword.to_lowercase() != keyword {
        return Err(ConfigurationError::NotLowercase {
            keyword: keyword.to_string(),
            location: location.to_string(),
        });
    }
    Ok(())
}
