use std::collections::BTreeSet;

use crate::analysis::matcher::SkillSet;
use crate::catalog::ConfigurationError;

pub const MAX_SCORE: u32 = 100;

/// Percentage of catalog keywords present in the resume, floored and capped at 100.
///
/// `total_keywords` is the catalog size; zero is a configuration fault, not a
/// per-request condition, and the catalog is validated at startup to rule it out.
pub fn score_by_skill_count(
    skills: &SkillSet,
    total_keywords: usize,
) -> Result<u32, ConfigurationError> {
    if total_keywords == 0 {
        return Err(ConfigurationError::NoSkills);
    }
    let score = (100 * skills.len() / total_keywords) as u32;
    Ok(score.min(MAX_SCORE))
}

/// Percentage of a company's required skills that were matched, floored.
/// A company with no listed requirements scores 0.
pub fn score_against_company(matched: &SkillSet, required: &BTreeSet<String>) -> u32 {
    if required.is_empty() {
        return 0;
    }
    let hits = matched.intersection(required).count();
    (100 * hits / required.len()) as u32
}
