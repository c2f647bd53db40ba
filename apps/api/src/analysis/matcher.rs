//! Skill Matcher: pluggable, trait-based detection of catalog keywords in resume text.
//!
//! Default: `SubstringSkillMatcher` (lowercased contiguous-substring search).
//! A tokenized / word-boundary matcher can be dropped in behind the same trait
//! without touching the pipeline or the handlers.
//!
//! `AppState` holds an `Arc<dyn SkillMatcher>`.

use std::collections::BTreeSet;

use crate::catalog::KeywordCatalog;

/// Skills detected in one resume. Always a subset of `KeywordCatalog::skills`.
pub type SkillSet = BTreeSet<String>;

pub trait SkillMatcher: Send + Sync {
    fn match_skills(&self, text: &str, catalog: &KeywordCatalog) -> SkillSet;

    /// Label reported alongside results so callers know which backend ran.
    fn backend(&self) -> &'static str;
}

/// Case-insensitive substring matcher.
///
/// There is no word-boundary check, so a keyword embedded in a longer token
/// still matches: "java" is found inside "javascript" and "excel" inside
/// "excellent". These false positives are accepted; swap the matcher if they matter.
///
/// Case-insensitivity is exact only where uppercasing then lowercasing gives
/// back the same letters, which holds for ASCII. Characters that expand or fold
/// differently break it: "cß" uppercases to "CSS" and "ſql" to "SQL", so the
/// uppercased text matches `css` and `sql` while the original matches neither.
pub struct SubstringSkillMatcher;

impl SkillMatcher for SubstringSkillMatcher {
    fn match_skills(&self, text: &str, catalog: &KeywordCatalog) -> SkillSet {
        match_skills(text, catalog)
    }

    fn backend(&self) -> &'static str {
        "substring"
    }
}

pub fn match_skills(text: &str, catalog: &KeywordCatalog) -> SkillSet {
    if text.is_empty() {
        return SkillSet::new();
    }

    let text_lower = text.to_lowercase();
    catalog
        .skills()
        .iter()
        .filter(|skill| text_lower.contains(skill.as_str()))
        .cloned()
        .collect()
}
