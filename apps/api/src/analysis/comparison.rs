use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::SkillSet;
use crate::analysis::scoring::score_against_company;

/// Resume skills measured against one company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub company: String,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub score: u32, // 0 – 100
}

/// Compares detected skills with a company's expected skill set.
///
/// An unrecognized company is treated as having no requirements and yields an
/// empty comparison with score 0. Restricting `company` to known names is the
/// caller's job.
pub fn compare(
    skills: &SkillSet,
    company: &str,
    company_requirements: &BTreeMap<String, BTreeSet<String>>,
) -> ComparisonResult {
    let empty = BTreeSet::new();
    let required = company_requirements.get(company).unwrap_or(&empty);

    let matched: BTreeSet<String> = skills.intersection(required).cloned().collect();
    let missing: BTreeSet<String> = required.difference(skills).cloned().collect();
    let score = score_against_company(&matched, required);

    ComparisonResult {
        company: company.to_string(),
        matched,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KeywordCatalog;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn data_scientist_skills() -> SkillSet {
        set(&[
            "python",
            "machine learning",
            "deep learning",
            "nlp",
            "pandas",
            "numpy",
            "tensorflow",
        ])
    }

    #[test]
    fn test_data_scientist_against_google() {
        let catalog = KeywordCatalog::builtin();
        let result = compare(
            &data_scientist_skills(),
            "Google",
            catalog.company_requirements(),
        );
        assert_eq!(result.company, "Google");
        assert_eq!(result.matched, set(&["python", "machine learning"]));
        assert_eq!(
            result.missing,
            set(&[
                "data structures",
                "algorithms",
                "system design",
                "communication"
            ])
        );
        assert_eq!(result.score, 33);
    }

    #[test]
    fn test_unknown_company_is_empty_not_error() {
        let catalog = KeywordCatalog::builtin();
        let result = compare(
            &data_scientist_skills(),
            "Initech",
            catalog.company_requirements(),
        );
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_company_with_empty_requirements_scores_zero() {
        let mut companies = BTreeMap::new();
        companies.insert("Stealth".to_string(), BTreeSet::new());
        let result = compare(&set(&["python"]), "Stealth", &companies);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_matched_and_missing_partition_requirements() {
        let catalog = KeywordCatalog::builtin();
        let inputs = [
            SkillSet::new(),
            data_scientist_skills(),
            set(&["excel", "sql", "teamwork"]),
            catalog.skills().iter().cloned().collect(),
        ];
        for skills in &inputs {
            for (company, required) in catalog.company_requirements() {
                let result = compare(skills, company, catalog.company_requirements());
                let union: BTreeSet<String> =
                    result.matched.union(&result.missing).cloned().collect();
                assert_eq!(&union, required, "Union mismatch for {company}");
                assert!(
                    result.matched.is_disjoint(&result.missing),
                    "Overlap for {company}"
                );
            }
        }
    }

    #[test]
    fn test_compare_is_idempotent() {
        let catalog = KeywordCatalog::builtin();
        let skills = data_scientist_skills();
        let first = compare(&skills, "Meta", catalog.company_requirements());
        let second = compare(&skills, "Meta", catalog.company_requirements());
        assert_eq!(first, second);
    }
}
