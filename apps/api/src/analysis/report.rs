//! Analysis pipeline. Runs the matcher, scorer, feedback, role suggester and
//! company comparator over one resume text and packages the views for display.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::comparison::{compare, ComparisonResult};
use crate::analysis::feedback::{feedback, FeedbackBand};
use crate::analysis::matcher::{SkillMatcher, SkillSet};
use crate::analysis::roles::suggest_roles;
use crate::analysis::scoring::score_by_skill_count;
use crate::catalog::{ConfigurationError, KeywordCatalog};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One bar of the skill chart. The matcher records presence only, so every
/// detected skill gets `present = 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPresenceBar {
    pub skill: String,
    pub present: u32,
}

/// Everything shown to the user for one analyzed resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub resume_text: String,
    pub skills: BTreeSet<String>,
    pub skill_chart: Vec<SkillPresenceBar>,
    pub suggested_roles: BTreeSet<String>,
    pub score: u32, // 0 – 100
    pub feedback_band: FeedbackBand,
    pub feedback: String,
    pub comparison: Option<ComparisonResult>,
    pub matcher_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze(
    resume_text: String,
    company: Option<&str>,
    catalog: &KeywordCatalog,
    matcher: &dyn SkillMatcher,
) -> Result<AnalysisReport, ConfigurationError> {
    let analysis_id = Uuid::new_v4();

    let skills = matcher.match_skills(&resume_text, catalog);
    debug!(%analysis_id, ?skills, "Matched skills");

    let score = score_by_skill_count(&skills, catalog.total_keywords())?;
    let feedback_band = FeedbackBand::for_score(score);
    let suggested_roles = suggest_roles(&skills, catalog.role_requirements());
    let comparison =
        company.map(|name| compare(&skills, name, catalog.company_requirements()));

    info!(
        %analysis_id,
        skills = skills.len(),
        roles = suggested_roles.len(),
        score,
        company = company.unwrap_or("-"),
        "Resume analyzed"
    );

    Ok(AnalysisReport {
        analysis_id,
        analyzed_at: Utc::now(),
        skill_chart: skill_presence_chart(&skills),
        resume_text,
        skills,
        suggested_roles,
        score,
        feedback_band,
        feedback: feedback(score).to_string(),
        comparison,
        matcher_backend: matcher.backend().to_string(),
    })
}

/// Builds chart bars in skill-name order. Empty input gives an empty chart.
pub fn skill_presence_chart(skills: &SkillSet) -> Vec<SkillPresenceBar> {
    skills
        .iter()
        .map(|skill| SkillPresenceBar {
            skill: skill.clone(),
            present: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::SubstringSkillMatcher;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_report_for_sample_sentence() {
        let catalog = KeywordCatalog::builtin();
        let report = analyze(
            "I know Python and SQL and have strong communication skills".to_string(),
            None,
            &catalog,
            &SubstringSkillMatcher,
        )
        .unwrap();

        assert_eq!(report.skills, set(&["python", "sql", "communication"]));
        assert_eq!(report.score, 15);
        assert_eq!(report.feedback_band, FeedbackBand::NeedsImprovement);
        assert!(report.feedback.starts_with("Needs improvement"));
        assert!(report.comparison.is_none());
        assert_eq!(report.matcher_backend, "substring");
        assert_eq!(report.skill_chart.len(), 3);
    }

    #[test]
    fn test_report_without_skills() {
        let catalog = KeywordCatalog::builtin();
        let report = analyze(
            "Gardening and cooking".to_string(),
            Some("Google"),
            &catalog,
            &SubstringSkillMatcher,
        )
        .unwrap();

        assert!(report.skills.is_empty());
        assert!(report.skill_chart.is_empty());
        assert!(report.suggested_roles.is_empty());
        assert_eq!(report.score, 0);
        assert_eq!(report.feedback_band, FeedbackBand::NeedsImprovement);

        let comparison = report.comparison.unwrap();
        assert!(comparison.matched.is_empty());
        assert_eq!(comparison.missing.len(), 6);
        assert_eq!(comparison.score, 0);
    }

    #[test]
    fn test_report_with_company_comparison() {
        let catalog = KeywordCatalog::builtin();
        let text = "Python, machine learning, deep learning, NLP, pandas, numpy, tensorflow";
        let report = analyze(
            text.to_string(),
            Some("Google"),
            &catalog,
            &SubstringSkillMatcher,
        )
        .unwrap();

        // 7 of 20 keywords
        assert_eq!(report.score, 35);
        assert!(report.suggested_roles.contains("Data Scientist"));
        assert!(report.suggested_roles.contains("AI Engineer"));

        let comparison = report.comparison.unwrap();
        assert_eq!(comparison.matched, set(&["python", "machine learning"]));
        assert_eq!(comparison.score, 33);
    }

    #[test]
    fn test_presence_chart_is_sorted_and_flat() {
        let chart = skill_presence_chart(&set(&["sql", "css", "python"]));
        let names: Vec<&str> = chart.iter().map(|b| b.skill.as_str()).collect();
        assert_eq!(names, vec!["css", "python", "sql"]);
        assert!(chart.iter().all(|b| b.present == 1));
    }

    #[test]
    fn test_repeated_analysis_gives_same_views() {
        let catalog = KeywordCatalog::builtin();
        let text = "Java, Linux and teamwork";
        let a = analyze(text.to_string(), Some("Amazon"), &catalog, &SubstringSkillMatcher)
            .unwrap();
        let b = analyze(text.to_string(), Some("Amazon"), &catalog, &SubstringSkillMatcher)
            .unwrap();

        assert_eq!(a.skills, b.skills);
        assert_eq!(a.suggested_roles, b.suggested_roles);
        assert_eq!(a.score, b.score);
        assert_eq!(a.comparison, b.comparison);
        assert_ne!(a.analysis_id, b.analysis_id);
    }

    #[test]
    fn test_report_serializes_expected_fields() {
        let catalog = KeywordCatalog::builtin();
        let report = analyze("HTML".to_string(), None, &catalog, &SubstringSkillMatcher).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 5);
        assert_eq!(json["feedback_band"], "needs_improvement");
        assert_eq!(json["skills"], serde_json::json!(["html"]));
        assert_eq!(json["skill_chart"][0]["present"], 1);
        assert!(json["comparison"].is_null());
    }
}
