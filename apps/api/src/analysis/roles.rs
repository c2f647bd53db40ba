use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::matcher::SkillSet;

/// Suggests every role that shares at least one skill with the resume.
///
/// ANY-match: a single overlapping skill is enough, so suggestions are generous.
/// Results come back sorted by role name.
pub fn suggest_roles(
    skills: &SkillSet,
    role_requirements: &BTreeMap<String, BTreeSet<String>>,
) -> BTreeSet<String> {
    role_requirements
        .iter()
        .filter(|(_, required)| !required.is_disjoint(skills))
        .map(|(role, _)| role.clone())
        .collect()
}
