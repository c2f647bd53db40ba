// Resume analysis core
// Implements: skill matching, scoring, feedback, role suggestion, company comparison.
// Everything here is a pure function over the read-only catalog except `handlers`.

pub mod comparison;
pub mod feedback;
pub mod handlers;
pub mod matcher;
pub mod report;
pub mod roles;
pub mod scoring;
