use std::sync::Arc;

use crate::analysis::matcher::SkillMatcher;
use crate::catalog::KeywordCatalog;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Validated keyword catalog, shared by every analysis.
    pub catalog: Arc<KeywordCatalog>,
    /// Pluggable skill matcher. Default: SubstringSkillMatcher.
    pub matcher: Arc<dyn SkillMatcher>,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
