mod analysis;
mod catalog;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::matcher::{SkillMatcher, SubstringSkillMatcher};
use crate::catalog::KeywordCatalog;
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Catalog problems are fatal here, never per request
    let catalog = load_catalog(&config)?;
    info!(
        skills = catalog.total_keywords(),
        roles = catalog.role_requirements().len(),
        companies = catalog.company_requirements().len(),
        "Keyword catalog ready"
    );

    let matcher: Arc<dyn SkillMatcher> = Arc::new(SubstringSkillMatcher);
    info!("Skill matcher initialized (backend: {})", matcher.backend());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        matcher,
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Result<KeywordCatalog> {
    match &config.catalog_path {
        Some(path) => KeywordCatalog::from_path(path)
            .with_context(|| format!("Invalid keyword catalog at {}", path.display())),
        None => {
            let catalog = KeywordCatalog::builtin();
            catalog
                .validate()
                .context("Built-in keyword catalog failed validation")?;
            Ok(catalog)
        }
    }
}
