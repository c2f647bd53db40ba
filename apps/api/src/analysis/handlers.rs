//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::report::{analyze, AnalysisReport};
use crate::catalog::KeywordCatalog;
use crate::errors::AppError;
use crate::extraction::extract_blocking;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: a `resume` file part (PDF) and an optional `company` text part.
/// Extracts the text, then runs the full analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut document: Option<Bytes> = None;
    let mut company: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Could not read resume", e))?;
                info!(file_name = %file_name, bytes = data.len(), "Resume uploaded");
                document = Some(data);
            }
            Some("company") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Could not read company", e))?;
                company = Some(value);
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let company = selected_company(company, &state.catalog)?;

    let resume_text = extract_blocking(state.extractor.clone(), document).await?;

    let report = analyze(
        resume_text,
        company.as_deref(),
        &state.catalog,
        state.matcher.as_ref(),
    )?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/text
///
/// Runs the analysis over text the client already extracted.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let company = selected_company(request.company, &state.catalog)?;

    let report = analyze(
        request.text,
        company.as_deref(),
        &state.catalog,
        state.matcher.as_ref(),
    )?;
    Ok(Json(report))
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<KeywordCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/catalog/companies
///
/// The only company names `company` may take.
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<CompanyListResponse> {
    Json(CompanyListResponse {
        companies: state
            .catalog
            .company_names()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Keeps the status axum assigned: a body over `MAX_UPLOAD_BYTES` is 413, not 400.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    let message = format!("{context}: {}", err.body_text());
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}

/// Blank means "no company selected". Any other value must be a catalog company.
fn selected_company(
    company: Option<String>,
    catalog: &KeywordCatalog,
) -> Result<Option<String>, AppError> {
    let Some(company) = company.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    if !catalog.has_company(&company) {
        return Err(AppError::Validation(format!(
            "Unknown company '{company}'. Choose one of: {}",
            catalog.company_names().join(", ")
        )));
    }
    Ok(Some(company))
}
