//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::extractor::split_response;
use crate::generation::prompts::{build_resume_prompt, DEFAULT_TEMPLATE, RESUME_SYSTEM};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    pub experiences: String,
    pub job_description: String,
    /// Optional base LaTeX template; the built-in one-page template is used
    /// when absent or blank.
    pub resume_template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub explanation: String,
    pub tex_content: String,
    pub pdf_base64: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Full pipeline: compose prompt → LLM generate → extract explanation and
/// LaTeX → compile to PDF. Compilation cannot fail the request; the pipeline
/// degrades to a source listing or a placeholder document instead.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    if request.experiences.trim().is_empty() {
        return Err(AppError::Validation(
            "experiences cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let template = request
        .resume_template
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TEMPLATE);

    let prompt = build_resume_prompt(&request.job_description, &request.experiences, template);

    let response = state
        .llm
        .call(&prompt, RESUME_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation call failed: {e}")))?;

    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("Resume generation returned no text".to_string()))?;

    let (explanation, tex_content) = split_response(text);
    info!("Extracted {} bytes of LaTeX; compiling", tex_content.len());

    let pdf = state.compiler.compile(&tex_content).await;
    info!("Compiled resume PDF: {} bytes", pdf.len());

    Ok(Json(GenerateResumeResponse {
        explanation,
        tex_content,
        pdf_base64: STANDARD.encode(&pdf),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
