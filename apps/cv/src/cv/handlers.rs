use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::render::batch::render_pdf;
use crate::render::Template;
use crate::state::AppState;

/// GET /cv.pdf
/// The default design (template 1).
pub async fn handle_default_cv(State(state): State<AppState>) -> Result<Response, AppError> {
    pdf_response(&state, Template::MidnightMono).await
}

/// GET /cv/:n
/// Template `n` in 1..=5; anything else is 404.
pub async fn handle_cv(
    State(state): State<AppState>,
    Path(n): Path<String>,
) -> Result<Response, AppError> {
    let template = n
        .parse::<usize>()
        .ok()
        .and_then(Template::from_number)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Template {n} not found. Use 1-{}",
                Template::ALL.len()
            ))
        })?;
    pdf_response(&state, template).await
}

async fn pdf_response(state: &AppState, template: Template) -> Result<Response, AppError> {
    let resume = state.resume.clone();

    // Layout and serialization are CPU-bound; keep them off the async executor.
    let bytes = tokio::task::spawn_blocking(move || render_pdf(template, &resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed rendering CV: {e}")))??;

    let disposition = format!("inline; filename=\"{}\"", template.output_filename());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}
