//! Axum route handlers for the resume pages: landing form, HTML preview, PDF download.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Form,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::{render_download, render_home, render_preview};
use crate::state::AppState;

/// GET /
pub async fn handle_home() -> Html<&'static str> {
    Html(render_home())
}

/// POST /preview
///
/// Form-encoded resume fields → escaped HTML preview.
pub async fn handle_preview(
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let data = ResumeData::from_fields(&fields)?;
    Ok(Html(render_preview(&data)))
}

/// POST /download
///
/// Form-encoded resume fields → PDF attachment named `resume.pdf`.
pub async fn handle_download(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let data = ResumeData::from_fields(&fields)?;
    let pdf = render_download(&data, state.pdf.clone()).await?;

    info!("Rendered resume PDF ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=resume.pdf"),
        ],
        pdf,
    ))
}
