//! Document text extraction handler.

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use crate::{error::AppError, state::AppState};

/// Extracted text response.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub text: String,
}

/// Extract plain text from an uploaded document.
///
/// Expects a multipart body with a `file` part. Parsing is delegated to the
/// extraction collaborator; this handler only moves bytes.
///
/// # Errors
///
/// Returns 400 when no file part is present or the body is malformed,
/// 500 when the extraction collaborator fails.
#[tracing::instrument(skip_all)]
pub async fn parse_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;

        let text = state.extractor().extract(&filename, bytes.to_vec()).await?;
        return Ok(Json(ParseResponse { text }));
    }

    Err(AppError::BadRequest("no file uploaded".to_owned()))
}
