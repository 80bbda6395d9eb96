//! Axum route handlers for the roster document API.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::info;

use crate::document::{assemble, CONTENT_TYPE, DOWNLOAD_FILENAME};
use crate::errors::AppError;
use crate::roster::extract::extract_records;
use crate::state::AppState;

/// POST /api/v1/roster/generate
///
/// Accepts a multipart upload with a `file` field holding raw roster text
/// (.txt), extracts student records via the LLM, assembles the document and
/// streams it back as a download.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        upload = Some((filename, data));
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("no file part in the request".to_string()))?;
    if !filename.ends_with(".txt") {
        return Err(AppError::Validation(
            "only .txt uploads are accepted".to_string(),
        ));
    }
    let raw_text = String::from_utf8(data.to_vec())
        .map_err(|_| AppError::Validation("file must be UTF-8 text".to_string()))?;
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "the uploaded file is empty".to_string(),
        ));
    }

    let records = extract_records(&raw_text, &state.llm).await?;
    info!("extracted {} records from '{filename}'", records.len());

    let document = assemble(records)?;

    Ok((
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        document,
    ))
}
