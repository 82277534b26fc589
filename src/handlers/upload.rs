use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::error::Error;
use crate::models::UploadResponse;
use crate::storage::FilePart;
use crate::AppState;

/// Handle a single-file upload.
///
/// Takes the first multipart field that carries a file; the field name is not
/// significant. Exactly one check happens here (a file must be present) —
/// storage failures pass through to the error mapping untouched.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), Error> {
    let mut file: Option<FilePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidMultipart(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        let content_type = field.content_type().map(|s| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidMultipart(e.to_string()))?;

        // An empty file field is treated the same as an absent one.
        if data.is_empty() {
            continue;
        }

        file = Some(FilePart {
            filename,
            content_type,
            data,
        });
        break;
    }

    let file = file.ok_or(Error::MissingFile)?;

    tracing::info!(
        filename = %file.filename,
        size = file.data.len(),
        content_type = ?file.content_type,
        "received file upload"
    );

    let stored = state.store.put(file).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "file uploaded successfully".to_string(),
            key: stored.key,
            url: stored.url,
        }),
    ))
}
