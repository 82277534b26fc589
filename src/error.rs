use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::storage::StorageError;

/// Request-level errors for the upload pipeline.
///
/// The handler makes exactly one explicit check (file presence); everything
/// the storage layer reports is carried through unrecovered and mapped to a
/// server error here. There is no retry path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no file provided in request")]
    MissingFile,

    #[error("invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFile | Error::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Backend detail stays in the logs, not in the client response.
            Error::Storage(err) => {
                tracing::error!(error = %err, "storage backend failure");
                "failed to store file".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
