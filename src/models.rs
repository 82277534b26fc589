use serde::{Deserialize, Serialize};

/// Body returned on a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub key: String,
    pub url: String,
}

/// Body returned on any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
