use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{config::Region, primitives::ByteStream, Client};

use super::{object_key, FilePart, ObjectStore, StorageError, StoredObject};
use crate::config::StorageConfig;

/// S3/MinIO-backed object store.
pub struct S3Store {
    client: Client,
    bucket: String,
    region: String,
    public_base_url: Option<String>,
}

impl S3Store {
    /// Build the client from the standard AWS provider chain. A custom
    /// endpoint (MinIO) switches the client to path-style addressing.
    pub async fn new(config: &StorageConfig) -> Self {
        let base = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&base);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, file: FilePart) -> Result<StoredObject, StorageError> {
        let key = object_key(&file.filename);
        let size = file.data.len();
        let content_type = file
            .content_type
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

        // Single put, no retry: any failure leaves the upload outcome unknown
        // and is surfaced to the caller as-is.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&content_type)
            .body(ByteStream::from(file.data))
            .send()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        tracing::info!(key = %key, size = size, content_type = %content_type, "object stored");

        Ok(StoredObject {
            url: object_url(self.public_base_url.as_deref(), &self.bucket, &self.region, &key),
            key,
        })
    }
}

/// Retrieval URL for a stored object: the configured public base when one is
/// set, the virtual-hosted S3 convention otherwise.
fn object_url(public_base_url: Option<&str>, bucket: &str, region: &str, key: &str) -> String {
    match public_base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
        None => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_default_convention() {
        let url = object_url(None, "uploads", "us-east-1", "uploads/abc/a.txt");
        assert_eq!(url, "https://uploads.s3.us-east-1.amazonaws.com/uploads/abc/a.txt");
    }

    #[test]
    fn test_object_url_with_public_base() {
        let url = object_url(
            Some("https://cdn.example.com/"),
            "uploads",
            "us-east-1",
            "uploads/abc/a.txt",
        );
        assert_eq!(url, "https://cdn.example.com/uploads/abc/a.txt");
    }
}
