// Storage module for S3/MinIO integration

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

pub mod s3;

/// A single file extracted from a multipart request. Filename and content
/// type are client-supplied and untrusted.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Result of a successful transfer: the key the object was stored under and
/// a URL at which it is retrievable.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Object-storage seam. Implementations must be safe for concurrent use by
/// multiple in-flight requests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Derive a fresh key for the file and transfer its bytes to the backend.
    ///
    /// No retry and no partial-upload cleanup: on failure the upload outcome
    /// is unknown unless the backend guarantees atomicity.
    async fn put(&self, file: FilePart) -> Result<StoredObject, StorageError>;
}

/// Derive a unique storage key from an untrusted filename.
///
/// The UUID token keeps concurrent uploads of identically-named files from
/// colliding; the sanitized filename keeps the key recognizable.
pub fn object_key(filename: &str) -> String {
    format!("uploads/{}/{}", Uuid::new_v4(), sanitize_filename(filename))
}

/// Reduce a client-supplied filename to something safe to embed in a storage
/// key: last path component only, conservative character allowlist, no
/// leading dots.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_ends_with_filename() {
        assert!(object_key("report.pdf").ends_with("/report.pdf"));
    }

    #[test]
    fn test_object_key_unique_for_same_filename() {
        assert_ne!(object_key("dup.png"), object_key("dup.png"));
    }

    #[test]
    fn test_object_key_is_namespaced() {
        assert!(object_key("a.txt").starts_with("uploads/"));
    }

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("a.txt"), "a.txt");
        assert_eq!(sanitize_filename("photo-2024_01.jpeg"), "photo-2024_01.jpeg");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("c:\\windows\\cmd.exe"), "cmd.exe");
        assert_eq!(sanitize_filename("dir/sub/name.txt"), "name.txt");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("a\nb.txt"), "a_b.txt");
        assert_eq!(sanitize_filename("weird name!.png"), "weird_name_.png");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename(".."), "file");
        assert_eq!(sanitize_filename("..."), "file");
        assert_eq!(sanitize_filename("name/"), "file");
    }

    #[test]
    fn test_sanitize_strips_leading_dots() {
        assert_eq!(sanitize_filename(".htaccess"), "htaccess");
    }
}
