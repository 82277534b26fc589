use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the request body; uploads above it are rejected by the
    /// transport with 413 before reaching the handler.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for MinIO or other S3-compatible backends. When set,
    /// path-style addressing is used.
    pub endpoint: Option<String>,
    /// Base URL for building retrieval URLs (CDN or public bucket endpoint).
    /// Falls back to the virtual-hosted S3 URL convention when unset.
    pub public_base_url: Option<String>,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort)?,
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
            storage: StorageConfig {
                bucket: env::var("S3_BUCKET").unwrap_or_else(|_| "uploads".to_string()),
                region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                endpoint: env::var("S3_ENDPOINT").ok(),
                public_base_url: env::var("S3_PUBLIC_BASE_URL").ok(),
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidConfig(
                "Max upload size must be > 0".to_string(),
            ));
        }

        if self.storage.bucket.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Bucket name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            storage: StorageConfig {
                bucket: "uploads".to_string(),
                region: "us-east-1".to_string(),
                endpoint: None,
                public_base_url: None,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.bucket, "uploads");
        assert_eq!(config.server.max_upload_bytes, 100 * 1024 * 1024);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let mut config = Config::default();
        config.storage.bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let mut config = Config::default();
        config.server.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }
}
