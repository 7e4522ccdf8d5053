//! Error types for bucket operations

use thiserror::Error;

/// Result type for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur during presigned URL generation
#[derive(Error, Debug)]
pub enum BucketError {
    /// S3 service error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
