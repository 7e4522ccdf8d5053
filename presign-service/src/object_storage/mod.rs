//! S3-based presigned URL operations

mod error;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::{presigning::PresigningConfig, Client as S3Client};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use error::{BucketError, BucketResult};

/// Operation a presigned URL grants on an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Action {
    /// Download the object (`getObject`)
    #[serde(rename = "getObject")]
    Read,
    /// Upload the object (`putObject`)
    #[serde(rename = "putObject")]
    Write,
}

/// Error returned when parsing an unrecognized action value
#[derive(Debug, Error)]
#[error("unrecognized action: {0}")]
pub struct UnknownAction(String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getObject" => Ok(Self::Read),
            "putObject" => Ok(Self::Write),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL
    pub url: String,
    /// ISO-8601 UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Object storage client for presigned URL generation
pub struct ObjectStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    presigned_url_expiry_secs: u64,
}

impl ObjectStorage {
    /// Creates a new object storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket the issued URLs grant access to
    /// * `presigned_url_expiry_secs` - Validity window for issued URLs in seconds
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        presigned_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            presigned_url_expiry_secs,
        }
    }

    /// Generates a presigned URL granting `action` on `key`
    ///
    /// `content_type` is only applied to `putObject` URLs; read URLs carry
    /// no content type constraint, so the argument is ignored for
    /// `Action::Read`.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if presigning config creation fails
    /// Returns `BucketError::S3Error` if presigned URL generation fails
    pub async fn generate_presigned_url(
        &self,
        action: Action,
        key: &str,
        content_type: Option<&str>,
    ) -> BucketResult<PresignedUrl> {
        debug!(
            "Generating presigned URL for object: {} action: {:?}",
            key, action
        );

        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.presigned_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned_request = match action {
            Action::Read => self
                .s3_client
                .get_object()
                .bucket(&self.bucket_name)
                .key(key)
                .presigned(presigned_config)
                .await
                .map_err(|e| {
                    BucketError::S3Error(format!("Failed to generate presigned URL: {e}"))
                })?,
            Action::Write => {
                let mut put_request = self
                    .s3_client
                    .put_object()
                    .bucket(&self.bucket_name)
                    .key(key);

                if let Some(content_type) = content_type {
                    put_request = put_request.content_type(content_type);
                }

                put_request
                    .presigned(presigned_config)
                    .await
                    .map_err(|e| {
                        BucketError::S3Error(format!("Failed to generate presigned URL: {e}"))
                    })?
            }
        };

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(self.presigned_url_expiry_secs);

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}
