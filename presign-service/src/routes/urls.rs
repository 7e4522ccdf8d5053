use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    object_storage::{Action, ObjectStorage},
    types::AppError,
};

/// Query parameters for a presigned URL request
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrlRequest {
    /// Object key the URL grants access to
    pub key: Option<String>,
    /// Requested operation: `getObject` (default) or `putObject`
    pub action: Option<String>,
    /// Content type the client will upload, only honored for `putObject`
    pub content_type: Option<String>,
}

/// Successful presigned URL response
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    /// Time-limited URL granting the requested operation
    pub presigned_url: String,
    /// Echo of the requested object key
    pub key: String,
    /// Resolved operation the URL grants
    pub action: Action,
    /// ISO-8601 UTC timestamp when the URL expires
    pub expires_at: String,
}

/// Issues a time-limited presigned URL for one object and one operation
///
/// Validation order: `key` must be present and non-empty, then `action`
/// (when given) must be a recognized value. `contentType` is only applied
/// to write URLs and silently ignored otherwise. The URL's validity window
/// and permitted operation are fixed at issuance; no store mutation happens
/// here — the client performs the actual read or write later.
///
/// # Errors
///
/// Returns `AppError::MissingParameter` when `key` is absent or empty,
/// `AppError::InvalidParameter` when `action` is unrecognized, and
/// `AppError::Signing` when the presigning call fails.
#[instrument(skip(object_storage))]
pub async fn issue_presigned_url(
    Extension(object_storage): Extension<Arc<ObjectStorage>>,
    Query(params): Query<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    let key = params
        .key
        .filter(|key| !key.is_empty())
        .ok_or(AppError::MissingParameter("key"))?;

    let action = match params.action.as_deref() {
        None => Action::Read,
        Some(raw) => raw.parse().map_err(|_| AppError::InvalidParameter {
            name: "action",
            value: raw.to_owned(),
        })?,
    };

    let presigned_url = object_storage
        .generate_presigned_url(action, &key, params.content_type.as_deref())
        .await?;

    info!("Issued presigned URL for key: {}", key);

    Ok(Json(UrlResponse {
        presigned_url: presigned_url.url,
        key,
        action,
        expires_at: presigned_url.expires_at.to_rfc3339(),
    }))
}
