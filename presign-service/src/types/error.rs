//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::object_storage::BucketError;

/// JSON error envelope returned to clients
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    message: String,
    /// Underlying error detail, present on signing failures
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub enum AppError {
    /// Required request parameter absent or empty
    MissingParameter(&'static str),
    /// Parameter present but not one of the allowed values
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: String,
    },
    /// Presigned URL generation failed
    Signing(BucketError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::MissingParameter(name) => {
                tracing::warn!("Missing required parameter: {name}");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorResponse {
                        message: format!("Missing required parameter: {name}"),
                        error: None,
                    },
                )
            }
            Self::InvalidParameter { name, value } => {
                tracing::warn!("Invalid value for parameter {name}: {value}");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorResponse {
                        message: format!("Invalid value for parameter {name}: {value}"),
                        error: None,
                    },
                )
            }
            Self::Signing(err) => {
                // Full detail stays server-side; clients get a generic message
                tracing::error!("Presigned URL generation failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse {
                        message: "Failed to generate presigned URL".to_string(),
                        error: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convert bucket errors to application errors
impl From<BucketError> for AppError {
    fn from(err: BucketError) -> Self {
        Self::Signing(err)
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
