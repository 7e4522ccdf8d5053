use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Router};
use presign_service::{object_storage::ObjectStorage, server, types::Environment};
use tower::ServiceExt;

/// Bucket the test client is configured against
pub const TEST_BUCKET: &str = "test-objects";

/// Test harness around the assembled production router
///
/// Presigning is pure request signing: with static credentials the S3
/// client never talks to the endpoint, so the suite runs without any
/// local object store.
pub struct TestContext {
    pub router: Router,
}

impl TestContext {
    pub async fn new(presign_expiry_override: Option<u64>) -> Self {
        // Initialize tracing for tests
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .ok();

        let environment = Environment::Development {
            presign_expiry_override,
        };

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("test", "test", None))
            .endpoint_url("http://localhost:4566")
            .force_path_style(true)
            .build();
        let s3_client = Arc::new(S3Client::from_conf(s3_config));

        let object_storage = Arc::new(ObjectStorage::new(
            s3_client,
            TEST_BUCKET.to_string(),
            environment.presigned_url_expiry_secs(),
        ));

        Self {
            router: server::build_router(environment, object_storage),
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}
