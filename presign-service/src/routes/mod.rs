mod docs;
mod health;

/// Presigned URL issuance
pub mod urls;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/v1/presigned-urls", get(urls::issue_presigned_url))
}
