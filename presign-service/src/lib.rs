//! Presigned URL issuing service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// S3 presigned URL operations
pub mod object_storage;

/// Handler modules
pub mod routes;

/// Server setup
pub mod server;

/// Shared types
pub mod types;
