//! Integration tests for Shoplite.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p shoplite-cli -- migrate
//!
//! # Start the API server
//! cargo run -p shoplite-api
//!
//! # Run integration tests
//! cargo test -p shoplite-integration-tests -- --ignored
//! ```
//!
//! Tests live in `tests/` and are `#[ignore]`d by default since they require
//! a running server.

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHOPLITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Generate an email address unlikely to collide across test runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{prefix}+{nanos}@example.com")
}
