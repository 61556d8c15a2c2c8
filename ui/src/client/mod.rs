//! Users API Client
//!
//! This module wraps the remote demo REST API behind a small typed client.
//! The API implements conventional REST semantics over HTTPS with JSON
//! bodies; writes are accepted but not actually persisted by the demo
//! server, which is fine for this app's session-local state model.

mod users;

pub use users::{UsersClient, DEFAULT_API_URL};

/// Error type for users API operations
///
/// The UI surfaces every variant identically (a single human-readable
/// message per operation), so no finer taxonomy is needed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
