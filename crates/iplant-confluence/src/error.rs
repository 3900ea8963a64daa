//! Error types for the Confluence client.

/// Error from wiki client operations.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Login attempt failed (bad credentials, unreachable service,
    /// non-success status).
    #[error("Login failure: {0}")]
    Auth(String),

    /// Remote call failed for a reason other than session invalidity.
    #[error("Remote call failed ({code}): {message}")]
    Remote { code: i64, message: String },

    /// HTTP request error.
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// The session token was rejected as invalid or expired.
    ///
    /// Internal retry signal: the session wrapper catches this once,
    /// re-authenticates and retries. Callers of the public operations
    /// never observe it.
    #[error("Session invalid or expired")]
    SessionExpired,

    /// Page lookup returned nothing.
    #[error("Page \"{title}\" not found in space {space}")]
    PageNotFound { title: String, space: String },

    /// Comment lookup returned nothing.
    #[error("Comment {id} not found")]
    CommentNotFound { id: u64 },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for WikiError {
    fn from(e: serde_json::Error) -> Self {
        WikiError::Json(e.to_string())
    }
}

impl From<ureq::Error> for WikiError {
    fn from(e: ureq::Error) -> Self {
        WikiError::Http {
            status: 0,
            body: e.to_string(),
        }
    }
}
