//! Error types for report retrieval.

/// Error from report store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// No report exists for the run.
    #[error("report not found for run {run_id}: {message}")]
    NotFound {
        /// Requested run identifier.
        run_id: String,
        /// Server-provided reason.
        message: String,
    },

    /// Run identifier rejected before any request was made.
    #[error("invalid run id: {0:?}")]
    InvalidRunId(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
