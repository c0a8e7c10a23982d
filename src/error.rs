use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the fetch stage. Each halts the run before anything is
/// written; none of them aborts the process.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS resolution, connection, or body-read failure.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a 4xx/5xx status.
    #[error("server responded with status {status}")]
    Http { status: StatusCode },

    /// The response body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
}
