use reqwest::StatusCode;
use thiserror::Error;

/// Outcome classification for a single credential exchange.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The exchange never completed: connect failure, timeout, or an aborted
    /// response-body read.
    #[error("token endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered success but the payload was not a token response.
    #[error("token endpoint returned malformed JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The endpoint answered with a non-success status (e.g. invalid_grant).
    #[error("token endpoint rejected the exchange with status {status}")]
    Rejected { status: StatusCode, body: String },
}
