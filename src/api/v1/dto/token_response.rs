use serde::Serialize;

/// Response body for a successful refresh.
///
/// Only the fields callers need are forwarded. Anything else the upstream
/// returns (token_type, scope, a rotated refresh_token) is dropped.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until expiry.
    pub expires_in: u64,
}
