use serde::Deserialize;

/// Request body for `/spotify/refresh`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshRequest {
    /// Opaque refresh token previously issued to the caller. Only presence is
    /// validated here; the value is meaningful to the authorization server.
    pub refresh_token: Option<String>,
}
