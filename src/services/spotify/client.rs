use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::config::ClientCredentials;
use crate::services::spotify::error::ExchangeError;

/// The token payload this relay forwards. Everything else the authorization
/// server returns (token_type, scope, a rotated refresh_token) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    /// Seconds until expiry.
    pub expires_in: u64,
}

/// Client for the authorization server's token endpoint.
///
/// Built once at startup with the application credentials and shared across
/// requests; each refresh is a single Basic-auth form POST.
pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: ClientCredentials,
    token_endpoint: Url,
}

impl SpotifyClient {
    pub fn new(credentials: ClientCredentials, token_endpoint: Url) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            credentials,
            token_endpoint,
        }
    }

    /// `Basic base64(client_id:client_secret)`, standard alphabet.
    fn basic_auth_value(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        );

        format!("Basic {}", BASE64.encode(raw))
    }

    /// Performs one `grant_type=refresh_token` exchange.
    ///
    /// The outcome is classified explicitly: transport problems and malformed
    /// success payloads are distinct from the endpoint rejecting the grant.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshedToken, ExchangeError> {
        let response = self
            .http
            .post(self.token_endpoint.clone())
            .header(AUTHORIZATION, self.basic_auth_value())
            // Field order is part of the wire contract callers observe.
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "token endpoint request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeError::Rejected { status, body });
        }

        serde_json::from_str(&body).map_err(ExchangeError::Decode)
    }
}
