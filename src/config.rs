use std::net::SocketAddr;
use std::str::FromStr;
use std::{env, fmt};

use url::Url;

use crate::error::AppError;

/// Spotify's token endpoint. Overridable via SPOTIFY_TOKEN_URL so tests can
/// point the relay at a local mock server.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Spotify application credentials, sent as HTTP Basic auth to the token
/// endpoint. The secret never appears in Debug output.
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub credentials: ClientCredentials,
    pub token_endpoint: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        // Credentials are required up front: a missing variable fails startup
        // by name instead of producing a malformed Basic header per request.
        let client_id = env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| ConfigError::Missing("SPOTIFY_CLIENT_ID"))?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))?;

        let raw_endpoint =
            env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| SPOTIFY_TOKEN_URL.to_string());
        let token_endpoint =
            Url::parse(&raw_endpoint).map_err(|_| ConfigError::Invalid("SPOTIFY_TOKEN_URL"))?;

        Ok(Config {
            addr,
            app_env,
            credentials: ClientCredentials {
                client_id,
                client_secret,
            },
            token_endpoint,
        })
    }
}

impl From<ConfigError> for AppError {
    fn from(_: ConfigError) -> Self {
        AppError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_the_secret() {
        let credentials = ClientCredentials {
            client_id: "some-client".to_string(),
            client_secret: "super-secret".to_string(),
        };

        let rendered = format!("{credentials:?}");

        assert!(rendered.contains("some-client"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn default_token_endpoint_parses() {
        let url = Url::parse(SPOTIFY_TOKEN_URL).unwrap();

        assert_eq!(url.host_str(), Some("accounts.spotify.com"));
        assert_eq!(url.path(), "/api/token");
    }
}
