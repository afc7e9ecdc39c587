use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::services::spotify::ExchangeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing refresh_token")]
    MissingRefreshToken,

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
            }
            AppError::MissingRefreshToken => {
                (StatusCode::BAD_REQUEST, "Missing refresh_token", None)
            }
            AppError::Exchange(ExchangeError::Rejected { status, body }) => {
                tracing::warn!(%status, "token endpoint rejected the exchange");

                // Embed the upstream OAuth payload (e.g. invalid_grant) so
                // callers can act on it without this relay interpreting it.
                let details =
                    serde_json::from_str::<Value>(&body).unwrap_or_else(|_| Value::String(body));

                (StatusCode::BAD_GATEWAY, "Upstream error", Some(details))
            }
            AppError::Exchange(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                Some(Value::String(err.to_string())),
            ),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Server error", None),
        };

        let body = ErrorResponseBody { error, details };

        (status, Json(body)).into_response()
    }
}
