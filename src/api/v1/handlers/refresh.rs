use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::v1::dto::{refresh_request::RefreshRequest, token_response::TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// POST /spotify/refresh
///
/// Exchanges a caller-supplied refresh token for a fresh access token at the
/// configured authorization server and forwards the shaped result.
pub async fn refresh(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    // Parse leniently: an empty, non-JSON, or mistyped body must answer the
    // same 400 as an absent refresh_token, never a framework rejection.
    let req: RefreshRequest = serde_json::from_slice(&body).unwrap_or_default();

    let refresh_token = req
        .refresh_token
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MissingRefreshToken)?;

    let token = state.spotify.refresh_access_token(&refresh_token).await?;

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            access_token: token.access_token,
            expires_in: token.expires_in,
        }),
    ))
}

/// Answers every non-POST method on the refresh route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
