use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::inbound::http::cookies;
use crate::inbound::http::cookies::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::cookies::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct RefreshResponseData {
    pub token: String,
}

/// Mint a new access token from the `refresh_token` cookie.
///
/// The refresh token itself is left untouched.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<RefreshResponseData>), ApiError> {
    let refresh_token = cookies::token_from_jar(&jar, REFRESH_TOKEN_COOKIE);

    let token = state
        .auth_service
        .refresh_access_token(refresh_token)
        .await?;

    let jar = jar.add(cookies::token_cookie(
        ACCESS_TOKEN_COOKIE,
        token.clone(),
        state.cookie_settings,
    ));

    Ok((jar, ApiSuccess::new(StatusCode::OK, RefreshResponseData { token })))
}
