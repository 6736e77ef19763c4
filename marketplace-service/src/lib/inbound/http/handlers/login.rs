use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginIdentity;
use crate::inbound::http::cookies;
use crate::inbound::http::cookies::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::cookies::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for login (raw JSON)
#[derive(Deserialize)]
pub struct LoginRequest {
    /// Email address or username.
    pub identity: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LoginResponseData {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Verify credentials, set both token cookies and return the access token.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let Json(req) = body?;

    let command = LoginCommand {
        identity: LoginIdentity::classify(req.identity),
        password: req.password,
    };

    let outcome = state.auth_service.login(command).await?;

    let jar = jar
        .add(cookies::token_cookie(
            ACCESS_TOKEN_COOKIE,
            outcome.access_token.clone(),
            state.cookie_settings,
        ))
        .add(cookies::token_cookie(
            REFRESH_TOKEN_COOKIE,
            outcome.refresh_token,
            state.cookie_settings,
        ));

    let data = LoginResponseData {
        user_id: outcome.user.id.0,
        username: outcome.user.username.as_str().to_string(),
        email: outcome.user.email.as_str().to_string(),
        token: outcome.access_token,
    };

    Ok((jar, ApiSuccess::new(StatusCode::OK, data)))
}
