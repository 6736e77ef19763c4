use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::cookies;
use crate::inbound::http::cookies::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::cookies::REFRESH_TOKEN_COOKIE;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Clear both token cookies. Tokens already issued stay valid until they expire.
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<MessageData>), ApiError> {
    tracing::info!(user_id = %user.user_id, "User logged out");

    let jar = jar
        .add(cookies::removal_cookie(ACCESS_TOKEN_COOKIE, state.cookie_settings))
        .add(cookies::removal_cookie(REFRESH_TOKEN_COOKIE, state.cookie_settings));

    let data = MessageData {
        message: "Logged out successfully".to_string(),
    };

    Ok((jar, ApiSuccess::new(StatusCode::OK, data)))
}
