use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::domain::user::models::UserId;
use crate::inbound::http::cookies;
use crate::inbound::http::cookies::ACCESS_TOKEN_COOKIE;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity established by the request guard, stored in request extensions.
///
/// Created per request; handlers read it through `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: Option<String>,
}

/// Middleware that validates the access token and adds the caller's identity to
/// request extensions.
///
/// No token → 400, invalid or expired token → 401, otherwise the next handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&req)
        .ok_or_else(|| ApiError::BadRequest("Missing or malformed JWT".to_string()))?;

    let claims = state.authenticator.validate_token(&token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired JWT".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.user_id),
        username: claims.username,
    });

    Ok(next.run(req).await)
}

/// Bearer token from the Authorization header, or the access token cookie when
/// no header was sent.
fn extract_token(req: &Request) -> Option<String> {
    match req.headers().get(header::AUTHORIZATION) {
        Some(value) => value
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string),
        None => cookies::token_from_jar(&CookieJar::from_headers(req.headers()), ACCESS_TOKEN_COOKIE),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with(name: header::HeaderName, value: &str) -> Request {
        axum::http::Request::builder()
            .uri("/")
            .header(name, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with(header::AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(extract_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_extract_rejects_other_schemes() {
        let req = request_with(header::AUTHORIZATION, "Basic dXNlcjpwYXNz");
        assert_eq!(extract_token(&req), None);

        let req = request_with(header::AUTHORIZATION, "Bearer ");
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_falls_back_to_cookie() {
        let req = request_with(header::COOKIE, "access_token=abc.def.ghi; other=1");
        assert_eq!(extract_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_extract_without_credentials() {
        let req = axum::http::Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(extract_token(&req), None);
    }
}
