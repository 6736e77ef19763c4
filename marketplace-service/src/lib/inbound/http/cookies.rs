use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Attributes applied to every token cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    pub secure: bool,
}

/// HttpOnly cookie carrying a token.
pub fn token_cookie(name: &'static str, token: String, settings: CookieSettings) -> Cookie<'static> {
    Cookie::build((name, token))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie that makes the client drop `name`.
pub fn removal_cookie(name: &'static str, settings: CookieSettings) -> Cookie<'static> {
    let mut cookie = token_cookie(name, String::new(), settings);
    cookie.make_removal();
    cookie
}

/// Non-empty value of cookie `name`, if the request carried one.
pub fn token_from_jar(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
