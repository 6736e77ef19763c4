use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::cookies::CookieSettings;
use super::handlers::create_item::create_item;
use super::handlers::delete_item::delete_item;
use super::handlers::get_item::get_item;
use super::handlers::list_items::list_items;
use super::handlers::list_items::list_items_by_category;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::handlers::update_item::update_item;
use super::middleware::authenticate;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub item_service: Arc<dyn ItemServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub cookie_settings: CookieSettings,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    item_service: Arc<dyn ItemServicePort>,
    authenticator: Arc<Authenticator>,
    cookie_settings: CookieSettings,
) -> Router {
    let state = AppState {
        auth_service,
        item_service,
        authenticator,
        cookie_settings,
    };

    // Guard applied per method so public and protected handlers can share a path.
    let guard = middleware::from_fn_with_state(state.clone(), authenticate);

    let auth_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/refresh", get(refresh))
        .route(
            "/api/auth/logout",
            post(logout).route_layer(guard.clone()),
        );

    let item_routes = Router::new()
        .route(
            "/api/items",
            get(list_items).merge(post(create_item).route_layer(guard.clone())),
        )
        .route("/api/items/category/:category_id", get(list_items_by_category))
        .route(
            "/api/items/:item_id",
            get(get_item)
                .merge(patch(update_item).route_layer(guard.clone()))
                .merge(delete(delete_item).route_layer(guard)),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .merge(item_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
