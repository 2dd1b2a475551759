use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::items::create_item;
use super::handlers::items::delete_item;
use super::handlers::items::get_item;
use super::handlers::items::list_items;
use super::handlers::items::replace_item;
use super::handlers::items::update_item;
use super::handlers::users::create_user;
use super::handlers::users::delete_user;
use super::handlers::users::get_current_user;
use super::handlers::users::get_user;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub item_service: Arc<dyn ItemServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the inventory API!" }))
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/api/auth/login", post(login))
        .route("/api/users", post(create_user))
        .route("/api/items", get(list_items))
        .route("/api/items/:item_id", get(get_item));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_current_user))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id", patch(update_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route("/api/items", post(create_item))
        .route("/api/items/:item_id", put(replace_item))
        .route("/api/items/:item_id", patch(update_item))
        .route("/api/items/:item_id", delete(delete_item))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
