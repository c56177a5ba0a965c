use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::delete_post::delete_post;
use super::handlers::delete_user::delete_user;
use super::handlers::get_post::get_post;
use super::handlers::get_post::list_posts;
use super::handlers::get_post::list_user_posts;
use super::handlers::get_user::get_user;
use super::handlers::get_user::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_post::update_post;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id/posts", get(list_user_posts))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_id", get(get_post));

    let protected_routes = Router::new()
        .route("/api/users/:user_id", put(update_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route("/api/posts", post(create_post))
        .route("/api/posts/:post_id", put(update_post))
        .route("/api/posts/:post_id", delete(delete_post))
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
