pub mod media_route;
pub mod tweet_route;
pub mod user_route;

use axum::{
    http::{Method, StatusCode},
    middleware,
    response::IntoResponse,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppState;
use crate::middleware::auth_middleware::api_key_middleware;
use crate::utils::api_response::ResponseBuilder;

async fn not_found_fallback() -> impl IntoResponse {
    ResponseBuilder::error(StatusCode::NOT_FOUND, "Not Found", "Route is not existed!")
}

async fn method_not_allowed_fallback() -> impl IntoResponse {
    ResponseBuilder::error(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method Not Allowed",
        "Method is not allowed for this route!",
    )
}

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    // The api-key gate wraps routing itself, so unknown routes with a bad
    // key still answer 401 before the 404 fallback runs.
    Router::new()
        .nest("/api/tweets", tweet_route::tweet_routes())
        .nest("/api/users", user_route::user_routes())
        .nest("/api/medias", media_route::media_routes())
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(cors)
        .with_state(state)
}
