use axum::{routing::post, Router};

use crate::config::AppState;
use crate::handlers::media_handler::add_media_handler;

pub fn media_routes() -> Router<AppState> {
    Router::new().route("/", post(add_media_handler))
}
