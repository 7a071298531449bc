use axum::{
    routing::{get, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::user_handler::{
    follow_user_handler, own_profile_handler, unfollow_user_handler, user_profile_handler,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(own_profile_handler))
        .route("/{id}", get(user_profile_handler))
        .route(
            "/{id}/follow",
            post(follow_user_handler).delete(unfollow_user_handler),
        )
}
