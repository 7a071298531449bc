use axum::{
    routing::{delete, post},
    Router,
};

use crate::config::AppState;
use crate::handlers::tweet_handler::{
    add_tweet_handler, delete_tweet_handler, like_tweet_handler, tweet_feed_handler,
    unlike_tweet_handler,
};

pub fn tweet_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_tweet_handler).get(tweet_feed_handler))
        .route("/{id}", delete(delete_tweet_handler))
        .route(
            "/{id}/likes",
            post(like_tweet_handler).delete(unlike_tweet_handler),
        )
}
