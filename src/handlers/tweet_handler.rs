use axum::{extract::State, response::IntoResponse, Extension};

use crate::config::AppState;
use crate::models::auth_model::AuthUser;
use crate::models::tweet_model::{
    AddTweetRequest, AddTweetResponse, FeedResponse, SuccessResponse,
};
use crate::services::feed_service::FeedService;
use crate::services::tweet_service::TweetService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::{ApiPath, ValidatedJson};

pub async fn add_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<AddTweetRequest>,
) -> impl IntoResponse {
    match TweetService::add_tweet(&state, &user, payload).await {
        Ok(tweet_id) => ResponseBuilder::created(AddTweetResponse::new(tweet_id)).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn delete_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(tweet_id): ApiPath<i32>,
) -> impl IntoResponse {
    match TweetService::delete_tweet(&state, &user, tweet_id).await {
        Ok(()) => ResponseBuilder::ok(SuccessResponse::new()).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn like_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(tweet_id): ApiPath<i32>,
) -> impl IntoResponse {
    match TweetService::like_tweet(&state, &user, tweet_id).await {
        Ok(()) => ResponseBuilder::created(SuccessResponse::new()).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn unlike_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(tweet_id): ApiPath<i32>,
) -> impl IntoResponse {
    match TweetService::unlike_tweet(&state, &user, tweet_id).await {
        Ok(()) => ResponseBuilder::created(SuccessResponse::new()).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn tweet_feed_handler(State(state): State<AppState>) -> impl IntoResponse {
    match FeedService::full_feed(&state.db).await {
        Ok(tweets) => ResponseBuilder::ok(FeedResponse::new(tweets)).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}
