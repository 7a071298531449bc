use axum::{extract::State, response::IntoResponse, Extension};

use crate::config::AppState;
use crate::models::auth_model::AuthUser;
use crate::models::tweet_model::SuccessResponse;
use crate::models::user_model::ProfileResponse;
use crate::services::user_service::UserService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ApiPath;

pub async fn own_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    match UserService::own_profile(&state.db, &user).await {
        Ok(profile) => ResponseBuilder::ok(ProfileResponse::new(profile)).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn user_profile_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> impl IntoResponse {
    match UserService::user_profile(&state.db, user_id).await {
        Ok(profile) => ResponseBuilder::ok(ProfileResponse::new(profile)).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn follow_user_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(followed_id): ApiPath<i32>,
) -> impl IntoResponse {
    match UserService::follow(&state.db, &user, followed_id).await {
        Ok(()) => ResponseBuilder::created(SuccessResponse::new()).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}

pub async fn unfollow_user_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(followed_id): ApiPath<i32>,
) -> impl IntoResponse {
    match UserService::unfollow(&state.db, &user, followed_id).await {
        Ok(()) => ResponseBuilder::created(SuccessResponse::new()).into_response(),
        Err((status, kind, msg)) => ResponseBuilder::error(status, kind, &msg).into_response(),
    }
}
