use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};

use crate::config::AppState;
use crate::models::auth_model::AuthUser;
use crate::models::media_model::AddMediaResponse;
use crate::services::media_service::MediaService;
use crate::utils::api_response::ResponseBuilder;

/// Multipart upload with a single expected `file` field.
pub async fn add_media_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let file_name = field.file_name().map(str::to_owned);
            let data = match field.bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    return ResponseBuilder::error(
                        StatusCode::BAD_REQUEST,
                        "Bad Request",
                        &e.to_string(),
                    )
                    .into_response();
                }
            };

            return match MediaService::add_media_file(&state, &user.name, file_name, data).await {
                Ok(media_id) => {
                    ResponseBuilder::created(AddMediaResponse::new(media_id)).into_response()
                }
                Err((status, kind, msg)) => {
                    ResponseBuilder::error(status, kind, &msg).into_response()
                }
            };
        }
    }

    ResponseBuilder::error(
        StatusCode::BAD_REQUEST,
        "Bad Request",
        "File field is missing!",
    )
    .into_response()
}
