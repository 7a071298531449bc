use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::AppState;
use crate::models::auth_model::AuthUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::api_response::ResponseBuilder;

pub const API_KEY_HEADER: &str = "api-key";

/// The authorization gate. Every request must carry an `api-key` header whose
/// value is the name of a registered user; anything else is rejected with a
/// fixed 401 envelope before any handler runs. On success the resolved
/// identity is injected as an `AuthUser` extension.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(raw) = req.headers().get(API_KEY_HEADER) else {
        tracing::info!("rejecting request without api-key header");
        return Ok(ResponseBuilder::unauthorized().into_response());
    };
    let Ok(user_name) = raw.to_str().map(str::to_owned) else {
        tracing::info!("rejecting request with non-ascii api-key header");
        return Ok(ResponseBuilder::unauthorized().into_response());
    };

    let user_id = match UserRepository::id_by_name(&state.db, &user_name).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::info!(user_name, "rejecting unknown api-key");
            return Ok(ResponseBuilder::unauthorized().into_response());
        }
        Err(e) => {
            tracing::error!("identity lookup failed: {}", e);
            return Ok(ResponseBuilder::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Identity lookup failed!",
            )
            .into_response());
        }
    };

    req.extensions_mut().insert(AuthUser {
        id: user_id,
        name: user_name,
    });
    Ok(next.run(req).await)
}
