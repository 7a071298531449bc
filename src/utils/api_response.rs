use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform error envelope. Built fresh for every response so nothing is
/// shared between concurrent requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub result: bool,
    pub error_type: String,
    pub error_message: String,
}

pub struct ApiError(pub StatusCode, pub ErrorBody);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

// Wrapper to combine StatusCode and a success body
pub struct ApiSuccess<T>(pub StatusCode, pub T);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn ok<T: Serialize>(data: T) -> ApiSuccess<T> {
        ApiSuccess(StatusCode::OK, data)
    }

    pub fn created<T: Serialize>(data: T) -> ApiSuccess<T> {
        ApiSuccess(StatusCode::CREATED, data)
    }

    pub fn error(status: StatusCode, error_type: &str, message: &str) -> ApiError {
        ApiError(
            status,
            ErrorBody {
                result: false,
                error_type: error_type.to_string(),
                error_message: message.to_string(),
            },
        )
    }

    pub fn unauthorized() -> ApiError {
        Self::error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "User is not authorized!",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_to_the_uniform_envelope() {
        let err = ResponseBuilder::error(StatusCode::BAD_REQUEST, "Bad Request", "nope");
        let json = serde_json::to_value(&err.1).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": false,
                "error_type": "Bad Request",
                "error_message": "nope"
            })
        );
    }

    #[test]
    fn unauthorized_uses_a_fixed_401() {
        let err = ResponseBuilder::unauthorized();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.1.error_type, "Unauthorized");
    }
}
