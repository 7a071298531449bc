use axum::{
    extract::{
        rejection::PathRejection, FromRequest, FromRequestParts, Path, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::api_response::ResponseBuilder;

/// JSON body extractor that folds both deserialization and validation
/// failures into the uniform 400 envelope.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|err| {
            let message = format!("Invalid request body: {}", err.body_text());
            ResponseBuilder::error(StatusCode::BAD_REQUEST, "Bad Request", &message)
                .into_response()
        })?;

        if let Err(errors) = payload.validate() {
            return Err(ResponseBuilder::error(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                &flatten_validation_errors(errors),
            )
            .into_response());
        }

        Ok(ValidatedJson(payload))
    }
}

/// Path extractor with the same envelope treatment for malformed parameters.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(path_rejection_response(rejection)),
        }
    }
}

fn path_rejection_response(rejection: PathRejection) -> Response {
    let message = format!("Invalid path parameter: {}", rejection.body_text());
    ResponseBuilder::error(StatusCode::BAD_REQUEST, "Bad Request", &message).into_response()
}

fn flatten_validation_errors(errors: ValidationErrors) -> String {
    let mut details = Vec::new();
    for (field, kinds) in errors.field_errors() {
        for err in kinds {
            let message = err
                .message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            details.push(format!("{}: {}", field, message));
        }
    }
    details.join("; ")
}
