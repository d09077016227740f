use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// `Json` extractor whose rejections use the service's error body.
///
/// Malformed or mistyped JSON is a validation error (400). Anything refused
/// before parsing (oversized body, missing content type) keeps its own status.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let rejection = match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => return Ok(JsonBody(value)),
            Err(rejection) => rejection,
        };

        tracing::warn!("Rejected request body: {}", rejection.body_text());

        Err(match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation(rejection.body_text())
            }
            other => AppError::Rejected(other.status(), other.body_text()),
        })
    }
}
