//! JSON extractor with validation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;
use vitrine_core::{validation::field_errors, VitrineError};

use crate::responses::{AppError, UnprocessableEntity};

/// Extracts a JSON body and runs its `validator` rules.
///
/// A body that does not parse is a 400; a body that parses but violates
/// field rules is a 422 with per-field details.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError(VitrineError::validation(rejection.body_text())).into_response()
            })?;

        if let Err(errors) = value.validate() {
            return Err(UnprocessableEntity(field_errors(&errors)).into_response());
        }

        Ok(Self(value))
    }
}

/// Extracts a JSON body without running its field rules.
///
/// Used on routes where a domain check (ownership of the target) must
/// answer before payload rules; the service validates after that check.
pub struct PayloadJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for PayloadJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError(VitrineError::validation(rejection.body_text())).into_response()
            })?;

        Ok(Self(value))
    }
}
