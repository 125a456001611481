//! Extractors that map rejections into the application error shapes.
//!
//! Axum's built-in extractors reply with plain-text bodies when a request
//! fails before reaching a handler (malformed JSON, wrong content type,
//! unparseable query or path parameters). Every failure in this service is
//! JSON, so these wrappers delegate to the built-in extractors and convert
//! their rejections into [`AppError::Validation`], keeping the field-error
//! array contract for anything a client can get wrong.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, FieldError};

/// JSON request body extractor with a JSON rejection body.
///
/// Drop-in replacement for [`axum::Json`]; also usable as a response type.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::validation(vec![FieldError::new("body", rejection.body_text())])
            })?;

        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string extractor with a JSON rejection body.
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(
            parts, state,
        )
        .await
        .map_err(|rejection: QueryRejection| {
            AppError::validation(vec![FieldError::new("query", rejection.body_text())])
        })?;

        Ok(Self(value))
    }
}

/// Path parameter extractor with a JSON rejection body.
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(
            parts, state,
        )
        .await
        .map_err(|rejection: PathRejection| {
            AppError::validation(vec![FieldError::new("path", rejection.body_text())])
        })?;

        Ok(Self(value))
    }
}
