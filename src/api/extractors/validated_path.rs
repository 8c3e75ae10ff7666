//! Path extractor whose rejection uses the application error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like [`Path`], but an unparsable segment becomes a `Validation` error
/// rendered as `{"message": [...]}` instead of a plain-text body.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await.map_err(|e| {
            tracing::warn!("Invalid path params: {}", e.body_text());
            AppError::validation(e.body_text())
        })?;

        Ok(ValidatedPath(value))
    }
}
