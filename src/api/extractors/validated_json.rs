//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::errors::AppError;

/// `(field, message)` pair collected before formatting
type Violation = (String, String);

/// JSON extractor that deserializes then validates the payload.
///
/// Every violated constraint is reported, not only the first one. A field
/// with the wrong type or an unknown field is reported on its own and left
/// out of the rest of validation, so request schemas declare their fields
/// as `Option` and enforce presence with `#[validate(required)]`.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use videoblog::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateVideoRequest {
///     #[validate(required, length(max = 250))]
///     name: Option<String>,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateVideoRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|e| {
            tracing::warn!("Invalid input params: {}", e.body_text());
            AppError::validation(e.body_text())
        })?;

        let (value, mut violations) = deserialize_by_field::<T>(body)?;

        if let Err(errors) = value.validate() {
            let rejected: Vec<String> = violations.iter().map(|(field, _)| field.clone()).collect();
            violations.extend(
                field_violations(&errors)
                    .into_iter()
                    .filter(|(field, _)| !rejected.contains(field)),
            );
        }

        if !violations.is_empty() {
            let messages = format_violations(violations);
            tracing::warn!("Invalid input params: {:?}", messages);
            return Err(AppError::Validation(messages));
        }

        Ok(ValidatedJson(value))
    }
}

/// Deserialize `body`, checking each top-level field on its own so that every
/// mistyped or unknown field is reported. Offending fields are dropped before
/// the final pass.
fn deserialize_by_field<T: DeserializeOwned>(body: Value) -> Result<(T, Vec<Violation>), AppError> {
    let mut object = match body {
        Value::Object(object) => object,
        other => {
            let value = T::deserialize(&other).map_err(|e| AppError::validation(e.to_string()))?;
            return Ok((value, Vec::new()));
        }
    };

    let mut violations = Vec::new();
    object.retain(|field, value| {
        let single = Value::Object(Map::from_iter([(field.clone(), value.clone())]));
        match T::deserialize(&single) {
            Err(e) if !e.to_string().starts_with("missing field") => {
                violations.push((field.clone(), field_message(&e)));
                false
            }
            _ => true,
        }
    });

    match T::deserialize(&Value::Object(object)) {
        Ok(value) => Ok((value, violations)),
        Err(e) => {
            let mut messages = format_violations(violations);
            messages.push(e.to_string());
            tracing::warn!("Invalid input params: {:?}", messages);
            Err(AppError::Validation(messages))
        }
    }
}

fn field_message(error: &serde_json::Error) -> String {
    let text = error.to_string();
    if text.starts_with("unknown field") {
        "Unknown field.".to_string()
    } else if text.contains("expected a string") {
        "Not a valid string.".to_string()
    } else {
        "Invalid value.".to_string()
    }
}

fn field_violations(errors: &validator::ValidationErrors) -> Vec<Violation> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                (field.clone(), message)
            })
        })
        .collect()
}

/// One `"<field>: <message>"` entry per violation, ordered by field name
fn format_violations(mut violations: Vec<Violation>) -> Vec<String> {
    violations.sort_by(|(a, _), (b, _)| a.cmp(b));

    violations
        .into_iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect()
}
