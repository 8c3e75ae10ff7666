//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    /// User display name
    #[validate(
        required(message = "Missing data for required field."),
        length(max = 250, message = "Longer than maximum length 250.")
    )]
    #[schema(example = "Testuser", max_length = 250)]
    pub name: Option<String>,
    /// User email address
    #[validate(
        required(message = "Missing data for required field."),
        email(message = "Not a valid email address."),
        length(max = 250, message = "Longer than maximum length 250.")
    )]
    #[schema(example = "test@test.ru", max_length = 250)]
    pub email: Option<String>,
    /// User password
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, max = 100, message = "Length must be between 1 and 100.")
    )]
    #[schema(example = "password", max_length = 100)]
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// User email address
    #[validate(required(message = "Missing data for required field."))]
    #[schema(example = "test@test.ru")]
    pub email: Option<String>,
    /// User password
    #[validate(required(message = "Missing data for required field."))]
    #[schema(example = "password")]
    pub password: Option<String>,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user and receive a token
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<TokenResponse>> {
    // Presence is guaranteed by validation
    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let token = state
        .auth_service
        .register(name, email.clone(), password)
        .await
        .inspect_err(|e| tracing::warn!("registration for {} failed with errors: {}", email, e))?;

    Ok(Json(token))
}

/// Login and get a token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let token = state
        .auth_service
        .login(email.clone(), password)
        .await
        .inspect_err(|e| tracing::warn!("login with email {} failed with errors: {}", email, e))?;

    Ok(Json(token))
}
