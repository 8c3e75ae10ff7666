//! Tutorial (video) handlers. All routes require authentication.

use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{NewVideo, VideoChanges, VideoResponse};
use crate::errors::AppResult;
use crate::types::NoContent;

/// New tutorial request. `id` and `user_id` are assigned by the server.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateVideoRequest {
    #[validate(
        required(message = "Missing data for required field."),
        length(max = 250, message = "Longer than maximum length 250.")
    )]
    #[schema(example = "Video 1", max_length = 250)]
    pub name: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        length(max = 500, message = "Longer than maximum length 500.")
    )]
    #[schema(example = "Description", max_length = 500)]
    pub description: Option<String>,
}

impl From<CreateVideoRequest> for NewVideo {
    fn from(req: CreateVideoRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
        }
    }
}

/// Partial tutorial update; omitted fields keep their value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateVideoRequest {
    #[validate(length(max = 250, message = "Longer than maximum length 250."))]
    #[schema(example = "Video upd", max_length = 250)]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Longer than maximum length 500."))]
    #[schema(example = "Description upd", max_length = 500)]
    pub description: Option<String>,
}

impl From<UpdateVideoRequest> for VideoChanges {
    fn from(req: UpdateVideoRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Create tutorial routes
pub fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/tutorials", get(list_tutorials).post(create_tutorial))
        .route("/tutorials/:id", put(update_tutorial).delete(delete_tutorial))
}

/// List the caller's tutorials
#[utoipa::path(
    get,
    path = "/tutorials",
    tag = "Tutorials",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's tutorials in creation order", body = [VideoResponse]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_tutorials(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<VideoResponse>>> {
    let videos = state.video_service.list(user.id).await.inspect_err(|e| {
        tracing::warn!(user_id = user.id, "tutorials - read action failed with errors: {}", e)
    })?;

    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

/// Create a tutorial owned by the caller
#[utoipa::path(
    post,
    path = "/tutorials",
    tag = "Tutorials",
    security(("bearer_auth" = [])),
    request_body = CreateVideoRequest,
    responses(
        (status = 200, description = "Tutorial created", body = VideoResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_tutorial(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateVideoRequest>,
) -> AppResult<Json<VideoResponse>> {
    let video = state
        .video_service
        .create(user.id, payload.into())
        .await
        .inspect_err(|e| {
            tracing::warn!(user_id = user.id, "tutorials - create action failed with errors: {}", e)
        })?;

    Ok(Json(video.into()))
}

/// Update a tutorial owned by the caller
#[utoipa::path(
    put,
    path = "/tutorials/{id}",
    tag = "Tutorials",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tutorial identifier")),
    request_body = UpdateVideoRequest,
    responses(
        (status = 200, description = "Tutorial updated", body = VideoResponse),
        (status = 400, description = "Validation error, or no such tutorial for this user"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_tutorial(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateVideoRequest>,
) -> AppResult<Json<VideoResponse>> {
    let video = state
        .video_service
        .update(user.id, id, payload.into())
        .await
        .inspect_err(|e| {
            tracing::warn!(
                user_id = user.id,
                tutorial_id = id,
                "update action failed with errors: {}",
                e
            )
        })?;

    Ok(Json(video.into()))
}

/// Delete a tutorial owned by the caller
#[utoipa::path(
    delete,
    path = "/tutorials/{id}",
    tag = "Tutorials",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tutorial identifier")),
    responses(
        (status = 204, description = "Tutorial deleted"),
        (status = 400, description = "Invalid id, or no such tutorial for this user"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_tutorial(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<NoContent> {
    state
        .video_service
        .delete(user.id, id)
        .await
        .inspect_err(|e| {
            tracing::warn!(
                user_id = user.id,
                tutorial_id = id,
                "delete action failed with errors: {}",
                e
            )
        })?;

    Ok(NoContent)
}
