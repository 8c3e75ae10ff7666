//! Video domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

/// Video metadata record owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: i32,
    /// Owner; fixed at creation.
    pub user_id: i32,
    pub name: String,
    pub description: String,
}

impl Video {
    /// Apply only the supplied fields.
    pub fn apply(&mut self, changes: VideoChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
    }
}

/// Validated input for a new video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub name: String,
    pub description: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl VideoChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Video representation returned to clients (owner id is not exposed)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VideoResponse {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Video 1")]
    pub name: String,
    #[schema(example = "Description")]
    pub description: String,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            name: video.name,
            description: video.description,
        }
    }
}
