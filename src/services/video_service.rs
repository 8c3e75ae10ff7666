//! Video service - Owner-scoped tutorial operations.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewVideo, Video, VideoChanges};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Video service trait for dependency injection.
///
/// `owner` is always the authenticated caller; a video belonging to anyone
/// else fails with `NotFound`.
#[async_trait]
pub trait VideoService: Send + Sync {
    async fn list(&self, owner: i32) -> AppResult<Vec<Video>>;

    async fn create(&self, owner: i32, video: NewVideo) -> AppResult<Video>;

    async fn update(&self, owner: i32, id: i32, changes: VideoChanges) -> AppResult<Video>;

    async fn delete(&self, owner: i32, id: i32) -> AppResult<()>;
}

/// Concrete implementation of VideoService using Unit of Work.
pub struct VideoManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> VideoManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> VideoService for VideoManager<U> {
    async fn list(&self, owner: i32) -> AppResult<Vec<Video>> {
        self.uow.videos().list_by_owner(owner).await
    }

    async fn create(&self, owner: i32, video: NewVideo) -> AppResult<Video> {
        let video = self.uow.videos().create(owner, video).await?;
        tracing::debug!(user_id = owner, tutorial_id = video.id, "Tutorial created");
        Ok(video)
    }

    async fn update(&self, owner: i32, id: i32, changes: VideoChanges) -> AppResult<Video> {
        self.uow.videos().update_owned(owner, id, changes).await
    }

    async fn delete(&self, owner: i32, id: i32) -> AppResult<()> {
        self.uow.videos().delete_owned(owner, id).await?;
        tracing::debug!(user_id = owner, tutorial_id = id, "Tutorial deleted");
        Ok(())
    }
}
