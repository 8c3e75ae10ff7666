//! Video repository. Every query is scoped to the owning user.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::video::{self, ActiveModel, Entity as VideoEntity};
use crate::domain::{NewVideo, Video, VideoChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Video repository trait for dependency injection.
///
/// A video owned by another user behaves exactly like a missing one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// List the owner's videos in insertion order
    async fn list_by_owner(&self, owner: i32) -> AppResult<Vec<Video>>;

    /// Insert a video for the owner
    async fn create(&self, owner: i32, video: NewVideo) -> AppResult<Video>;

    /// Apply the supplied fields to an owned video
    async fn update_owned(&self, owner: i32, id: i32, changes: VideoChanges) -> AppResult<Video>;

    /// Delete an owned video
    async fn delete_owned(&self, owner: i32, id: i32) -> AppResult<()>;
}

/// Concrete implementation of VideoRepository
pub struct VideoStore {
    db: DatabaseConnection,
}

impl VideoStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoRepository for VideoStore {
    async fn list_by_owner(&self, owner: i32) -> AppResult<Vec<Video>> {
        let models = VideoEntity::find()
            .filter(video::Column::UserId.eq(owner))
            .order_by_asc(video::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Video::from).collect())
    }

    async fn create(&self, owner: i32, video: NewVideo) -> AppResult<Video> {
        let active_model = ActiveModel {
            user_id: Set(owner),
            name: Set(video.name),
            description: Set(video.description),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Video::from(model))
    }

    async fn update_owned(&self, owner: i32, id: i32, changes: VideoChanges) -> AppResult<Video> {
        // Read and write share one transaction; an early return rolls back on drop
        let txn = self.db.begin().await?;

        let mut current = VideoEntity::find_by_id(id)
            .filter(video::Column::UserId.eq(owner))
            .one(&txn)
            .await?
            .map(Video::from)
            .ok_or_not_found()?;

        if changes.is_empty() {
            txn.commit().await?;
            return Ok(current);
        }

        current.apply(changes);

        let active = ActiveModel {
            id: Unchanged(current.id),
            user_id: Unchanged(current.user_id),
            name: Set(current.name),
            description: Set(current.description),
        };
        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Video::from(model))
    }

    async fn delete_owned(&self, owner: i32, id: i32) -> AppResult<()> {
        let result = VideoEntity::delete_many()
            .filter(video::Column::Id.eq(id))
            .filter(video::Column::UserId.eq(owner))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
