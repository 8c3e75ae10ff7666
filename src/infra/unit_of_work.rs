//! Unit of Work - single access point to the repositories.
//!
//! All repositories share one connection pool. Connections are checked out
//! per statement or per transaction and returned when the statement finishes
//! or the transaction is committed or dropped, so nothing outlives a request.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{UserRepository, UserStore, VideoRepository, VideoStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get video repository
    fn videos(&self) -> Arc<dyn VideoRepository>;
}

/// Concrete implementation of UnitOfWork over a SeaORM connection pool
pub struct Persistence {
    user_repo: Arc<UserStore>,
    video_repo: Arc<VideoStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            video_repo: Arc::new(VideoStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn videos(&self) -> Arc<dyn VideoRepository> {
        self.video_repo.clone()
    }
}
