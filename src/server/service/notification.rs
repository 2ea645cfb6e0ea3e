use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{CreateNotificationParam, Notification},
        page::{Page, PageParam},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a notification for the target's owner.
    ///
    /// Best effort: runs after the triggering change has been committed, and a failure is
    /// logged instead of being returned. Members are never notified about their own actions.
    pub async fn notify(&self, param: CreateNotificationParam) {
        if param.author_id == param.receiver_id {
            return;
        }

        let (author_id, receiver_id) = (param.author_id, param.receiver_id);
        if let Err(err) = NotificationRepository::new(self.db).create(param).await {
            tracing::warn!(author_id, receiver_id, "Failed to store notification: {}", err);
        }
    }

    /// Pages the member's notifications, newest first.
    pub async fn list(
        &self,
        receiver_id: i32,
        page: PageParam,
    ) -> Result<Page<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .find_by_receiver(receiver_id, page)
            .await?)
    }

    /// Marks one notification, or all of them when `id` is `None`, as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed from unread to read
    pub async fn mark_read(&self, receiver_id: i32, id: Option<i32>) -> Result<u64, AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_read(receiver_id, id)
            .await?;

        tracing::debug!(receiver_id, ?id, updated, "notifications marked read");

        Ok(updated)
    }
}
