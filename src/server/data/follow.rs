//! Follow subscriptions between members.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::follow::Follow;

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a follow record.
    ///
    /// # Returns
    /// - `Ok(Follow)` - Subscription created
    /// - `Err(DbErr)` - Database error, including a unique violation for an existing pair
    pub async fn create(&self, follower_id: i32, following_id: i32) -> Result<Follow, DbErr> {
        let now = Utc::now();
        let entity = entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Follow::from_entity(entity))
    }

    /// Deletes a follow record.
    ///
    /// # Returns
    /// - `Ok(true)` - Subscription removed
    /// - `Ok(false)` - No such subscription
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether `follower_id` follows `following_id` ("meFollowed").
    pub async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
