//! Like records: the toggle half of the engagement subsystem.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::engagement::TargetKind;

/// Repository for `(member, group, target)` like records.
pub struct LikeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LikeRepository<'a, C> {
    /// Creates a new LikeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds the like if absent, removes it if present.
    ///
    /// Attempts the delete first so that the presence check and the mutation are a single
    /// statement. Only when nothing was deleted is a record inserted; a concurrent insert of the
    /// same key then fails on the unique index instead of producing a second row.
    ///
    /// # Arguments
    /// - `member_id` - Member performing the like
    /// - `kind` - Kind of the liked target
    /// - `target_id` - Primary key of the liked target
    ///
    /// # Returns
    /// - `Ok(1)` - Like record created
    /// - `Ok(-1)` - Existing like record deleted
    /// - `Err(DbErr)` - Database error, including a unique violation from a racing insert
    pub async fn toggle(&self, member_id: i32, kind: TargetKind, target_id: i32) -> Result<i32, DbErr> {
        let deleted = entity::prelude::Like::delete_many()
            .filter(entity::like::Column::MemberId.eq(member_id))
            .filter(entity::like::Column::LikeGroup.eq(kind.group()))
            .filter(entity::like::Column::TargetId.eq(target_id))
            .exec(self.db)
            .await?;

        if deleted.rows_affected > 0 {
            return Ok(-1);
        }

        let now = Utc::now();
        entity::like::ActiveModel {
            like_group: ActiveValue::Set(kind.group()),
            target_id: ActiveValue::Set(target_id),
            member_id: ActiveValue::Set(member_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(1)
    }

    /// Checks whether the member currently likes the target ("meLiked").
    ///
    /// # Returns
    /// - `Ok(true)` - A like record exists
    /// - `Ok(false)` - No like record
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, member_id: i32, kind: TargetKind, target_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Like::find()
            .filter(entity::like::Column::MemberId.eq(member_id))
            .filter(entity::like::Column::LikeGroup.eq(kind.group()))
            .filter(entity::like::Column::TargetId.eq(target_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
