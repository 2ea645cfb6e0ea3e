//! View records: created once per member and target, never deleted.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::engagement::TargetKind;

pub struct ViewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the first view of a target by a member.
    ///
    /// Inserts with `ON CONFLICT DO NOTHING` against the unique
    /// `(member_id, view_group, target_id)` index, so repeated and concurrent calls never create
    /// a second record.
    ///
    /// # Arguments
    /// - `member_id` - Viewing member
    /// - `kind` - Kind of the viewed target
    /// - `target_id` - Primary key of the viewed target
    ///
    /// # Returns
    /// - `Ok(true)` - First view, record inserted
    /// - `Ok(false)` - Member had already viewed the target
    /// - `Err(DbErr)` - Database error during insert
    pub async fn record(&self, member_id: i32, kind: TargetKind, target_id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::View::insert(entity::view::ActiveModel {
            view_group: ActiveValue::Set(kind.group()),
            target_id: ActiveValue::Set(target_id),
            member_id: ActiveValue::Set(member_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::view::Column::MemberId,
                entity::view::Column::ViewGroup,
                entity::view::Column::TargetId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
