//! Like toggling and view recording, plus their counter bookkeeping.
//!
//! The plain operations (`toggle_like`, `record_view`, `check_like_existence`) only touch the
//! engagement tables. The `apply_*` operations pair them with the matching
//! [`StatsEditor`] adjustment and are meant to run inside the caller's transaction.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{like::LikeRepository, view::ViewRepository},
    error::AppError,
    model::engagement::{Counter, CounterPolicy, LikeToggle, StatisticModifier, TargetKind},
    service::stats::StatsEditor,
};

pub struct EngagementService<'a, C: ConnectionTrait> {
    db: &'a C,
    policy: CounterPolicy,
}

impl<'a, C: ConnectionTrait> EngagementService<'a, C> {
    pub fn new(db: &'a C, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Adds the like if absent, removes it if present.
    ///
    /// # Returns
    /// - `Ok(1)` - Like added
    /// - `Ok(-1)` - Like removed
    /// - `Err(AppError::CreateConflict)` - A concurrent toggle inserted the same like first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle_like(
        &self,
        member_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<i32, AppError> {
        let delta = LikeRepository::new(self.db)
            .toggle(member_id, kind, target_id)
            .await
            .map_err(|err| AppError::from_insert(err, "Like was changed concurrently"))?;

        tracing::debug!(member_id, %kind, target_id, delta, "like toggled");

        Ok(delta)
    }

    /// Whether the member currently likes the target ("meLiked").
    pub async fn check_like_existence(
        &self,
        member_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<bool, AppError> {
        Ok(LikeRepository::new(self.db)
            .exists(member_id, kind, target_id)
            .await?)
    }

    /// Records the member's first view of the target.
    ///
    /// # Returns
    /// - `Ok(true)` - First view, the caller should count it
    /// - `Ok(false)` - Already viewed before
    pub async fn record_view(
        &self,
        member_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<bool, AppError> {
        Ok(ViewRepository::new(self.db)
            .record(member_id, kind, target_id)
            .await?)
    }

    /// Toggles the like and moves the target's `likes` counter by the resulting delta.
    ///
    /// # Returns
    /// - `Ok(LikeToggle)` - Delta and the target after the counter update
    /// - `Err(AppError::NotFound)` - Target disappeared
    /// - `Err(AppError::CreateConflict)` - Concurrent toggle won the insert
    pub async fn apply_like(
        &self,
        member_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<LikeToggle, AppError> {
        let delta = self.toggle_like(member_id, kind, target_id).await?;

        let snapshot = StatsEditor::new(self.db, self.policy)
            .adjust(StatisticModifier::new(kind, target_id, Counter::Likes, delta))
            .await?;

        Ok(LikeToggle { delta, snapshot })
    }

    /// Records the view and increments the target's `views` counter on a first view.
    ///
    /// # Returns
    /// - `Ok(true)` - First view, counter incremented
    /// - `Ok(false)` - Repeat view, nothing changed
    pub async fn apply_view(
        &self,
        member_id: i32,
        kind: TargetKind,
        target_id: i32,
    ) -> Result<bool, AppError> {
        let is_new = self.record_view(member_id, kind, target_id).await?;

        if is_new {
            StatsEditor::new(self.db, self.policy)
                .adjust(StatisticModifier::new(kind, target_id, Counter::Views, 1))
                .await?;
        }

        Ok(is_new)
    }
}
