//! The counter chokepoint: every views/likes/comments/rank/cars/articles/followers/followings
//! change goes through [`StatsEditor::adjust`].

use sea_orm::ConnectionTrait;

use crate::server::{
    data::stats::StatsRepository,
    error::{internal::InternalError, AppError},
    model::engagement::{CounterPolicy, StatisticModifier, TargetSnapshot},
};

pub struct StatsEditor<'a, C: ConnectionTrait> {
    db: &'a C,
    policy: CounterPolicy,
}

impl<'a, C: ConnectionTrait> StatsEditor<'a, C> {
    /// Creates a new StatsEditor.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction the update runs on
    /// - `policy` - Treatment of decrements that would go below zero
    pub fn new(db: &'a C, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Applies a signed delta to one counter of one target and reads the target back.
    ///
    /// The increment happens inside a single UPDATE statement scoped by primary key, so
    /// concurrent adjustments of the same counter commute.
    ///
    /// # Arguments
    /// - `modifier` - Target kind and id, counter and signed delta
    ///
    /// # Returns
    /// - `Ok(TargetSnapshot)` - Target state after the update
    /// - `Err(AppError::ValidationFailed)` - The target kind does not carry that counter
    /// - `Err(AppError::NotFound)` - No target with that id
    /// - `Err(AppError::InternalError)` - Target vanished between update and read-back
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn adjust(&self, modifier: StatisticModifier) -> Result<TargetSnapshot, AppError> {
        let StatisticModifier {
            kind,
            target_id,
            counter,
            delta,
        } = modifier;

        if !counter.is_tracked_on(kind) {
            return Err(AppError::ValidationFailed(format!(
                "A {} has no {} counter",
                kind, counter
            )));
        }

        let repo = StatsRepository::new(self.db);

        if !repo.apply(modifier, self.policy).await? {
            return Err(AppError::NotFound(format!("No {} with id {}", kind, target_id)));
        }

        tracing::debug!(%kind, target_id, %counter, delta, "counter adjusted");

        repo.snapshot(kind, target_id)
            .await?
            .ok_or_else(|| InternalError::SnapshotMissing { kind, id: target_id }.into())
    }
}
