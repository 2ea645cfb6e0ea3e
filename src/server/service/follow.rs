//! Follow subscriptions and their follower/following counters.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{follow::FollowRepository, member::MemberRepository, projection::ProjectionRepository},
    error::AppError,
    model::{
        engagement::{Counter, CounterPolicy, StatisticModifier, TargetKind},
        follow::Follow,
        member::{Member, MemberDetail},
        page::{Page, PageParam},
    },
    service::{member::MemberService, stats::StatsEditor},
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Subscribes `follower_id` to `following_id`.
    ///
    /// Increments the follower's `followings` and the followed member's `followers` in the
    /// same transaction as the follow record.
    ///
    /// # Returns
    /// - `Ok(Follow)` - Subscription created
    /// - `Err(AppError::ValidationFailed)` - Attempt to follow oneself
    /// - `Err(AppError::NotFound)` - Followed member missing or inactive
    /// - `Err(AppError::CreateConflict)` - Already subscribed
    pub async fn subscribe(&self, follower_id: i32, following_id: i32) -> Result<Follow, AppError> {
        if follower_id == following_id {
            return Err(AppError::ValidationFailed(
                "Self subscription is denied".to_string(),
            ));
        }

        MemberRepository::new(self.db)
            .find_by_id(following_id)
            .await?
            .filter(Member::is_active)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", following_id)))?;

        let txn = self.db.begin().await?;

        let follow = FollowRepository::new(&txn)
            .create(follower_id, following_id)
            .await
            .map_err(|err| AppError::from_insert(err, "Already subscribed"))?;
        self.adjust_counters(&txn, follower_id, following_id, 1)
            .await?;

        txn.commit().await?;

        tracing::debug!(follower_id, following_id, "subscribed");

        Ok(follow)
    }

    /// Removes the subscription of `follower_id` to `following_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed, both counters decremented
    /// - `Err(AppError::NotFound)` - No such subscription
    pub async fn unsubscribe(&self, follower_id: i32, following_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !FollowRepository::new(&txn)
            .delete(follower_id, following_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Member {} does not follow {}",
                follower_id, following_id
            )));
        }
        self.adjust_counters(&txn, follower_id, following_id, -1)
            .await?;

        txn.commit().await?;

        tracing::debug!(follower_id, following_id, "unsubscribed");

        Ok(())
    }

    /// Whether `follower_id` follows `following_id` ("meFollowed").
    pub async fn check_subscription(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<bool, AppError> {
        Ok(FollowRepository::new(self.db)
            .exists(follower_id, following_id)
            .await?)
    }

    /// Pages the members following `member_id`.
    pub async fn followers(
        &self,
        viewer: Option<&Member>,
        member_id: i32,
        page: PageParam,
    ) -> Result<Page<MemberDetail>, AppError> {
        let (members, total) = ProjectionRepository::new(self.db)
            .followers(member_id, page)
            .await?;

        self.decorate(viewer, members, total, page).await
    }

    /// Pages the members `member_id` follows.
    pub async fn followings(
        &self,
        viewer: Option<&Member>,
        member_id: i32,
        page: PageParam,
    ) -> Result<Page<MemberDetail>, AppError> {
        let (members, total) = ProjectionRepository::new(self.db)
            .followings(member_id, page)
            .await?;

        self.decorate(viewer, members, total, page).await
    }

    async fn decorate(
        &self,
        viewer: Option<&Member>,
        members: Vec<entity::member::Model>,
        total: u64,
        page: PageParam,
    ) -> Result<Page<MemberDetail>, AppError> {
        let members = Page::new(
            members.into_iter().map(Member::from_entity).collect(),
            total,
            page,
        );

        MemberService::new(self.db, self.policy)
            .decorate(viewer.map(|m| m.id), members)
            .await
    }

    async fn adjust_counters<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        follower_id: i32,
        following_id: i32,
        delta: i32,
    ) -> Result<(), AppError> {
        let editor = StatsEditor::new(db, self.policy);

        editor
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                follower_id,
                Counter::Followings,
                delta,
            ))
            .await?;
        editor
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                following_id,
                Counter::Followers,
                delta,
            ))
            .await?;

        Ok(())
    }
}
