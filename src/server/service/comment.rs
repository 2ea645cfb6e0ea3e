use entity::sea_orm_active_enums::{ArticleStatus, CarStatus, MemberType, NotificationType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        board_article::ArticleRepository, car::CarRepository, comment::CommentRepository,
        member::MemberRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        comment::{Comment, CreateCommentParam},
        engagement::{Counter, CounterPolicy, StatisticModifier, TargetKind},
        member::Member,
        notification::CreateNotificationParam,
        page::{Page, PageParam},
    },
    service::{notification::NotificationService, stats::StatsEditor},
};

/// Longest comment accepted, in characters.
const MAX_COMMENT_LENGTH: usize = 1000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Comments on a car, article or member and bumps the target's `comments` counter.
    ///
    /// The target's owner is notified afterwards.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created comment
    /// - `Err(AppError::ValidationFailed)` - Empty or oversized content
    /// - `Err(AppError::NotFound)` - Target missing or no longer visible
    pub async fn create(&self, author: &Member, param: CreateCommentParam) -> Result<Comment, AppError> {
        let length = param.content.trim().chars().count();
        if length == 0 || length > MAX_COMMENT_LENGTH {
            return Err(AppError::ValidationFailed(format!(
                "Comment must be between 1 and {} characters",
                MAX_COMMENT_LENGTH
            )));
        }

        let (kind, target_id) = (param.kind, param.target_id);
        let owner_id = self.target_owner(kind, target_id).await?;

        let txn = self.db.begin().await?;

        let comment = CommentRepository::new(&txn).create(author.id, param).await?;
        StatsEditor::new(&txn, self.policy)
            .adjust(StatisticModifier::new(kind, target_id, Counter::Comments, 1))
            .await?;

        txn.commit().await?;

        tracing::debug!(comment_id = comment.id, %kind, target_id, "comment created");

        NotificationService::new(self.db)
            .notify(CreateNotificationParam {
                notification_type: NotificationType::Comment,
                kind,
                target_id,
                author_id: author.id,
                receiver_id: owner_id,
            })
            .await;

        Ok(comment)
    }

    /// Removes a comment and decrements the target's `comments` counter.
    ///
    /// Only the comment's author or an admin may remove it.
    pub async fn remove(&self, member: &Member, id: i32) -> Result<Comment, AppError> {
        let comment = CommentRepository::new(self.db)
            .find_active(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))?;

        if comment.author_id != member.id && member.member_type != MemberType::Admin {
            return Err(AuthError::AccessDenied(
                member.id,
                format!("Attempted to remove comment {} by {}", id, comment.author_id),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        if !CommentRepository::new(&txn).mark_deleted(id).await? {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }
        StatsEditor::new(&txn, self.policy)
            .adjust(StatisticModifier::new(
                comment.kind,
                comment.target_id,
                Counter::Comments,
                -1,
            ))
            .await?;

        txn.commit().await?;

        tracing::debug!(comment_id = id, removed_by = member.id, "comment removed");

        Ok(comment)
    }

    /// Pages active comments on a target, oldest first.
    pub async fn list(
        &self,
        kind: TargetKind,
        target_id: i32,
        page: PageParam,
    ) -> Result<Page<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .find_by_target(kind, target_id, page)
            .await?)
    }

    /// Member who receives notifications about a visible target.
    async fn target_owner(&self, kind: TargetKind, target_id: i32) -> Result<i32, AppError> {
        let owner = match kind {
            TargetKind::Car => CarRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .filter(|car| car.status != CarStatus::Unavailable)
                .map(|car| car.owner_id),
            TargetKind::Article => ArticleRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .filter(|article| article.status == ArticleStatus::Active)
                .map(|article| article.author_id),
            TargetKind::Member => MemberRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .filter(Member::is_active)
                .map(|member| member.id),
        };

        owner.ok_or_else(|| AppError::NotFound(format!("No {} with id {}", kind, target_id)))
    }
}
