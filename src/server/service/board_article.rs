use entity::sea_orm_active_enums::{ArticleCategory, ArticleStatus, MemberType, NotificationType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{board_article::ArticleRepository, like::LikeRepository, member::MemberRepository},
    error::{auth::AuthError, AppError},
    model::{
        article::{Article, ArticleDetail, CreateArticleParam},
        engagement::{Counter, CounterPolicy, LikeToggle, StatisticModifier, TargetKind},
        member::Member,
        notification::CreateNotificationParam,
        page::{Page, PageParam},
    },
    service::{
        engagement::EngagementService, notification::NotificationService, stats::StatsEditor,
    },
};

fn article_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Article {} not found", id))
}

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Publishes an article and bumps the author's `articles` counter.
    pub async fn create(
        &self,
        author: &Member,
        param: CreateArticleParam,
    ) -> Result<ArticleDetail, AppError> {
        if param.title.trim().is_empty() || param.content.trim().is_empty() {
            return Err(AppError::ValidationFailed(
                "Title and content are required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let article = ArticleRepository::new(&txn).create(author.id, param).await?;
        let author = StatsEditor::new(&txn, self.policy)
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                author.id,
                Counter::Articles,
                1,
            ))
            .await?
            .into_member();

        txn.commit().await?;

        tracing::info!(article_id = article.id, author_id = article.author_id, "article published");

        Ok(ArticleDetail {
            article,
            author,
            me_liked: false,
        })
    }

    /// Gets an active article, recording the viewer's first view.
    pub async fn get(&self, viewer: Option<&Member>, id: i32) -> Result<ArticleDetail, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|article| article.status == ArticleStatus::Active)
            .ok_or_else(|| article_not_found(id))?;

        let (article, me_liked) = match viewer {
            Some(viewer) => {
                let txn = self.db.begin().await?;
                let engagement = EngagementService::new(&txn, self.policy);

                let counted = engagement
                    .apply_view(viewer.id, TargetKind::Article, id)
                    .await?;
                let me_liked = engagement
                    .check_like_existence(viewer.id, TargetKind::Article, id)
                    .await?;
                let article = if counted {
                    ArticleRepository::new(&txn)
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| article_not_found(id))?
                } else {
                    article
                };

                txn.commit().await?;

                (article, me_liked)
            }
            None => (article, false),
        };

        let author = MemberRepository::new(self.db)
            .find_by_id(article.author_id)
            .await?;

        Ok(ArticleDetail {
            article,
            author,
            me_liked,
        })
    }

    /// Pages active articles, newest first.
    pub async fn list(
        &self,
        viewer: Option<&Member>,
        category: Option<ArticleCategory>,
        page: PageParam,
    ) -> Result<Page<ArticleDetail>, AppError> {
        let articles = ArticleRepository::new(self.db)
            .find_active(category, page)
            .await?;

        self.decorate(viewer.map(|m| m.id), articles).await
    }

    /// Attaches authors and the viewer's like flag to a page of articles.
    pub async fn decorate(
        &self,
        viewer_id: Option<i32>,
        articles: Page<Article>,
    ) -> Result<Page<ArticleDetail>, AppError> {
        let author_ids = articles.list.iter().map(|a| a.author_id).collect();
        let authors = MemberRepository::new(self.db).find_by_ids(author_ids).await?;
        let likes = LikeRepository::new(self.db);

        let mut list = Vec::with_capacity(articles.list.len());
        for article in articles.list {
            let me_liked = match viewer_id {
                Some(viewer_id) => {
                    likes
                        .exists(viewer_id, TargetKind::Article, article.id)
                        .await?
                }
                None => false,
            };
            let author = authors.get(&article.author_id).cloned();
            list.push(ArticleDetail {
                article,
                author,
                me_liked,
            });
        }

        Ok(Page {
            list,
            total: articles.total,
            page: articles.page,
            limit: articles.limit,
        })
    }

    /// Toggles the member's like on an active article and notifies the author of new likes.
    pub async fn like(&self, member: &Member, id: i32) -> Result<LikeToggle, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|article| article.status == ArticleStatus::Active)
            .ok_or_else(|| article_not_found(id))?;

        let txn = self.db.begin().await?;
        let toggle = EngagementService::new(&txn, self.policy)
            .apply_like(member.id, TargetKind::Article, id)
            .await?;
        txn.commit().await?;

        if toggle.liked() {
            NotificationService::new(self.db)
                .notify(CreateNotificationParam {
                    notification_type: NotificationType::Like,
                    kind: TargetKind::Article,
                    target_id: id,
                    author_id: member.id,
                    receiver_id: article.author_id,
                })
                .await;
        }

        Ok(toggle)
    }

    /// Removes an article and decrements the author's `articles` counter.
    ///
    /// Only the author or an admin may remove it.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article in its deleted state
    /// - `Err(AppError::NotFound)` - No active article with that id
    /// - `Err(AppError::AuthErr)` - Caller is neither author nor admin
    pub async fn remove(&self, member: &Member, id: i32) -> Result<Article, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|article| article.status == ArticleStatus::Active)
            .ok_or_else(|| article_not_found(id))?;

        if article.author_id != member.id && member.member_type != MemberType::Admin {
            return Err(AuthError::AccessDenied(
                member.id,
                format!("Attempted to remove article {} by {}", id, article.author_id),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        let repo = ArticleRepository::new(&txn);
        if !repo.mark_deleted(id).await? {
            return Err(article_not_found(id));
        }
        StatsEditor::new(&txn, self.policy)
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                article.author_id,
                Counter::Articles,
                -1,
            ))
            .await?;
        let removed = repo.find_by_id(id).await?.ok_or_else(|| article_not_found(id))?;

        txn.commit().await?;

        tracing::info!(article_id = id, removed_by = member.id, "article removed");

        Ok(removed)
    }
}
