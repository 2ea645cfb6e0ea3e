//! Article factory for creating test board articles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{ArticleCategory, ArticleStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test articles with customizable status and counters.
pub struct ArticleFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    member_id: i32,
    article_status: ArticleStatus,
    article_title: String,
    views: i32,
    likes: i32,
    rank: i32,
}

impl<'a, C: ConnectionTrait> ArticleFactory<'a, C> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - article_status: `Active`
    /// - article_title: `"Article {id}"`
    /// - every counter: `0`
    pub fn new(db: &'a C, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            article_status: ArticleStatus::Active,
            article_title: format!("Article {}", id),
            views: 0,
            likes: 0,
            rank: 0,
        }
    }

    pub fn status(mut self, article_status: ArticleStatus) -> Self {
        self.article_status = article_status;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.likes = likes;
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::board_article::Model, DbErr> {
        let now = Utc::now();
        entity::board_article::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            article_category: ActiveValue::Set(ArticleCategory::Free),
            article_status: ActiveValue::Set(self.article_status),
            article_title: ActiveValue::Set(self.article_title),
            article_content: ActiveValue::Set("Test article content".to_string()),
            article_views: ActiveValue::Set(self.views),
            article_likes: ActiveValue::Set(self.likes),
            article_comments: ActiveValue::Set(0),
            article_rank: ActiveValue::Set(self.rank),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active article written by `member_id`.
pub async fn create_article<C: ConnectionTrait>(
    db: &C,
    member_id: i32,
) -> Result<entity::board_article::Model, DbErr> {
    ArticleFactory::new(db, member_id).build().await
}
