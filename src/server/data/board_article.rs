//! Board article repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{ArticleCategory, ArticleStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    article::{Article, CreateArticleParam},
    page::{Page, PageParam},
};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, author_id: i32, param: CreateArticleParam) -> Result<Article, DbErr> {
        let now = Utc::now();
        let entity = entity::board_article::ActiveModel {
            member_id: ActiveValue::Set(author_id),
            article_category: ActiveValue::Set(param.category),
            article_status: ActiveValue::Set(ArticleStatus::Active),
            article_title: ActiveValue::Set(param.title),
            article_content: ActiveValue::Set(param.content),
            article_views: ActiveValue::Set(0),
            article_likes: ActiveValue::Set(0),
            article_comments: ActiveValue::Set(0),
            article_rank: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    /// Finds an article regardless of status.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::BoardArticle::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Pages active articles, newest first, optionally restricted to one category.
    pub async fn find_active(
        &self,
        category: Option<ArticleCategory>,
        page: PageParam,
    ) -> Result<Page<Article>, DbErr> {
        let mut query = entity::prelude::BoardArticle::find()
            .filter(entity::board_article::Column::ArticleStatus.eq(ArticleStatus::Active));

        if let Some(category) = category {
            query = query.filter(entity::board_article::Column::ArticleCategory.eq(category));
        }

        let paginator = query
            .order_by_desc(entity::board_article::Column::CreatedAt)
            .order_by_asc(entity::board_article::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let articles = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            articles.into_iter().map(Article::from_entity).collect(),
            total,
            page,
        ))
    }

    /// Moves an active article to `Delete`.
    ///
    /// # Returns
    /// - `Ok(true)` - Article was active and is now deleted
    /// - `Ok(false)` - No active article with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_deleted(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BoardArticle::update_many()
            .col_expr(
                entity::board_article::Column::ArticleStatus,
                sea_orm::sea_query::Expr::value(ArticleStatus::Delete),
            )
            .col_expr(
                entity::board_article::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::board_article::Column::Id.eq(id))
            .filter(entity::board_article::Column::ArticleStatus.eq(ArticleStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
