//! Comment repository.

use chrono::Utc;
use entity::sea_orm_active_enums::CommentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParam},
    engagement::TargetKind,
    page::{Page, PageParam},
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, author_id: i32, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            comment_status: ActiveValue::Set(CommentStatus::Active),
            comment_group: ActiveValue::Set(param.kind.group()),
            comment_content: ActiveValue::Set(param.content),
            target_id: ActiveValue::Set(param.target_id),
            member_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds an active comment.
    pub async fn find_active(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::CommentStatus.eq(CommentStatus::Active))
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Moves an active comment to `Delete`.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment removed
    /// - `Ok(false)` - No active comment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_deleted(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::CommentStatus,
                sea_orm::sea_query::Expr::value(CommentStatus::Delete),
            )
            .col_expr(
                entity::comment::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::CommentStatus.eq(CommentStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Pages active comments on one target, oldest first.
    pub async fn find_by_target(
        &self,
        kind: TargetKind,
        target_id: i32,
        page: PageParam,
    ) -> Result<Page<Comment>, DbErr> {
        let paginator = entity::prelude::Comment::find()
            .filter(entity::comment::Column::CommentGroup.eq(kind.group()))
            .filter(entity::comment::Column::TargetId.eq(target_id))
            .filter(entity::comment::Column::CommentStatus.eq(CommentStatus::Active))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let comments = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            comments.into_iter().map(Comment::from_entity).collect(),
            total,
            page,
        ))
    }
}
