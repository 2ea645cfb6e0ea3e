//! Joins like/view records back to their targets for "my favorites" and "recently viewed".

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::model::{
    engagement::{EngagementSource, TargetKind},
    page::PageParam,
};

pub struct ProjectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Cars the member liked or viewed.
    ///
    /// # Returns
    /// - `Ok((cars, total))` - Requested page and the total across pages
    /// - `Err(DbErr)` - Database error during query
    pub async fn cars(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<(Vec<entity::car::Model>, u64), DbErr> {
        self.targets::<entity::prelude::Car>(
            source,
            TargetKind::Car,
            member_id,
            entity::car::Column::Id,
            page,
        )
        .await
    }

    /// Articles the member liked or viewed.
    pub async fn articles(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<(Vec<entity::board_article::Model>, u64), DbErr> {
        self.targets::<entity::prelude::BoardArticle>(
            source,
            TargetKind::Article,
            member_id,
            entity::board_article::Column::Id,
            page,
        )
        .await
    }

    /// Members the member liked or viewed.
    pub async fn members(
        &self,
        source: EngagementSource,
        member_id: i32,
        page: PageParam,
    ) -> Result<(Vec<entity::member::Model>, u64), DbErr> {
        self.targets::<entity::prelude::Member>(
            source,
            TargetKind::Member,
            member_id,
            entity::member::Column::Id,
            page,
        )
        .await
    }

    /// Pages targets of `E` joined through the engagement table.
    ///
    /// Ordered by engagement `updated_at` descending, ties broken by engagement id ascending.
    async fn targets<E>(
        &self,
        source: EngagementSource,
        kind: TargetKind,
        member_id: i32,
        id_column: E::Column,
        page: PageParam,
    ) -> Result<(Vec<E::Model>, u64), DbErr>
    where
        E: EntityTrait,
        E::Model: Sync + 'a,
    {
        let query: Select<E> = match source {
            EngagementSource::Like => E::find()
                .join_rev(
                    JoinType::InnerJoin,
                    entity::prelude::Like::belongs_to(E::default())
                        .from(entity::like::Column::TargetId)
                        .to(id_column)
                        .into(),
                )
                .filter(entity::like::Column::MemberId.eq(member_id))
                .filter(entity::like::Column::LikeGroup.eq(kind.group()))
                .order_by_desc(entity::like::Column::UpdatedAt)
                .order_by_asc(entity::like::Column::Id),
            EngagementSource::View => E::find()
                .join_rev(
                    JoinType::InnerJoin,
                    entity::prelude::View::belongs_to(E::default())
                        .from(entity::view::Column::TargetId)
                        .to(id_column)
                        .into(),
                )
                .filter(entity::view::Column::MemberId.eq(member_id))
                .filter(entity::view::Column::ViewGroup.eq(kind.group()))
                .order_by_desc(entity::view::Column::UpdatedAt)
                .order_by_asc(entity::view::Column::Id),
        };

        let paginator = query.paginate(self.db, page.limit);
        let total = paginator.num_items().await?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let list = paginator.fetch_page(page.index()).await?;

        Ok((list, total))
    }

    /// Members following `member_id`, most recent follow first.
    pub async fn followers(
        &self,
        member_id: i32,
        page: PageParam,
    ) -> Result<(Vec<entity::member::Model>, u64), DbErr> {
        let paginator = entity::prelude::Member::find()
            .join_rev(JoinType::InnerJoin, entity::follow::Relation::Follower.def())
            .filter(entity::follow::Column::FollowingId.eq(member_id))
            .order_by_desc(entity::follow::Column::CreatedAt)
            .order_by_asc(entity::follow::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let list = paginator.fetch_page(page.index()).await?;

        Ok((list, total))
    }

    /// Members `member_id` follows, most recent follow first.
    pub async fn followings(
        &self,
        member_id: i32,
        page: PageParam,
    ) -> Result<(Vec<entity::member::Model>, u64), DbErr> {
        let paginator = entity::prelude::Member::find()
            .join_rev(JoinType::InnerJoin, entity::follow::Relation::Following.def())
            .filter(entity::follow::Column::FollowerId.eq(member_id))
            .order_by_desc(entity::follow::Column::CreatedAt)
            .order_by_asc(entity::follow::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let list = paginator.fetch_page(page.index()).await?;

        Ok((list, total))
    }
}
