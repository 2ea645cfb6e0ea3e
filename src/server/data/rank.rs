//! Rank rollback and per-entity rank writes for the rank recomputation job.

use entity::sea_orm_active_enums::{ArticleStatus, CarStatus, MemberStatus, MemberType};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};

use crate::server::model::engagement::TargetKind;

/// Counters a rank is computed from.
#[derive(Debug, Clone, FromQueryResult)]
pub struct RankInput {
    pub id: i32,
    pub likes: i32,
    pub views: i32,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct ActorRankInput {
    pub id: i32,
    pub cars: i32,
    pub articles: i32,
    pub likes: i32,
    pub views: i32,
}

pub struct RankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RankRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets `rank = 0` on available cars and active articles.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows reset across both tables
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_targets(&self) -> Result<u64, DbErr> {
        let cars = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::CarRank, sea_orm::sea_query::Expr::value(0))
            .filter(entity::car::Column::CarStatus.eq(CarStatus::Available))
            .exec(self.db)
            .await?;

        let articles = entity::prelude::BoardArticle::update_many()
            .col_expr(
                entity::board_article::Column::ArticleRank,
                sea_orm::sea_query::Expr::value(0),
            )
            .filter(entity::board_article::Column::ArticleStatus.eq(ArticleStatus::Active))
            .exec(self.db)
            .await?;

        Ok(cars.rows_affected + articles.rows_affected)
    }

    /// Sets `rank = 0` on active agents.
    pub async fn reset_actors(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::MemberRank,
                sea_orm::sea_query::Expr::value(0),
            )
            .filter(entity::member::Column::MemberType.eq(MemberType::Agent))
            .filter(entity::member::Column::MemberStatus.eq(MemberStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Available cars whose rank is still zero.
    pub async fn unranked_cars(&self) -> Result<Vec<RankInput>, DbErr> {
        entity::prelude::Car::find()
            .select_only()
            .column_as(entity::car::Column::Id, "id")
            .column_as(entity::car::Column::CarLikes, "likes")
            .column_as(entity::car::Column::CarViews, "views")
            .filter(entity::car::Column::CarStatus.eq(CarStatus::Available))
            .filter(entity::car::Column::CarRank.eq(0))
            .into_model::<RankInput>()
            .all(self.db)
            .await
    }

    /// Active articles whose rank is still zero.
    pub async fn unranked_articles(&self) -> Result<Vec<RankInput>, DbErr> {
        entity::prelude::BoardArticle::find()
            .select_only()
            .column_as(entity::board_article::Column::Id, "id")
            .column_as(entity::board_article::Column::ArticleLikes, "likes")
            .column_as(entity::board_article::Column::ArticleViews, "views")
            .filter(entity::board_article::Column::ArticleStatus.eq(ArticleStatus::Active))
            .filter(entity::board_article::Column::ArticleRank.eq(0))
            .into_model::<RankInput>()
            .all(self.db)
            .await
    }

    /// Active agents whose rank is still zero.
    pub async fn unranked_agents(&self) -> Result<Vec<ActorRankInput>, DbErr> {
        entity::prelude::Member::find()
            .select_only()
            .column_as(entity::member::Column::Id, "id")
            .column_as(entity::member::Column::MemberCars, "cars")
            .column_as(entity::member::Column::MemberArticles, "articles")
            .column_as(entity::member::Column::MemberLikes, "likes")
            .column_as(entity::member::Column::MemberViews, "views")
            .filter(entity::member::Column::MemberType.eq(MemberType::Agent))
            .filter(entity::member::Column::MemberStatus.eq(MemberStatus::Active))
            .filter(entity::member::Column::MemberRank.eq(0))
            .into_model::<ActorRankInput>()
            .all(self.db)
            .await
    }

    /// Writes `rank` on one target if its rank is still zero.
    ///
    /// # Returns
    /// - `Ok(true)` - Rank written
    /// - `Ok(false)` - Target gone or already ranked since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn write_rank(&self, kind: TargetKind, id: i32, rank: i32) -> Result<bool, DbErr> {
        let result = match kind {
            TargetKind::Car => {
                entity::prelude::Car::update_many()
                    .col_expr(entity::car::Column::CarRank, sea_orm::sea_query::Expr::value(rank))
                    .filter(entity::car::Column::Id.eq(id))
                    .filter(entity::car::Column::CarRank.eq(0))
                    .exec(self.db)
                    .await?
            }
            TargetKind::Article => {
                entity::prelude::BoardArticle::update_many()
                    .col_expr(
                        entity::board_article::Column::ArticleRank,
                        sea_orm::sea_query::Expr::value(rank),
                    )
                    .filter(entity::board_article::Column::Id.eq(id))
                    .filter(entity::board_article::Column::ArticleRank.eq(0))
                    .exec(self.db)
                    .await?
            }
            TargetKind::Member => {
                entity::prelude::Member::update_many()
                    .col_expr(
                        entity::member::Column::MemberRank,
                        sea_orm::sea_query::Expr::value(rank),
                    )
                    .filter(entity::member::Column::Id.eq(id))
                    .filter(entity::member::Column::MemberRank.eq(0))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }
}
