//! Counter column mapping and atomic in-place counter updates.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::{
    article::Article,
    car::Car,
    engagement::{Counter, CounterPolicy, StatisticModifier, TargetKind, TargetSnapshot},
    member::Member,
};

/// Column holding `counter` on the car table.
pub fn car_column(counter: Counter) -> Option<entity::car::Column> {
    use entity::car::Column;

    match counter {
        Counter::Views => Some(Column::CarViews),
        Counter::Likes => Some(Column::CarLikes),
        Counter::Comments => Some(Column::CarComments),
        Counter::Rank => Some(Column::CarRank),
        Counter::Cars | Counter::Articles | Counter::Followers | Counter::Followings => None,
    }
}

/// Column holding `counter` on the board article table.
pub fn article_column(counter: Counter) -> Option<entity::board_article::Column> {
    use entity::board_article::Column;

    match counter {
        Counter::Views => Some(Column::ArticleViews),
        Counter::Likes => Some(Column::ArticleLikes),
        Counter::Comments => Some(Column::ArticleComments),
        Counter::Rank => Some(Column::ArticleRank),
        Counter::Cars | Counter::Articles | Counter::Followers | Counter::Followings => None,
    }
}

/// Column holding `counter` on the member table.
pub fn member_column(counter: Counter) -> Option<entity::member::Column> {
    use entity::member::Column;

    Some(match counter {
        Counter::Views => Column::MemberViews,
        Counter::Likes => Column::MemberLikes,
        Counter::Comments => Column::MemberComments,
        Counter::Rank => Column::MemberRank,
        Counter::Cars => Column::MemberCars,
        Counter::Articles => Column::MemberArticles,
        Counter::Followers => Column::MemberFollowers,
        Counter::Followings => Column::MemberFollowings,
    })
}

/// `column + delta`, clamped at zero under `FloorAtZero`.
///
/// Evaluated by the database inside the UPDATE, so concurrent deltas commute.
fn increment<Col: ColumnTrait>(column: Col, delta: i32, policy: CounterPolicy) -> Expr {
    let next = Expr::col(column).add(delta);

    match policy {
        CounterPolicy::AllowNegative => next,
        CounterPolicy::FloorAtZero => Expr::case(Expr::col(column).add(delta).lt(0), 0)
            .finally(next)
            .into(),
    }
}

pub struct StatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applies a statistic modifier with a single `UPDATE ... WHERE id = ?`.
    ///
    /// # Arguments
    /// - `modifier` - Target, counter and signed delta
    /// - `policy` - Treatment of results below zero
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr::Custom)` - Counter has no column on the target table
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply(&self, modifier: StatisticModifier, policy: CounterPolicy) -> Result<bool, DbErr> {
        let StatisticModifier {
            kind,
            target_id,
            counter,
            delta,
        } = modifier;
        let untracked = || DbErr::Custom(format!("No {} column on {}", counter, kind));

        let result = match kind {
            TargetKind::Car => {
                let column = car_column(counter).ok_or_else(untracked)?;
                entity::prelude::Car::update_many()
                    .col_expr(column, increment(column, delta, policy))
                    .filter(entity::car::Column::Id.eq(target_id))
                    .exec(self.db)
                    .await?
            }
            TargetKind::Article => {
                let column = article_column(counter).ok_or_else(untracked)?;
                entity::prelude::BoardArticle::update_many()
                    .col_expr(column, increment(column, delta, policy))
                    .filter(entity::board_article::Column::Id.eq(target_id))
                    .exec(self.db)
                    .await?
            }
            TargetKind::Member => {
                let column = member_column(counter).ok_or_else(untracked)?;
                entity::prelude::Member::update_many()
                    .col_expr(column, increment(column, delta, policy))
                    .filter(entity::member::Column::Id.eq(target_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Reads the current state of a target.
    ///
    /// # Returns
    /// - `Ok(Some(TargetSnapshot))` - Target found
    /// - `Ok(None)` - No target with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn snapshot(&self, kind: TargetKind, target_id: i32) -> Result<Option<TargetSnapshot>, DbErr> {
        let snapshot = match kind {
            TargetKind::Car => entity::prelude::Car::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|car| TargetSnapshot::Car(Car::from_entity(car))),
            TargetKind::Article => entity::prelude::BoardArticle::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|article| TargetSnapshot::Article(Article::from_entity(article))),
            TargetKind::Member => entity::prelude::Member::find_by_id(target_id)
                .one(self.db)
                .await?
                .map(|member| TargetSnapshot::Member(Member::from_entity(member))),
        };

        Ok(snapshot)
    }
}
