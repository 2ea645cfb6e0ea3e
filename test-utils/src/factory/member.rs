//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{MemberStatus, MemberType};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let agent = MemberFactory::new(&db)
///     .member_type(MemberType::Agent)
///     .cars(2)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    member_type: MemberType,
    member_status: MemberStatus,
    member_nick: String,
    cars: i32,
    articles: i32,
    views: i32,
    likes: i32,
    rank: i32,
}

impl<'a, C: ConnectionTrait> MemberFactory<'a, C> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - member_type: `User`
    /// - member_status: `Active`
    /// - member_nick: `"member_{id}"` where id is auto-incremented
    /// - every counter: `0`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            member_type: MemberType::User,
            member_status: MemberStatus::Active,
            member_nick: format!("member_{}", id),
            cars: 0,
            articles: 0,
            views: 0,
            likes: 0,
            rank: 0,
        }
    }

    pub fn member_type(mut self, member_type: MemberType) -> Self {
        self.member_type = member_type;
        self
    }

    pub fn member_status(mut self, member_status: MemberStatus) -> Self {
        self.member_status = member_status;
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.member_nick = nick.into();
        self
    }

    pub fn cars(mut self, cars: i32) -> Self {
        self.cars = cars;
        self
    }

    pub fn articles(mut self, articles: i32) -> Self {
        self.articles = articles;
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

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            member_type: ActiveValue::Set(self.member_type),
            member_status: ActiveValue::Set(self.member_status),
            member_nick: ActiveValue::Set(self.member_nick),
            member_full_name: ActiveValue::Set(None),
            member_image: ActiveValue::Set(None),
            member_cars: ActiveValue::Set(self.cars),
            member_articles: ActiveValue::Set(self.articles),
            member_followers: ActiveValue::Set(0),
            member_followings: ActiveValue::Set(0),
            member_views: ActiveValue::Set(self.views),
            member_likes: ActiveValue::Set(self.likes),
            member_comments: ActiveValue::Set(0),
            member_rank: ActiveValue::Set(self.rank),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active regular member with default values.
pub async fn create_member<C: ConnectionTrait>(db: &C) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates an active agent with default values.
pub async fn create_agent<C: ConnectionTrait>(db: &C) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .build()
        .await
}
