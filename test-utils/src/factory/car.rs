//! Car factory for creating test car listings.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::CarStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test cars with customizable status and counters.
pub struct CarFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    member_id: i32,
    car_status: CarStatus,
    brand: String,
    model: String,
    price: i64,
    discount_percent: i32,
    views: i32,
    likes: i32,
    comments: i32,
    rank: i32,
}

impl<'a, C: ConnectionTrait> CarFactory<'a, C> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - car_status: `Available`
    /// - brand: `"Brand {id}"`, model: `"Model {id}"`
    /// - price: `25_000` without discount
    /// - every counter: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `member_id` - Owning member ID
    pub fn new(db: &'a C, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            car_status: CarStatus::Available,
            brand: format!("Brand {}", id),
            model: format!("Model {}", id),
            price: 25_000,
            discount_percent: 0,
            views: 0,
            likes: 0,
            comments: 0,
            rank: 0,
        }
    }

    pub fn status(mut self, car_status: CarStatus) -> Self {
        self.car_status = car_status;
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the list price and discount; the discounted price is derived from both.
    pub fn price(mut self, price: i64, discount_percent: i32) -> Self {
        self.price = price;
        self.discount_percent = discount_percent;
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

    pub fn comments(mut self, comments: i32) -> Self {
        self.comments = comments;
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        entity::car::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            car_status: ActiveValue::Set(self.car_status),
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            car_year: ActiveValue::Set(2020),
            car_price: ActiveValue::Set(self.price),
            discount_percent: ActiveValue::Set(self.discount_percent),
            discounted_price: ActiveValue::Set(
                (self.price * i64::from(100 - self.discount_percent) + 50) / 100,
            ),
            car_views: ActiveValue::Set(self.views),
            car_likes: ActiveValue::Set(self.likes),
            car_comments: ActiveValue::Set(self.comments),
            car_rank: ActiveValue::Set(self.rank),
            sold_at: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available car owned by `member_id`.
pub async fn create_car<C: ConnectionTrait>(
    db: &C,
    member_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, member_id).build().await
}
