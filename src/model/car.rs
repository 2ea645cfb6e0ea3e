use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::MemberDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatusDto {
    Available,
    Reserved,
    Sold,
    Unavailable,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub member_id: i32,
    pub car_status: CarStatusDto,
    pub brand: String,
    pub model: String,
    pub car_year: i32,
    pub car_price: i64,
    pub discount_percent: i32,
    pub discounted_price: i64,
    pub car_views: i32,
    pub car_likes: i32,
    pub car_comments: i32,
    pub car_rank: i32,
    #[serde(default)]
    pub me_liked: bool,
    pub owner: Option<MemberDto>,
    pub sold_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedCarsDto {
    pub list: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCarDto {
    pub brand: String,
    pub model: String,
    pub car_year: i32,
    pub car_price: i64,
    /// Discount in percent, 0 to 100
    #[serde(default)]
    pub discount_percent: i32,
}

/// Partial car update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCarDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub car_year: Option<i32>,
    pub car_price: Option<i64>,
    pub discount_percent: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCarStatusDto {
    pub car_status: CarStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarSortDto {
    CreatedAt,
    Price,
    Views,
    Likes,
    Rank,
}
