//! Car listing domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CarStatus;

use crate::{
    model::car::{CarDto, CarSortDto, CarStatusDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto},
    server::model::{
        engagement::Direction,
        member::{Member, MemberDetail},
        page::{Page, PageParam},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub owner_id: i32,
    pub status: CarStatus,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub discount_percent: i32,
    pub discounted_price: i64,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    pub rank: i32,
    pub sold_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.member_id,
            status: entity.car_status,
            brand: entity.brand,
            model: entity.model,
            year: entity.car_year,
            price: entity.car_price,
            discount_percent: entity.discount_percent,
            discounted_price: entity.discounted_price,
            views: entity.car_views,
            likes: entity.car_likes,
            comments: entity.car_comments,
            rank: entity.car_rank,
            sold_at: entity.sold_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Price after applying `discount_percent`, rounded half up to a whole unit.
///
/// No discount (zero or negative) leaves the price unchanged.
pub fn discounted_price(price: i64, discount_percent: i32) -> i64 {
    if discount_percent <= 0 {
        return price;
    }

    let kept = i128::from(price) * i128::from(100 - discount_percent);
    let rounded = (kept + 50).div_euclid(100);

    i64::try_from(rounded).unwrap_or(price)
}

/// Whether a car in `status` counts towards its owner's `cars` counter.
pub fn is_listed(status: CarStatus) -> bool {
    matches!(status, CarStatus::Available | CarStatus::Reserved)
}

pub fn car_status_into_dto(status: CarStatus) -> CarStatusDto {
    match status {
        CarStatus::Available => CarStatusDto::Available,
        CarStatus::Reserved => CarStatusDto::Reserved,
        CarStatus::Sold => CarStatusDto::Sold,
        CarStatus::Unavailable => CarStatusDto::Unavailable,
    }
}

pub fn car_status_from_dto(dto: CarStatusDto) -> CarStatus {
    match dto {
        CarStatusDto::Available => CarStatus::Available,
        CarStatusDto::Reserved => CarStatus::Reserved,
        CarStatusDto::Sold => CarStatus::Sold,
        CarStatusDto::Unavailable => CarStatus::Unavailable,
    }
}

/// Car with its owner and the viewer's like flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDetail {
    pub car: Car,
    pub owner: Option<Member>,
    pub me_liked: bool,
}

impl CarDetail {
    pub fn into_dto(self) -> CarDto {
        let car = self.car;
        CarDto {
            id: car.id,
            member_id: car.owner_id,
            car_status: car_status_into_dto(car.status),
            brand: car.brand,
            model: car.model,
            car_year: car.year,
            car_price: car.price,
            discount_percent: car.discount_percent,
            discounted_price: car.discounted_price,
            car_views: car.views,
            car_likes: car.likes,
            car_comments: car.comments,
            car_rank: car.rank,
            me_liked: self.me_liked,
            owner: self.owner.map(|m| MemberDetail::plain(m).into_dto()),
            sold_at: car.sold_at,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

impl Page<CarDetail> {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            list: self.list.into_iter().map(CarDetail::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub discount_percent: i32,
}

impl CreateCarParam {
    pub fn from_dto(dto: CreateCarDto) -> Self {
        Self {
            brand: dto.brand,
            model: dto.model,
            year: dto.car_year,
            price: dto.car_price,
            discount_percent: dto.discount_percent,
        }
    }
}

/// Fields of a car its owner (or an admin) may edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarParam {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<i64>,
    pub discount_percent: Option<i32>,
}

impl UpdateCarParam {
    pub fn from_dto(dto: UpdateCarDto) -> Self {
        Self {
            brand: dto.brand,
            model: dto.model,
            year: dto.car_year,
            price: dto.car_price,
            discount_percent: dto.discount_percent,
        }
    }
}

/// Column available cars can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarSort {
    #[default]
    CreatedAt,
    Price,
    Views,
    Likes,
    Rank,
}

impl CarSort {
    pub fn from_dto(dto: CarSortDto) -> Self {
        match dto {
            CarSortDto::CreatedAt => Self::CreatedAt,
            CarSortDto::Price => Self::Price,
            CarSortDto::Views => Self::Views,
            CarSortDto::Likes => Self::Likes,
            CarSortDto::Rank => Self::Rank,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListCarsParam {
    pub page: PageParam,
    pub sort: CarSort,
    pub direction: Direction,
    pub brand: Option<String>,
}
