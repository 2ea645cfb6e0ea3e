//! Car listing repository.

use chrono::Utc;
use entity::sea_orm_active_enums::CarStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::{
    car::{discounted_price, Car, CarSort, CreateCarParam, ListCarsParam, UpdateCarParam},
    page::{Page, PageParam},
};

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an available car owned by `owner_id`.
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, owner_id: i32, param: CreateCarParam) -> Result<Car, DbErr> {
        let now = Utc::now();
        let entity = entity::car::ActiveModel {
            member_id: ActiveValue::Set(owner_id),
            car_status: ActiveValue::Set(CarStatus::Available),
            brand: ActiveValue::Set(param.brand),
            model: ActiveValue::Set(param.model),
            car_year: ActiveValue::Set(param.year),
            car_price: ActiveValue::Set(param.price),
            discount_percent: ActiveValue::Set(param.discount_percent),
            discounted_price: ActiveValue::Set(discounted_price(param.price, param.discount_percent)),
            car_views: ActiveValue::Set(0),
            car_likes: ActiveValue::Set(0),
            car_comments: ActiveValue::Set(0),
            car_rank: ActiveValue::Set(0),
            sold_at: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Pages available cars sorted by the requested column, ties broken by id ascending.
    ///
    /// # Arguments
    /// - `param` - Page, sort column, direction and optional brand filter
    ///
    /// # Returns
    /// - `Ok(Page<Car>)` - Requested page with the total number of matching cars
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_available(&self, param: &ListCarsParam) -> Result<Page<Car>, DbErr> {
        let sort_column = match param.sort {
            CarSort::CreatedAt => entity::car::Column::CreatedAt,
            CarSort::Price => entity::car::Column::CarPrice,
            CarSort::Views => entity::car::Column::CarViews,
            CarSort::Likes => entity::car::Column::CarLikes,
            CarSort::Rank => entity::car::Column::CarRank,
        };

        let mut query = entity::prelude::Car::find()
            .filter(entity::car::Column::CarStatus.eq(CarStatus::Available));

        if let Some(brand) = &param.brand {
            query = query.filter(entity::car::Column::Brand.eq(brand.as_str()));
        }

        let paginator = query
            .order_by(sort_column, param.direction.order())
            .order_by_asc(entity::car::Column::Id)
            .paginate(self.db, param.page.limit);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(param.page.index()).await?;

        Ok(Page::new(
            cars.into_iter().map(Car::from_entity).collect(),
            total,
            param.page,
        ))
    }

    /// Pages an owner's cars, newest first, optionally narrowed to one status.
    ///
    /// Unavailable (removed) cars are never included.
    pub async fn find_by_owner(
        &self,
        owner_id: i32,
        status: Option<CarStatus>,
        page: PageParam,
    ) -> Result<Page<Car>, DbErr> {
        let query = entity::prelude::Car::find()
            .filter(entity::car::Column::MemberId.eq(owner_id))
            .filter(entity::car::Column::CarStatus.ne(CarStatus::Unavailable));

        let query = match status {
            Some(status) => query.filter(entity::car::Column::CarStatus.eq(status)),
            None => query,
        };

        self.paginate_newest(query, page).await
    }

    /// Pages every car regardless of status, newest first, for moderation.
    pub async fn find_all(
        &self,
        status: Option<CarStatus>,
        page: PageParam,
    ) -> Result<Page<Car>, DbErr> {
        let query = match status {
            Some(status) => {
                entity::prelude::Car::find().filter(entity::car::Column::CarStatus.eq(status))
            }
            None => entity::prelude::Car::find(),
        };

        self.paginate_newest(query, page).await
    }

    async fn paginate_newest(
        &self,
        query: Select<entity::prelude::Car>,
        page: PageParam,
    ) -> Result<Page<Car>, DbErr> {
        let paginator = query
            .order_by_desc(entity::car::Column::CreatedAt)
            .order_by_asc(entity::car::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            cars.into_iter().map(Car::from_entity).collect(),
            total,
            page,
        ))
    }

    /// Writes the editable fields of an available car and recomputes its discounted price
    /// from the resulting price and discount.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Updated car
    /// - `Ok(None)` - No available car with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_fields(
        &self,
        id: i32,
        param: UpdateCarParam,
    ) -> Result<Option<Car>, DbErr> {
        let Some(existing) = entity::prelude::Car::find_by_id(id)
            .filter(entity::car::Column::CarStatus.eq(CarStatus::Available))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let price = param.price.unwrap_or(existing.car_price);
        let discount_percent = param.discount_percent.unwrap_or(existing.discount_percent);

        let mut active: entity::car::ActiveModel = existing.into();
        if let Some(brand) = param.brand {
            active.brand = ActiveValue::Set(brand);
        }
        if let Some(model) = param.model {
            active.model = ActiveValue::Set(model);
        }
        if let Some(year) = param.year {
            active.car_year = ActiveValue::Set(year);
        }
        active.car_price = ActiveValue::Set(price);
        active.discount_percent = ActiveValue::Set(discount_percent);
        active.discounted_price = ActiveValue::Set(discounted_price(price, discount_percent));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Car::from_entity(entity)))
    }

    /// Deletes a car that was already marked unavailable.
    ///
    /// # Returns
    /// - `Ok(true)` - Car deleted
    /// - `Ok(false)` - No unavailable car with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_unavailable(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_many()
            .filter(entity::car::Column::Id.eq(id))
            .filter(entity::car::Column::CarStatus.eq(CarStatus::Unavailable))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a car from `from` to `to`, stamping `sold_at` or `deleted_at` when entering
    /// those states.
    ///
    /// The write only applies while the stored status still equals `from`, so two callers
    /// racing on the same transition cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Transition applied, updated car
    /// - `Ok(None)` - No car with that id in status `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        from: CarStatus,
        to: CarStatus,
    ) -> Result<Option<Car>, DbErr> {
        let now = Utc::now();
        let mut update = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::CarStatus, Expr::value(to))
            .col_expr(entity::car::Column::UpdatedAt, Expr::value(now));
        match to {
            CarStatus::Sold => {
                update = update.col_expr(entity::car::Column::SoldAt, Expr::value(Some(now)))
            }
            CarStatus::Unavailable => {
                update = update.col_expr(entity::car::Column::DeletedAt, Expr::value(Some(now)))
            }
            CarStatus::Available | CarStatus::Reserved => {}
        }

        let result = update
            .filter(entity::car::Column::Id.eq(id))
            .filter(entity::car::Column::CarStatus.eq(from))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}
