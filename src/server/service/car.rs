use entity::sea_orm_active_enums::{CarStatus, MemberType, NotificationType};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{car::CarRepository, like::LikeRepository, member::MemberRepository},
    error::{auth::AuthError, AppError},
    model::{
        car::{is_listed, Car, CarDetail, CreateCarParam, ListCarsParam, UpdateCarParam},
        engagement::{Counter, CounterPolicy, LikeToggle, StatisticModifier, TargetKind},
        member::Member,
        notification::CreateNotificationParam,
        page::{Page, PageParam},
    },
    service::{
        engagement::EngagementService, notification::NotificationService, stats::StatsEditor,
    },
};

fn car_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Car {} not found", id))
}

fn validate_price(price: Option<i64>, discount_percent: Option<i32>) -> Result<(), AppError> {
    if price.is_some_and(|price| price <= 0) {
        return Err(AppError::ValidationFailed(
            "Price must be positive".to_string(),
        ));
    }
    if discount_percent.is_some_and(|percent| !(0..=100).contains(&percent)) {
        return Err(AppError::ValidationFailed(
            "Discount must be between 0 and 100 percent".to_string(),
        ));
    }

    Ok(())
}

fn ensure_owner_or_admin(member: &Member, car: &Car) -> Result<(), AppError> {
    if car.owner_id != member.id && member.member_type != MemberType::Admin {
        return Err(AuthError::AccessDenied(
            member.id,
            format!("Attempted to modify car {} owned by {}", car.id, car.owner_id),
        )
        .into());
    }

    Ok(())
}

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Lists a new car for sale and bumps the owner's `cars` counter.
    ///
    /// # Returns
    /// - `Ok(CarDetail)` - Created car with the updated owner
    /// - `Err(AppError::ValidationFailed)` - Empty brand or model, or a non-positive price
    pub async fn create(&self, owner: &Member, param: CreateCarParam) -> Result<CarDetail, AppError> {
        if param.brand.trim().is_empty() || param.model.trim().is_empty() {
            return Err(AppError::ValidationFailed(
                "Brand and model are required".to_string(),
            ));
        }
        validate_price(Some(param.price), Some(param.discount_percent))?;

        let txn = self.db.begin().await?;

        let car = CarRepository::new(&txn).create(owner.id, param).await?;
        let owner = StatsEditor::new(&txn, self.policy)
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                owner.id,
                Counter::Cars,
                1,
            ))
            .await?
            .into_member();

        txn.commit().await?;

        tracing::info!(car_id = car.id, owner_id = car.owner_id, "car listed");

        Ok(CarDetail {
            car,
            owner,
            me_liked: false,
        })
    }

    /// Gets an available car, recording the viewer's first view.
    ///
    /// Reserved, sold and removed cars are not publicly visible; owners reach them through
    /// [`CarService::list_own`].
    pub async fn get(&self, viewer: Option<&Member>, id: i32) -> Result<CarDetail, AppError> {
        let car = CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|car| car.status == CarStatus::Available)
            .ok_or_else(|| car_not_found(id))?;

        let (car, me_liked) = match viewer {
            Some(viewer) => {
                let txn = self.db.begin().await?;
                let engagement = EngagementService::new(&txn, self.policy);

                let counted = engagement.apply_view(viewer.id, TargetKind::Car, id).await?;
                let me_liked = engagement
                    .check_like_existence(viewer.id, TargetKind::Car, id)
                    .await?;
                let car = if counted {
                    CarRepository::new(&txn)
                        .find_by_id(id)
                        .await?
                        .ok_or_else(|| car_not_found(id))?
                } else {
                    car
                };

                txn.commit().await?;

                (car, me_liked)
            }
            None => (car, false),
        };

        let owner = MemberRepository::new(self.db)
            .find_by_id(car.owner_id)
            .await?;

        Ok(CarDetail {
            car,
            owner,
            me_liked,
        })
    }

    /// Pages available cars with their owners.
    pub async fn list(
        &self,
        viewer: Option<&Member>,
        param: ListCarsParam,
    ) -> Result<Page<CarDetail>, AppError> {
        let cars = CarRepository::new(self.db).find_available(&param).await?;

        self.decorate(viewer.map(|m| m.id), cars).await
    }

    /// Pages the agent's own cars, optionally narrowed to one status.
    ///
    /// # Returns
    /// - `Ok(Page<CarDetail>)` - Own cars, newest first, removed cars excluded
    /// - `Err(AppError::ValidationFailed)` - Filter asks for removed cars
    pub async fn list_own(
        &self,
        owner: &Member,
        status: Option<CarStatus>,
        page: PageParam,
    ) -> Result<Page<CarDetail>, AppError> {
        if status == Some(CarStatus::Unavailable) {
            return Err(AppError::ValidationFailed(
                "Removed cars cannot be listed".to_string(),
            ));
        }

        let cars = CarRepository::new(self.db)
            .find_by_owner(owner.id, status, page)
            .await?;

        self.decorate(Some(owner.id), cars).await
    }

    /// Pages every car for moderation, optionally narrowed to one status.
    pub async fn list_all(
        &self,
        status: Option<CarStatus>,
        page: PageParam,
    ) -> Result<Page<CarDetail>, AppError> {
        let cars = CarRepository::new(self.db).find_all(status, page).await?;

        self.decorate(None, cars).await
    }

    /// Edits an available car's details; only its owner or an admin may do so.
    ///
    /// The discounted price is recomputed from the resulting price and discount.
    ///
    /// # Returns
    /// - `Ok(CarDetail)` - Updated car and owner
    /// - `Err(AppError::ValidationFailed)` - Empty brand or model, non-positive price or a
    ///   discount outside 0..=100
    /// - `Err(AppError::NotFound)` - No available car with that id
    /// - `Err(AppError::AuthErr)` - Caller is neither owner nor admin
    pub async fn update(
        &self,
        member: &Member,
        id: i32,
        param: UpdateCarParam,
    ) -> Result<CarDetail, AppError> {
        let blank = |value: &Option<String>| value.as_ref().is_some_and(|v| v.trim().is_empty());
        if blank(&param.brand) || blank(&param.model) {
            return Err(AppError::ValidationFailed(
                "Brand and model cannot be empty".to_string(),
            ));
        }
        validate_price(param.price, param.discount_percent)?;

        let txn = self.db.begin().await?;

        let existing = CarRepository::new(&txn)
            .find_by_id(id)
            .await?
            .filter(|car| car.status == CarStatus::Available)
            .ok_or_else(|| car_not_found(id))?;

        ensure_owner_or_admin(member, &existing)?;

        let car = CarRepository::new(&txn)
            .update_fields(id, param)
            .await?
            .ok_or_else(|| car_not_found(id))?;
        let owner = MemberRepository::new(&txn).find_by_id(car.owner_id).await?;

        txn.commit().await?;

        tracing::info!(car_id = id, member_id = member.id, "car updated");

        Ok(CarDetail {
            car,
            owner,
            me_liked: false,
        })
    }

    /// Permanently deletes a car that was already marked unavailable.
    ///
    /// Unavailable cars no longer count towards their owner, so no counter moves.
    ///
    /// # Returns
    /// - `Ok(())` - Car deleted
    /// - `Err(AppError::NotFound)` - No unavailable car with that id
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        if !CarRepository::new(self.db).delete_unavailable(id).await? {
            return Err(AppError::NotFound(format!(
                "Car {} not found or not marked unavailable",
                id
            )));
        }

        tracing::info!(car_id = id, "car deleted");

        Ok(())
    }

    /// Attaches owners and the viewer's like flag to a page of cars.
    pub async fn decorate(
        &self,
        viewer_id: Option<i32>,
        cars: Page<Car>,
    ) -> Result<Page<CarDetail>, AppError> {
        let owner_ids = cars.list.iter().map(|car| car.owner_id).collect();
        let owners = MemberRepository::new(self.db).find_by_ids(owner_ids).await?;
        let likes = LikeRepository::new(self.db);

        let mut list = Vec::with_capacity(cars.list.len());
        for car in cars.list {
            let me_liked = match viewer_id {
                Some(viewer_id) => likes.exists(viewer_id, TargetKind::Car, car.id).await?,
                None => false,
            };
            let owner = owners.get(&car.owner_id).cloned();
            list.push(CarDetail {
                car,
                owner,
                me_liked,
            });
        }

        Ok(Page {
            list,
            total: cars.total,
            page: cars.page,
            limit: cars.limit,
        })
    }

    /// Changes a car's status; only its owner or an admin may do so.
    ///
    /// The owner's `cars` counter follows whether the car is still listed: leaving the
    /// listed states decrements it, coming back increments it. The current status is read
    /// and swapped inside one transaction and the swap is conditional on it, so only a
    /// transition that actually applied moves the counter.
    ///
    /// # Returns
    /// - `Ok(CarDetail)` - Updated car and owner
    /// - `Err(AppError::NotFound)` - No car with that id
    /// - `Err(AppError::AuthErr)` - Caller is neither owner nor admin
    /// - `Err(AppError::CreateConflict)` - Status changed underneath this call
    pub async fn update_status(
        &self,
        member: &Member,
        id: i32,
        status: CarStatus,
    ) -> Result<CarDetail, AppError> {
        let txn = self.db.begin().await?;

        let existing = CarRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| car_not_found(id))?;

        ensure_owner_or_admin(member, &existing)?;

        if existing.status == status {
            let owner = MemberRepository::new(&txn).find_by_id(existing.owner_id).await?;
            txn.commit().await?;

            return Ok(CarDetail {
                car: existing,
                owner,
                me_liked: false,
            });
        }

        let Some(car) = CarRepository::new(&txn)
            .update_status(id, existing.status, status)
            .await?
        else {
            return Err(AppError::CreateConflict(format!(
                "Car {} changed status concurrently",
                id
            )));
        };

        let owner = self.track_listing(&txn, &car, existing.status).await?;

        txn.commit().await?;

        tracing::info!(car_id = id, from = ?existing.status, to = ?status, "car status changed");

        Ok(CarDetail {
            car,
            owner,
            me_liked: false,
        })
    }

    /// Moves the owner's `cars` counter after `car` left status `previous`.
    async fn track_listing<C: ConnectionTrait>(
        &self,
        db: &C,
        car: &Car,
        previous: CarStatus,
    ) -> Result<Option<Member>, AppError> {
        let delta = is_listed(car.status) as i32 - is_listed(previous) as i32;
        if delta == 0 {
            return Ok(MemberRepository::new(db).find_by_id(car.owner_id).await?);
        }

        let owner = StatsEditor::new(db, self.policy)
            .adjust(StatisticModifier::new(
                TargetKind::Member,
                car.owner_id,
                Counter::Cars,
                delta,
            ))
            .await?
            .into_member();

        Ok(owner)
    }

    /// Toggles the member's like on an available car and notifies the owner of new likes.
    pub async fn like(&self, member: &Member, id: i32) -> Result<LikeToggle, AppError> {
        let car = CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|car| car.status == CarStatus::Available)
            .ok_or_else(|| car_not_found(id))?;

        let txn = self.db.begin().await?;
        let toggle = EngagementService::new(&txn, self.policy)
            .apply_like(member.id, TargetKind::Car, id)
            .await?;
        txn.commit().await?;

        if toggle.liked() {
            NotificationService::new(self.db)
                .notify(CreateNotificationParam {
                    notification_type: NotificationType::Like,
                    kind: TargetKind::Car,
                    target_id: id,
                    author_id: member.id,
                    receiver_id: car.owner_id,
                })
                .await;
        }

        Ok(toggle)
    }
}
