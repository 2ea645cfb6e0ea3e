use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{DirectionDto, ErrorDto, LikeToggleDto},
        car::{
            CarDto, CarSortDto, CarStatusDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto,
            UpdateCarStatusDto,
        },
    },
    server::{
        controller::{guard, PaginationParams},
        error::AppError,
        middleware::auth::Permission,
        model::{
            car::{car_status_from_dto, CarSort, CreateCarParam, ListCarsParam, UpdateCarParam},
            engagement::{Direction, EngagementSource},
            page::PageParam,
        },
        service::{car::CarService, projection::ProjectionService},
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

#[derive(Deserialize)]
pub struct ListCarsQuery {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_limit")]
    pub limit: u64,
    pub sort: Option<CarSortDto>,
    pub direction: Option<DirectionDto>,
    pub brand: Option<String>,
}

#[derive(Deserialize)]
pub struct CarStatusQuery {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_limit")]
    pub limit: u64,
    pub status: Option<CarStatusDto>,
}

/// List a car for sale.
///
/// The owner's `cars` counter grows by one in the same transaction.
///
/// # Access Control
/// - `Agent` - Agents and admins may list cars
///
/// # Returns
/// - `201 Created` - Listed car with its owner
/// - `400 Bad Request` - Empty brand or model, non-positive price
/// - `401 Unauthorized` - Missing or invalid credential
/// - `403 Forbidden` - Member is not an agent
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car listed", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Member is not an agent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = guard(&state, &headers).require(&[Permission::Agent]).await?;

    let car = CarService::new(&state.db, state.counter_policy)
        .create(&owner, CreateCarParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Get a car.
///
/// Authenticated viewers have their first view counted and receive `me_liked`.
/// Only AVAILABLE cars are visible.
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "Car with owner", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let car = CarService::new(&state.db, state.counter_policy)
        .get(viewer.as_ref(), id)
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// List available cars.
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)"),
        ("sort" = Option<CarSortDto>, Query, description = "Sort column (default: CREATED_AT)"),
        ("direction" = Option<DirectionDto>, Query, description = "Sort direction (default: DESC)"),
        ("brand" = Option<String>, Query, description = "Exact brand filter")
    ),
    responses(
        (status = 200, description = "Page of available cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListCarsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let param = ListCarsParam {
        page: PageParam::new(query.page, query.limit)?,
        sort: query.sort.map(CarSort::from_dto).unwrap_or_default(),
        direction: query.direction.map(Direction::from_dto).unwrap_or_default(),
        brand: query.brand.filter(|b| !b.trim().is_empty()),
    };

    let cars = CarService::new(&state.db, state.counter_policy)
        .list(viewer.as_ref(), param)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// List the caller's own cars, newest first.
///
/// Removed (UNAVAILABLE) cars are never returned and cannot be requested.
///
/// # Access Control
/// - `Agent` - Agents and admins
#[utoipa::path(
    get,
    path = "/api/cars/mine",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)"),
        ("status" = Option<CarStatusDto>, Query, description = "Only cars in this status")
    ),
    responses(
        (status = 200, description = "Own cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid pagination or status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Member is not an agent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn own_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CarStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let owner = guard(&state, &headers).require(&[Permission::Agent]).await?;

    let cars = CarService::new(&state.db, state.counter_policy)
        .list_own(
            &owner,
            query.status.map(car_status_from_dto),
            PageParam::new(query.page, query.limit)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Edit an available car's details.
///
/// The discounted price is recomputed whenever the price or discount changes.
///
/// # Access Control
/// - Owner of the car, or an admin
#[utoipa::path(
    patch,
    path = "/api/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Updated car", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Car not found or not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let car = CarService::new(&state.db, state.counter_policy)
        .update(&member, id, UpdateCarParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// List every car regardless of status.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/cars",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)"),
        ("status" = Option<CarStatusDto>, Query, description = "Only cars in this status")
    ),
    responses(
        (status = 200, description = "All cars", body = PaginatedCarsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn all_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CarStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = guard(&state, &headers).require(&[Permission::Admin]).await?;

    let cars = CarService::new(&state.db, state.counter_policy)
        .list_all(
            query.status.map(car_status_from_dto),
            PageParam::new(query.page, query.limit)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Permanently delete a car already marked UNAVAILABLE.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/cars/{id}",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "No unavailable car with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = guard(&state, &headers).require(&[Permission::Admin]).await?;

    CarService::new(&state.db, state.counter_policy)
        .remove(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a car's status.
///
/// Leaving the listed statuses (SOLD, UNAVAILABLE) lowers the owner's `cars` counter,
/// returning to them raises it again.
///
/// # Access Control
/// - Owner of the car, or an admin
#[utoipa::path(
    patch,
    path = "/api/cars/{id}/status",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    request_body = UpdateCarStatusDto,
    responses(
        (status = 200, description = "Updated car", body = CarDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 409, description = "Status changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_car_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let car = CarService::new(&state.db, state.counter_policy)
        .update_status(&member, id, car_status_from_dto(payload.car_status))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Toggle the caller's like on a car.
#[utoipa::path(
    post,
    path = "/api/cars/{id}/like",
    tag = CAR_TAG,
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "Like toggled", body = LikeToggleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found or not available", body = ErrorDto),
        (status = 409, description = "Concurrent toggle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn like_car(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let toggle = CarService::new(&state.db, state.counter_policy)
        .like(&member, id)
        .await?;

    Ok((StatusCode::OK, Json(toggle.into_dto())))
}

/// Cars the caller liked, most recent like first.
#[utoipa::path(
    get,
    path = "/api/cars/favorites",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Liked cars", body = PaginatedCarsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn favorite_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let cars = ProjectionService::new(&state.db, state.counter_policy)
        .cars(EngagementSource::Like, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Cars the caller viewed, most recent first view first.
#[utoipa::path(
    get,
    path = "/api/cars/visited",
    tag = CAR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Viewed cars", body = PaginatedCarsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn visited_cars(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let cars = ProjectionService::new(&state.db, state.counter_policy)
        .cars(EngagementSource::View, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}
