use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{MarkedReadDto, PaginatedNotificationsDto},
    },
    server::{
        controller::{guard, PaginationParams},
        error::AppError,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// The caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list(member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark one of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Number of notifications changed", body = MarkedReadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_read(member.id, Some(id))
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}

/// Mark all of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/api/notifications/read",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications changed", body = MarkedReadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_read(member.id, None)
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}
