use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rank::{RankJobStateDto, RankReportDto},
    },
    server::{
        controller::guard, error::AppError, middleware::auth::Permission, state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Run every rank phase now.
///
/// Shares its lock with the scheduled slots, so a run that would overlap a scheduled
/// phase is refused instead of queued.
///
/// # Access Control
/// - `Admin` - Only admins can trigger the rank job
#[utoipa::path(
    post,
    path = "/api/admin/rank/run",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Combined report of all phases", body = RankReportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Rank job already running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn run_rank_job(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let admin = guard(&state, &headers).require(&[Permission::Admin]).await?;

    tracing::info!(admin_id = admin.id, "Rank job triggered manually");

    let Some(report) = state.rank_job.run().await? else {
        return Err(AppError::CreateConflict(
            "Rank job is already running".to_string(),
        ));
    };

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Current phase of the rank job.
///
/// # Access Control
/// - `Admin` - Only admins can inspect the rank job
#[utoipa::path(
    get,
    path = "/api/admin/rank",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Rank job state", body = RankJobStateDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn rank_job_state(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = guard(&state, &headers).require(&[Permission::Admin]).await?;

    Ok((StatusCode::OK, Json(state.rank_job.state().await.into_dto())))
}
