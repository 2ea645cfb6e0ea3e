use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, PaginatedCommentsDto, TargetKindDto},
    },
    server::{
        controller::guard,
        error::AppError,
        model::{comment::CreateCommentParam, engagement::TargetKind, page::PageParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
pub struct ListCommentsQuery {
    pub target_kind: TargetKindDto,
    pub target_id: i32,
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_limit")]
    pub limit: u64,
}

/// Comment on a car, article or member.
///
/// The target's `comments` counter grows by one and its owner is notified.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Empty or overlong comment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = guard(&state, &headers).require(&[]).await?;

    let comment = CommentService::new(&state.db, state.counter_policy)
        .create(&author, CreateCommentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Remove a comment.
///
/// # Access Control
/// - Author of the comment, or an admin
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    CommentService::new(&state.db, state.counter_policy)
        .remove(&member, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Active comments on a target, oldest first.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(
        ("target_kind" = TargetKindDto, Query, description = "CAR, ARTICLE or MEMBER"),
        ("target_id" = i32, Query, description = "Target ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Comments", body = PaginatedCommentsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParam::new(query.page, query.limit)?;

    let comments = CommentService::new(&state.db, state.counter_policy)
        .list(TargetKind::from_dto(query.target_kind), query.target_id, page)
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto())))
}
