use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, LikeToggleDto},
        member::{
            CreateMemberDto, FollowDto, MemberDto, PaginatedMembersDto, UpdateMemberDto,
            UpdateMemberStatusDto,
        },
    },
    server::{
        controller::{guard, PaginationParams},
        error::AppError,
        middleware::auth::Permission,
        model::{
            engagement::EngagementSource,
            member::{member_status_from_dto, CreateMemberParam, UpdateMemberParam},
        },
        service::{follow::FollowService, member::MemberService, projection::ProjectionService},
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a member.
///
/// Credentials are issued elsewhere; this only creates the profile the bearer token
/// will point at. Admins cannot self-register.
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member registered", body = MemberDto),
        (status = 400, description = "Blank nickname or admin type", body = ErrorDto),
        (status = 409, description = "Nickname already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_member(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db, state.counter_policy)
        .register(CreateMemberParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get an active member's profile.
///
/// Viewing someone else's profile counts the first view and fills `me_liked` and
/// `me_followed`.
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member profile", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let member = MemberService::new(&state.db, state.counter_policy)
        .get(viewer.as_ref(), id)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Active agents ordered by rank, highest first.
#[utoipa::path(
    get,
    path = "/api/members/agents",
    tag = MEMBER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Top agents", body = PaginatedMembersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn top_agents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let agents = MemberService::new(&state.db, state.counter_policy)
        .top_agents(viewer.as_ref(), params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(agents.into_dto())))
}

/// Toggle the caller's like on a member.
#[utoipa::path(
    post,
    path = "/api/members/{id}/like",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Like toggled", body = LikeToggleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Concurrent toggle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn like_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let toggle = MemberService::new(&state.db, state.counter_policy)
        .like(&member, id)
        .await?;

    Ok((StatusCode::OK, Json(toggle.into_dto())))
}

/// Follow a member.
#[utoipa::path(
    post,
    path = "/api/members/{id}/follow",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member to follow")),
    responses(
        (status = 201, description = "Subscribed", body = FollowDto),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn follow_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let follow = FollowService::new(&state.db, state.counter_policy)
        .subscribe(member.id, id)
        .await?;

    Ok((StatusCode::CREATED, Json(follow.into_dto())))
}

/// Stop following a member.
#[utoipa::path(
    delete,
    path = "/api/members/{id}/follow",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member to unfollow")),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn unfollow_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    FollowService::new(&state.db, state.counter_policy)
        .unsubscribe(member.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Members following the given member.
#[utoipa::path(
    get,
    path = "/api/members/{id}/followers",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Followers", body = PaginatedMembersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn followers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let members = FollowService::new(&state.db, state.counter_policy)
        .followers(viewer.as_ref(), id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Members the given member follows.
#[utoipa::path(
    get,
    path = "/api/members/{id}/followings",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Followings", body = PaginatedMembersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn followings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let members = FollowService::new(&state.db, state.counter_policy)
        .followings(viewer.as_ref(), id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Members the caller liked.
#[utoipa::path(
    get,
    path = "/api/members/favorites",
    tag = MEMBER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Liked members", body = PaginatedMembersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn favorite_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let members = ProjectionService::new(&state.db, state.counter_policy)
        .members(EngagementSource::Like, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Member profiles the caller viewed.
#[utoipa::path(
    get,
    path = "/api/members/visited",
    tag = MEMBER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Viewed members", body = PaginatedMembersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn visited_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let members = ProjectionService::new(&state.db, state.counter_policy)
        .members(EngagementSource::View, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

/// Edit the caller's own profile.
#[utoipa::path(
    patch,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Updated member", body = MemberDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Nickname already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let updated = MemberService::new(&state.db, state.counter_policy)
        .update_profile(&member, UpdateMemberParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Block, delete or reactivate a member.
///
/// # Access Control
/// - `Admin` - Only admins can change member status
#[utoipa::path(
    patch,
    path = "/api/admin/members/{id}/status",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberStatusDto,
    responses(
        (status = 200, description = "Updated member", body = MemberDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_member_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = guard(&state, &headers).require(&[Permission::Admin]).await?;

    let member = MemberService::new(&state.db, state.counter_policy)
        .update_status(id, member_status_from_dto(payload.member_status))
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
