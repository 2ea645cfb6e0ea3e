use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, LikeToggleDto},
        article::{ArticleCategoryDto, ArticleDto, CreateArticleDto, PaginatedArticlesDto},
    },
    server::{
        controller::{guard, PaginationParams},
        error::AppError,
        model::{
            article::{category_from_dto, CreateArticleParam},
            engagement::EngagementSource,
            page::PageParam,
        },
        service::{board_article::ArticleService, projection::ProjectionService},
        state::AppState,
    },
};

/// Tag for grouping board article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

#[derive(Deserialize)]
pub struct ListArticlesQuery {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_limit")]
    pub limit: u64,
    pub category: Option<ArticleCategoryDto>,
}

/// Publish a board article.
///
/// The author's `articles` counter grows by one in the same transaction.
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article published", body = ArticleDto),
        (status = 400, description = "Empty title or content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = guard(&state, &headers).require(&[]).await?;

    let article = ArticleService::new(&state.db, state.counter_policy)
        .create(&author, CreateArticleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Get an active article, counting the viewer's first view.
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article with author", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;

    let article = ArticleService::new(&state.db, state.counter_policy)
        .get(viewer.as_ref(), id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// List active articles, newest first.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)"),
        ("category" = Option<ArticleCategoryDto>, Query, description = "Board category filter")
    ),
    responses(
        (status = 200, description = "Page of articles", body = PaginatedArticlesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_articles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListArticlesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = guard(&state, &headers).optional().await?;
    let page = PageParam::new(query.page, query.limit)?;

    let articles = ArticleService::new(&state.db, state.counter_policy)
        .list(viewer.as_ref(), query.category.map(category_from_dto), page)
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// Toggle the caller's like on an article.
#[utoipa::path(
    post,
    path = "/api/articles/{id}/like",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Like toggled", body = LikeToggleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "Concurrent toggle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn like_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let toggle = ArticleService::new(&state.db, state.counter_policy)
        .like(&member, id)
        .await?;

    Ok((StatusCode::OK, Json(toggle.into_dto())))
}

/// Remove an article.
///
/// # Access Control
/// - Author of the article, or an admin
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    ArticleService::new(&state.db, state.counter_policy)
        .remove(&member, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Articles the caller liked.
#[utoipa::path(
    get,
    path = "/api/articles/favorites",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Liked articles", body = PaginatedArticlesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn favorite_articles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let articles = ProjectionService::new(&state.db, state.counter_policy)
        .articles(EngagementSource::Like, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// Articles the caller viewed.
#[utoipa::path(
    get,
    path = "/api/articles/visited",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Viewed articles", body = PaginatedArticlesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn visited_articles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let member = guard(&state, &headers).require(&[]).await?;

    let articles = ProjectionService::new(&state.db, state.counter_policy)
        .articles(EngagementSource::View, member.id, params.into_page()?)
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}
