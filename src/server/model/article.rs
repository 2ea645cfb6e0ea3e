//! Board article domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ArticleCategory, ArticleStatus};

use crate::{
    model::article::{ArticleCategoryDto, ArticleDto, CreateArticleDto, PaginatedArticlesDto},
    server::model::{
        member::{Member, MemberDetail},
        page::Page,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub author_id: i32,
    pub category: ArticleCategory,
    pub status: ArticleStatus,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn from_entity(entity: entity::board_article::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.member_id,
            category: entity.article_category,
            status: entity.article_status,
            title: entity.article_title,
            content: entity.article_content,
            views: entity.article_views,
            likes: entity.article_likes,
            comments: entity.article_comments,
            rank: entity.article_rank,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

pub fn category_into_dto(category: ArticleCategory) -> ArticleCategoryDto {
    match category {
        ArticleCategory::Free => ArticleCategoryDto::Free,
        ArticleCategory::Recommend => ArticleCategoryDto::Recommend,
        ArticleCategory::News => ArticleCategoryDto::News,
        ArticleCategory::Reviews => ArticleCategoryDto::Reviews,
        ArticleCategory::Qna => ArticleCategoryDto::Qna,
    }
}

pub fn category_from_dto(dto: ArticleCategoryDto) -> ArticleCategory {
    match dto {
        ArticleCategoryDto::Free => ArticleCategory::Free,
        ArticleCategoryDto::Recommend => ArticleCategory::Recommend,
        ArticleCategoryDto::News => ArticleCategory::News,
        ArticleCategoryDto::Reviews => ArticleCategory::Reviews,
        ArticleCategoryDto::Qna => ArticleCategory::Qna,
    }
}

/// Article with its author and the viewer's like flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetail {
    pub article: Article,
    pub author: Option<Member>,
    pub me_liked: bool,
}

impl ArticleDetail {
    pub fn into_dto(self) -> ArticleDto {
        let article = self.article;
        ArticleDto {
            id: article.id,
            member_id: article.author_id,
            article_category: category_into_dto(article.category),
            article_title: article.title,
            article_content: article.content,
            article_views: article.views,
            article_likes: article.likes,
            article_comments: article.comments,
            article_rank: article.rank,
            me_liked: self.me_liked,
            author: self.author.map(|m| MemberDetail::plain(m).into_dto()),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl Page<ArticleDetail> {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            list: self.list.into_iter().map(ArticleDetail::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticleParam {
    pub category: ArticleCategory,
    pub title: String,
    pub content: String,
}

impl CreateArticleParam {
    pub fn from_dto(dto: CreateArticleDto) -> Self {
        Self {
            category: category_from_dto(dto.article_category),
            title: dto.article_title,
            content: dto.article_content,
        }
    }
}
