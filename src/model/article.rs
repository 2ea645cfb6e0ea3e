use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::MemberDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleCategoryDto {
    Free,
    Recommend,
    News,
    Reviews,
    Qna,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub member_id: i32,
    pub article_category: ArticleCategoryDto,
    pub article_title: String,
    pub article_content: String,
    pub article_views: i32,
    pub article_likes: i32,
    pub article_comments: i32,
    pub article_rank: i32,
    #[serde(default)]
    pub me_liked: bool,
    pub author: Option<MemberDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedArticlesDto {
    pub list: Vec<ArticleDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateArticleDto {
    pub article_category: ArticleCategoryDto,
    pub article_title: String,
    pub article_content: String,
}
