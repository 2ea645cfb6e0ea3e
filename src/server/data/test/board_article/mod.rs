use crate::server::{
    data::board_article::ArticleRepository,
    model::{article::CreateArticleParam, page::PageParam},
};
use entity::sea_orm_active_enums::{ArticleCategory, ArticleStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active;
mod mark_deleted;
