use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ArticleCategory, ArticleStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub article_category: ArticleCategory,
    pub article_status: ArticleStatus,
    pub article_title: String,
    #[sea_orm(column_type = "Text")]
    pub article_content: String,
    #[sea_orm(default_value = 0)]
    pub article_views: i32,
    #[sea_orm(default_value = 0)]
    pub article_likes: i32,
    #[sea_orm(default_value = 0)]
    pub article_comments: i32,
    #[sea_orm(default_value = 0)]
    pub article_rank: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
