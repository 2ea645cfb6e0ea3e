use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{MemberStatus, MemberType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_type: MemberType,
    pub member_status: MemberStatus,
    #[sea_orm(unique)]
    pub member_nick: String,
    pub member_full_name: Option<String>,
    pub member_image: Option<String>,
    #[sea_orm(default_value = 0)]
    pub member_cars: i32,
    #[sea_orm(default_value = 0)]
    pub member_articles: i32,
    #[sea_orm(default_value = 0)]
    pub member_followers: i32,
    #[sea_orm(default_value = 0)]
    pub member_followings: i32,
    #[sea_orm(default_value = 0)]
    pub member_views: i32,
    #[sea_orm(default_value = 0)]
    pub member_likes: i32,
    #[sea_orm(default_value = 0)]
    pub member_comments: i32,
    #[sea_orm(default_value = 0)]
    pub member_rank: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
