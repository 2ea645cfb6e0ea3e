use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::CarStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub car_status: CarStatus,
    pub brand: String,
    pub model: String,
    pub car_year: i32,
    pub car_price: i64,
    #[sea_orm(default_value = 0)]
    pub discount_percent: i32,
    pub discounted_price: i64,
    #[sea_orm(default_value = 0)]
    pub car_views: i32,
    #[sea_orm(default_value = 0)]
    pub car_likes: i32,
    #[sea_orm(default_value = 0)]
    pub car_comments: i32,
    #[sea_orm(default_value = 0)]
    pub car_rank: i32,
    pub sold_at: Option<DateTimeUtc>,
    pub deleted_at: Option<DateTimeUtc>,
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
