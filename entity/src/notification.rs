use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EngagementGroup, NotificationStatus, NotificationType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub notification_type: NotificationType,
    pub notification_status: NotificationStatus,
    pub notification_group: EngagementGroup,
    pub notification_title: String,
    pub author_id: i32,
    pub receiver_id: i32,
    pub target_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::ReceiverId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Receiver,
}

impl ActiveModelBehavior for ActiveModel {}
