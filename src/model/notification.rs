use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::comment::TargetKindDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    /// `LIKE` or `COMMENT`
    pub notification_type: String,
    pub read: bool,
    pub target_kind: TargetKindDto,
    pub target_id: i32,
    pub notification_title: String,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub list: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MarkedReadDto {
    pub updated: u64,
}
