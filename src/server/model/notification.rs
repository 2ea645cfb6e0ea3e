//! Notification domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationStatus, NotificationType};

use crate::{
    model::notification::{NotificationDto, PaginatedNotificationsDto},
    server::model::{engagement::TargetKind, page::Page},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub notification_type: NotificationType,
    pub status: NotificationStatus,
    pub kind: TargetKind,
    pub target_id: i32,
    pub title: String,
    pub author_id: i32,
    pub receiver_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            notification_type: entity.notification_type,
            status: entity.notification_status,
            kind: TargetKind::from_group(entity.notification_group),
            target_id: entity.target_id,
            title: entity.notification_title,
            author_id: entity.author_id,
            receiver_id: entity.receiver_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        let notification_type = match self.notification_type {
            NotificationType::Like => "LIKE",
            NotificationType::Comment => "COMMENT",
        };

        NotificationDto {
            id: self.id,
            notification_type: notification_type.to_string(),
            read: self.status == NotificationStatus::Read,
            target_kind: self.kind.into_dto(),
            target_id: self.target_id,
            notification_title: self.title,
            author_id: self.author_id,
            created_at: self.created_at,
        }
    }
}

impl Page<Notification> {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            list: self.list.into_iter().map(Notification::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Parameters for a notification about an engagement with the receiver's content.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub notification_type: NotificationType,
    pub kind: TargetKind,
    pub target_id: i32,
    pub author_id: i32,
    pub receiver_id: i32,
}

impl CreateNotificationParam {
    /// Title shown to the receiver.
    pub fn title(&self) -> String {
        let subject = match self.kind {
            TargetKind::Car => "your car",
            TargetKind::Article => "your article",
            TargetKind::Member => "your profile",
        };

        match self.notification_type {
            NotificationType::Like => format!("Someone liked {}!", subject),
            NotificationType::Comment => format!("Someone commented on {}!", subject),
        }
    }
}
