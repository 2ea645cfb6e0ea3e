//! Notification repository.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    notification::{CreateNotificationParam, Notification},
    page::{Page, PageParam},
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let now = Utc::now();
        let entity = entity::notification::ActiveModel {
            notification_type: ActiveValue::Set(param.notification_type),
            notification_status: ActiveValue::Set(NotificationStatus::Wait),
            notification_group: ActiveValue::Set(param.kind.group()),
            notification_title: ActiveValue::Set(param.title()),
            author_id: ActiveValue::Set(param.author_id),
            receiver_id: ActiveValue::Set(param.receiver_id),
            target_id: ActiveValue::Set(param.target_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Pages a member's notifications, newest first.
    pub async fn find_by_receiver(
        &self,
        receiver_id: i32,
        page: PageParam,
    ) -> Result<Page<Notification>, DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::ReceiverId.eq(receiver_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            notifications
                .into_iter()
                .map(Notification::from_entity)
                .collect(),
            total,
            page,
        ))
    }

    /// Marks unread notifications of `receiver_id` as read, optionally just one.
    ///
    /// # Arguments
    /// - `receiver_id` - Owner of the notifications
    /// - `id` - A single notification, or `None` for all of them
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, receiver_id: i32, id: Option<i32>) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::NotificationStatus,
                sea_orm::sea_query::Expr::value(NotificationStatus::Read),
            )
            .col_expr(
                entity::notification::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::notification::Column::ReceiverId.eq(receiver_id))
            .filter(entity::notification::Column::NotificationStatus.eq(NotificationStatus::Wait));

        if let Some(id) = id {
            update = update.filter(entity::notification::Column::Id.eq(id));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
