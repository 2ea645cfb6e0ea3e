//! Member repository.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{MemberStatus, MemberType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    member::{CreateMemberParam, Member, UpdateMemberParam},
    page::{Page, PageParam},
};

/// Repository providing database operations for members.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active member with zeroed counters.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including a unique violation on the nickname
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let now = Utc::now();
        let entity = entity::member::ActiveModel {
            member_type: ActiveValue::Set(param.member_type),
            member_status: ActiveValue::Set(MemberStatus::Active),
            member_nick: ActiveValue::Set(param.nick),
            member_full_name: ActiveValue::Set(param.full_name),
            member_image: ActiveValue::Set(None),
            member_cars: ActiveValue::Set(0),
            member_articles: ActiveValue::Set(0),
            member_followers: ActiveValue::Set(0),
            member_followings: ActiveValue::Set(0),
            member_views: ActiveValue::Set(0),
            member_likes: ActiveValue::Set(0),
            member_comments: ActiveValue::Set(0),
            member_rank: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Loads members by id, keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Member>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Member::from_entity(e)))
            .collect())
    }

    /// Pages active agents by rank, highest first, ties broken by id ascending.
    pub async fn find_top_agents(&self, page: PageParam) -> Result<Page<Member>, DbErr> {
        let paginator = entity::prelude::Member::find()
            .filter(entity::member::Column::MemberType.eq(MemberType::Agent))
            .filter(entity::member::Column::MemberStatus.eq(MemberStatus::Active))
            .order_by_desc(entity::member::Column::MemberRank)
            .order_by_asc(entity::member::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let members = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(
            members.into_iter().map(Member::from_entity).collect(),
            total,
            page,
        ))
    }

    /// Writes the given profile fields of an active member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated member
    /// - `Ok(None)` - No active member with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on the nickname
    pub async fn update_profile(
        &self,
        id: i32,
        param: UpdateMemberParam,
    ) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::Member::find_by_id(id)
            .filter(entity::member::Column::MemberStatus.eq(MemberStatus::Active))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        if let Some(nick) = param.nick {
            active.member_nick = ActiveValue::Set(nick);
        }
        if let Some(full_name) = param.full_name {
            active.member_full_name = ActiveValue::Set(Some(full_name));
        }
        if let Some(image) = param.image {
            active.member_image = ActiveValue::Set(Some(image));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }

    /// Sets a member's status.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, id: i32, status: MemberStatus) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        active.member_status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }
}
