use entity::sea_orm_active_enums::{MemberStatus, MemberType, NotificationType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{follow::FollowRepository, like::LikeRepository, member::MemberRepository},
    error::AppError,
    model::{
        engagement::{CounterPolicy, LikeToggle, TargetKind},
        member::{CreateMemberParam, Member, MemberDetail, UpdateMemberParam},
        notification::CreateNotificationParam,
        page::{Page, PageParam},
    },
    service::{engagement::EngagementService, notification::NotificationService},
};

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member {} not found", id))
}

/// Rejects a provided value whose trimmed length falls outside `min..=max` characters.
fn check_length(field: &str, value: Option<&str>, min: usize, max: usize) -> Result<(), AppError> {
    match value.map(|v| v.trim().chars().count()) {
        Some(len) if len < min || len > max => Err(AppError::ValidationFailed(format!(
            "{} must be {} to {} characters",
            field, min, max
        ))),
        _ => Ok(()),
    }
}

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
    policy: CounterPolicy,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: CounterPolicy) -> Self {
        Self { db, policy }
    }

    /// Registers a user or agent.
    ///
    /// # Returns
    /// - `Ok(Member)` - Created member
    /// - `Err(AppError::ValidationFailed)` - Blank nickname or an attempt to self-register as admin
    /// - `Err(AppError::CreateConflict)` - Nickname already taken
    pub async fn register(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        if param.nick.trim().is_empty() {
            return Err(AppError::ValidationFailed("Nickname is required".to_string()));
        }
        if param.member_type == MemberType::Admin {
            return Err(AppError::ValidationFailed(
                "Admin accounts cannot be registered".to_string(),
            ));
        }

        let member = MemberRepository::new(self.db)
            .create(param)
            .await
            .map_err(|err| AppError::from_insert(err, "Nickname is already in use"))?;

        tracing::info!(member_id = member.id, "member registered");

        Ok(member)
    }

    /// Gets an active member, recording the viewer's first view of someone else's profile.
    pub async fn get(&self, viewer: Option<&Member>, id: i32) -> Result<MemberDetail, AppError> {
        let member = MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(Member::is_active)
            .ok_or_else(|| member_not_found(id))?;

        let Some(viewer) = viewer else {
            return Ok(MemberDetail::plain(member));
        };

        let txn = self.db.begin().await?;
        let engagement = EngagementService::new(&txn, self.policy);

        let counted = viewer.id != id
            && engagement
                .apply_view(viewer.id, TargetKind::Member, id)
                .await?;
        let me_liked = engagement
            .check_like_existence(viewer.id, TargetKind::Member, id)
            .await?;
        let me_followed = FollowRepository::new(&txn).exists(viewer.id, id).await?;
        let member = if counted {
            MemberRepository::new(&txn)
                .find_by_id(id)
                .await?
                .ok_or_else(|| member_not_found(id))?
        } else {
            member
        };

        txn.commit().await?;

        Ok(MemberDetail {
            member,
            me_liked,
            me_followed,
        })
    }

    /// Pages active agents by rank, highest first.
    pub async fn top_agents(
        &self,
        viewer: Option<&Member>,
        page: PageParam,
    ) -> Result<Page<MemberDetail>, AppError> {
        let agents = MemberRepository::new(self.db).find_top_agents(page).await?;

        self.decorate(viewer.map(|m| m.id), agents).await
    }

    /// Attaches the viewer's like and follow flags to a page of members.
    pub async fn decorate(
        &self,
        viewer_id: Option<i32>,
        members: Page<Member>,
    ) -> Result<Page<MemberDetail>, AppError> {
        let Some(viewer_id) = viewer_id else {
            return Ok(members.map(MemberDetail::plain));
        };

        let likes = LikeRepository::new(self.db);
        let follows = FollowRepository::new(self.db);

        let mut list = Vec::with_capacity(members.list.len());
        for member in members.list {
            let me_liked = likes
                .exists(viewer_id, TargetKind::Member, member.id)
                .await?;
            let me_followed = follows.exists(viewer_id, member.id).await?;
            list.push(MemberDetail {
                member,
                me_liked,
                me_followed,
            });
        }

        Ok(Page {
            list,
            total: members.total,
            page: members.page,
            limit: members.limit,
        })
    }

    /// Toggles the member's like on another active member and notifies them of new likes.
    pub async fn like(&self, member: &Member, id: i32) -> Result<LikeToggle, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(Member::is_active)
            .ok_or_else(|| member_not_found(id))?;

        let txn = self.db.begin().await?;
        let toggle = EngagementService::new(&txn, self.policy)
            .apply_like(member.id, TargetKind::Member, id)
            .await?;
        txn.commit().await?;

        if toggle.liked() {
            NotificationService::new(self.db)
                .notify(CreateNotificationParam {
                    notification_type: NotificationType::Like,
                    kind: TargetKind::Member,
                    target_id: id,
                    author_id: member.id,
                    receiver_id: id,
                })
                .await;
        }

        Ok(toggle)
    }

    /// Edits the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(AppError::ValidationFailed)` - Nickname outside 3..=12 characters, or full
    ///   name or image outside 3..=100
    /// - `Err(AppError::CreateConflict)` - Nickname already taken
    /// - `Err(AppError::NotFound)` - Member is no longer active
    pub async fn update_profile(
        &self,
        member: &Member,
        param: UpdateMemberParam,
    ) -> Result<Member, AppError> {
        check_length("Nickname", param.nick.as_deref(), 3, 12)?;
        check_length("Full name", param.full_name.as_deref(), 3, 100)?;
        check_length("Image", param.image.as_deref(), 3, 100)?;

        let param = UpdateMemberParam {
            nick: param.nick.map(|v| v.trim().to_string()),
            full_name: param.full_name.map(|v| v.trim().to_string()),
            image: param.image.map(|v| v.trim().to_string()),
        };

        let updated = MemberRepository::new(self.db)
            .update_profile(member.id, param)
            .await
            .map_err(|err| AppError::from_insert(err, "Nickname is already in use"))?
            .ok_or_else(|| member_not_found(member.id))?;

        tracing::info!(member_id = member.id, "member profile updated");

        Ok(updated)
    }

    /// Blocks, deletes or reactivates a member.
    pub async fn update_status(&self, id: i32, status: MemberStatus) -> Result<Member, AppError> {
        let member = MemberRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| member_not_found(id))?;

        tracing::info!(member_id = id, status = ?status, "member status changed");

        Ok(member)
    }
}
