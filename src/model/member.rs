use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberTypeDto {
    User,
    Agent,
    Admin,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatusDto {
    Active,
    Block,
    Deleted,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub member_type: MemberTypeDto,
    pub member_status: MemberStatusDto,
    pub member_nick: String,
    pub member_full_name: Option<String>,
    pub member_image: Option<String>,
    pub member_cars: i32,
    pub member_articles: i32,
    pub member_followers: i32,
    pub member_followings: i32,
    pub member_views: i32,
    pub member_likes: i32,
    pub member_comments: i32,
    pub member_rank: i32,
    #[serde(default)]
    pub me_liked: bool,
    #[serde(default)]
    pub me_followed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMembersDto {
    pub list: Vec<MemberDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMemberDto {
    pub member_nick: String,
    pub member_type: MemberTypeDto,
    pub member_full_name: Option<String>,
}

/// Profile fields a member may change on their own account; omitted fields are kept.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateMemberDto {
    pub member_nick: Option<String>,
    pub member_full_name: Option<String>,
    pub member_image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMemberStatusDto {
    pub member_status: MemberStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FollowDto {
    pub follower_id: i32,
    pub following_id: i32,
    pub created_at: DateTime<Utc>,
}
