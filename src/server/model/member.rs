//! Member domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MemberStatus, MemberType};

use crate::{
    model::member::{CreateMemberDto, MemberDto, MemberStatusDto, MemberTypeDto, UpdateMemberDto},
    server::model::page::Page,
};

/// Marketplace member with denormalized counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub member_type: MemberType,
    pub status: MemberStatus,
    pub nick: String,
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub cars: i32,
    pub articles: i32,
    pub followers: i32,
    pub followings: i32,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            member_type: entity.member_type,
            status: entity.member_status,
            nick: entity.member_nick,
            full_name: entity.member_full_name,
            image: entity.member_image,
            cars: entity.member_cars,
            articles: entity.member_articles,
            followers: entity.member_followers,
            followings: entity.member_followings,
            views: entity.member_views,
            likes: entity.member_likes,
            comments: entity.member_comments,
            rank: entity.member_rank,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDetail::plain(self).into_dto()
    }
}

/// Member decorated with the viewer's relationship to them.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDetail {
    pub member: Member,
    pub me_liked: bool,
    pub me_followed: bool,
}

impl MemberDetail {
    pub fn plain(member: Member) -> Self {
        Self {
            member,
            me_liked: false,
            me_followed: false,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        let m = self.member;
        MemberDto {
            id: m.id,
            member_type: member_type_into_dto(m.member_type),
            member_status: member_status_into_dto(m.status),
            member_nick: m.nick,
            member_full_name: m.full_name,
            member_image: m.image,
            member_cars: m.cars,
            member_articles: m.articles,
            member_followers: m.followers,
            member_followings: m.followings,
            member_views: m.views,
            member_likes: m.likes,
            member_comments: m.comments,
            member_rank: m.rank,
            me_liked: self.me_liked,
            me_followed: self.me_followed,
            created_at: m.created_at,
        }
    }
}

pub fn member_type_into_dto(member_type: MemberType) -> MemberTypeDto {
    match member_type {
        MemberType::User => MemberTypeDto::User,
        MemberType::Agent => MemberTypeDto::Agent,
        MemberType::Admin => MemberTypeDto::Admin,
    }
}

pub fn member_type_from_dto(dto: MemberTypeDto) -> MemberType {
    match dto {
        MemberTypeDto::User => MemberType::User,
        MemberTypeDto::Agent => MemberType::Agent,
        MemberTypeDto::Admin => MemberType::Admin,
    }
}

pub fn member_status_into_dto(status: MemberStatus) -> MemberStatusDto {
    match status {
        MemberStatus::Active => MemberStatusDto::Active,
        MemberStatus::Block => MemberStatusDto::Block,
        MemberStatus::Deleted => MemberStatusDto::Deleted,
    }
}

pub fn member_status_from_dto(dto: MemberStatusDto) -> MemberStatus {
    match dto {
        MemberStatusDto::Active => MemberStatus::Active,
        MemberStatusDto::Block => MemberStatus::Block,
        MemberStatusDto::Deleted => MemberStatus::Deleted,
    }
}

/// Parameters for registering a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub nick: String,
    pub member_type: MemberType,
    pub full_name: Option<String>,
}

impl CreateMemberParam {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            nick: dto.member_nick,
            member_type: member_type_from_dto(dto.member_type),
            full_name: dto.member_full_name,
        }
    }
}

/// Profile edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParam {
    pub nick: Option<String>,
    pub full_name: Option<String>,
    pub image: Option<String>,
}

impl UpdateMemberParam {
    pub fn from_dto(dto: UpdateMemberDto) -> Self {
        Self {
            nick: dto.member_nick,
            full_name: dto.member_full_name,
            image: dto.member_image,
        }
    }
}

impl Page<MemberDetail> {
    pub fn into_dto(self) -> crate::model::member::PaginatedMembersDto {
        crate::model::member::PaginatedMembersDto {
            list: self.list.into_iter().map(MemberDetail::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
