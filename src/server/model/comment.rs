//! Comment domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CommentStatus;

use crate::{
    model::comment::{CommentDto, CreateCommentDto, PaginatedCommentsDto},
    server::model::{engagement::TargetKind, page::Page},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub status: CommentStatus,
    pub kind: TargetKind,
    pub target_id: i32,
    pub author_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            status: entity.comment_status,
            kind: TargetKind::from_group(entity.comment_group),
            target_id: entity.target_id,
            author_id: entity.member_id,
            content: entity.comment_content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            target_kind: self.kind.into_dto(),
            target_id: self.target_id,
            member_id: self.author_id,
            comment_content: self.content,
            created_at: self.created_at,
        }
    }
}

impl Page<Comment> {
    pub fn into_dto(self) -> PaginatedCommentsDto {
        PaginatedCommentsDto {
            list: self.list.into_iter().map(Comment::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub kind: TargetKind,
    pub target_id: i32,
    pub content: String,
}

impl CreateCommentParam {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            kind: TargetKind::from_dto(dto.target_kind),
            target_id: dto.target_id,
            content: dto.comment_content,
        }
    }
}
