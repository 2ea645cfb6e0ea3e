use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CreateCommentParam, engagement::TargetKind, page::PageParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_target;
mod mark_deleted;

fn comment_on(kind: TargetKind, target_id: i32, content: &str) -> CreateCommentParam {
    CreateCommentParam {
        kind,
        target_id,
        content: content.to_string(),
    }
}
