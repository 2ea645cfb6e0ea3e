use crate::server::{
    data::{
        follow::FollowRepository, like::LikeRepository, projection::ProjectionRepository,
        view::ViewRepository,
    },
    model::{
        engagement::{EngagementSource, TargetKind},
        page::PageParam,
    },
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod favorites;
mod follows;
