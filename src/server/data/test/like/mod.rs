use crate::server::{data::like::LikeRepository, model::engagement::TargetKind};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod toggle;
