use crate::server::data::follow::FollowRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
