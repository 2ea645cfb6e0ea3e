use crate::server::{data::view::ViewRepository, model::engagement::TargetKind};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod record;
