use crate::server::{
    data::stats::StatsRepository,
    model::engagement::{Counter, CounterPolicy, StatisticModifier, TargetKind, TargetSnapshot},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod snapshot;
