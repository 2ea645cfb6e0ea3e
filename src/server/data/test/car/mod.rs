use crate::server::{
    data::car::CarRepository,
    model::{
        car::{CarSort, CreateCarParam, ListCarsParam, UpdateCarParam},
        engagement::Direction,
        page::PageParam,
    },
};
use entity::sea_orm_active_enums::CarStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_unavailable;
mod find_available;
mod find_by_owner;
mod update_fields;
