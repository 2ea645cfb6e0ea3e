//! SeaORM entity definitions for the marketplace schema.

pub mod prelude;

pub mod board_article;
pub mod car;
pub mod comment;
pub mod follow;
pub mod like;
pub mod member;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod view;
