//! Wire DTOs shared by the HTTP controllers and API documentation.

pub mod api;
pub mod article;
pub mod car;
pub mod comment;
pub mod member;
pub mod notification;
pub mod rank;
