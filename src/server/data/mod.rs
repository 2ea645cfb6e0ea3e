//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each domain and convert entity models into domain
//! models at the boundary. They are generic over `ConnectionTrait` so the same repository runs
//! on the pool or inside a transaction opened by a service.

pub mod board_article;
pub mod car;
pub mod comment;
pub mod follow;
pub mod like;
pub mod member;
pub mod notification;
pub mod projection;
pub mod rank;
pub mod stats;
pub mod view;

#[cfg(test)]
mod test;
