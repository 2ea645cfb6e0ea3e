//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod article;
pub mod car;
pub mod comment;
pub mod engagement;
pub mod follow;
pub mod member;
pub mod notification;
pub mod page;
pub mod rank;
