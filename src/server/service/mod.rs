//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They check existence and
//! ownership, open the transactions that pair engagement records with their counter
//! updates, and run best-effort side effects such as notifications after commit.
//!
//! Every counter change goes through [`stats::StatsEditor`].

pub mod board_article;
pub mod car;
pub mod comment;
pub mod engagement;
pub mod follow;
pub mod member;
pub mod notification;
pub mod projection;
pub mod rank;
pub mod stats;

#[cfg(test)]
mod test;
