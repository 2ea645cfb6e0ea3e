//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database handle is a pool, the
//! authenticator sits behind an `Arc` and the rank job shares its lock and state.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    middleware::auth::Authenticator, model::engagement::CounterPolicy, service::rank::RankJob,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Treatment of counter decrements below zero, fixed at startup.
    pub counter_policy: CounterPolicy,

    /// Resolves bearer credentials to member ids.
    pub authenticator: Arc<dyn Authenticator>,

    /// Rank job shared with the scheduler so manual triggers and cron slots never overlap.
    pub rank_job: RankJob,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `counter_policy` - Counter floor policy from configuration
    /// - `authenticator` - Bearer credential resolver
    /// - `rank_job` - Rank recomputation job also driven by the scheduler
    pub fn new(
        db: DatabaseConnection,
        counter_policy: CounterPolicy,
        authenticator: Arc<dyn Authenticator>,
        rank_job: RankJob,
    ) -> Self {
        Self {
            db,
            counter_policy,
            authenticator,
            rank_job,
        }
    }
}
