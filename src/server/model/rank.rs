//! Rank recomputation state machine types.

use std::fmt;

use crate::model::rank::{RankJobStateDto, RankReportDto};

/// Phase a rank job is executing. `Idle` between runs.
///
/// A full run walks `Idle -> Rollback -> RecomputeTargets -> RecomputeActors -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankJobState {
    #[default]
    Idle,
    Rollback,
    RecomputeTargets,
    RecomputeActors,
}

impl RankJobState {
    /// Phases of one full run in execution order.
    pub const PHASES: [RankJobState; 3] = [
        RankJobState::Rollback,
        RankJobState::RecomputeTargets,
        RankJobState::RecomputeActors,
    ];

    pub fn into_dto(self) -> RankJobStateDto {
        RankJobStateDto {
            state: self.to_string(),
        }
    }
}

impl fmt::Display for RankJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "IDLE",
            Self::Rollback => "ROLLBACK",
            Self::RecomputeTargets => "RECOMPUTE_TARGETS",
            Self::RecomputeActors => "RECOMPUTE_ACTORS",
        };
        f.write_str(name)
    }
}

/// Outcome counts of one or more phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankReport {
    /// Rows written.
    pub updated: u64,
    /// Rows whose rank was already non-zero when written.
    pub skipped: u64,
    /// Rows whose update failed and was logged.
    pub failed: u64,
}

impl RankReport {
    pub fn merge(self, other: RankReport) -> RankReport {
        RankReport {
            updated: self.updated + other.updated,
            skipped: self.skipped + other.skipped,
            failed: self.failed + other.failed,
        }
    }

    pub fn into_dto(self) -> RankReportDto {
        RankReportDto {
            updated: self.updated,
            skipped: self.skipped,
            failed: self.failed,
        }
    }
}

/// Car popularity: `likes * 2 + views`.
///
/// Computed in `i64` and clamped into `i32`, so counters near the limit saturate.
pub fn target_rank(likes: i32, views: i32) -> i32 {
    clamp_rank(i64::from(likes) * 2 + i64::from(views))
}

/// Agent popularity: `cars * 5 + articles * 3 + likes * 2 + views`.
pub fn actor_rank(cars: i32, articles: i32, likes: i32, views: i32) -> i32 {
    clamp_rank(
        i64::from(cars) * 5 + i64::from(articles) * 3 + i64::from(likes) * 2 + i64::from(views),
    )
}

fn clamp_rank(rank: i64) -> i32 {
    rank.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
