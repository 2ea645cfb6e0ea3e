use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankReportDto {
    pub updated: u64,
    pub skipped: u64,
    pub failed: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankJobStateDto {
    /// `IDLE`, `ROLLBACK`, `RECOMPUTE_TARGETS` or `RECOMPUTE_ACTORS`
    pub state: String,
}
