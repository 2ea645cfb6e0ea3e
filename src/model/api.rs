use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Result of a like toggle: `+1` when a like was added, `-1` when removed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LikeToggleDto {
    pub delta: i32,
    pub liked: bool,
    /// Target's like counter after the toggle.
    pub likes: i32,
}

/// Sort direction accepted by listing endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionDto {
    Asc,
    Desc,
}
