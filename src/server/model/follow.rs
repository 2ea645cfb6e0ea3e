//! Follow subscription domain model.

use chrono::{DateTime, Utc};

use crate::model::member::FollowDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Follow {
    pub id: i32,
    pub follower_id: i32,
    pub following_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn from_entity(entity: entity::follow::Model) -> Self {
        Self {
            id: entity.id,
            follower_id: entity.follower_id,
            following_id: entity.following_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FollowDto {
        FollowDto {
            follower_id: self.follower_id,
            following_id: self.following_id,
            created_at: self.created_at,
        }
    }
}
