use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One directed follow relation: `follower` follows `followee`.
///
/// Modeled as its own entity rather than a collection inside [`super::User`]
/// so existence and uniqueness checks stay single lookups and the two users
/// don't own each other. Edges are only ever created and destroyed, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(follower_id: Uuid, followee_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }
}
