//! Follow graph port - durable storage and lookup of directed follow edges.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;
use crate::error::{GraphError, RepoError};

/// Storage for the directed follow graph between users.
///
/// Invariants the store enforces:
/// - no self-loop: follower != followee,
/// - at most one edge per ordered (follower, followee) pair,
/// - both endpoints reference existing users.
///
/// `create_edge` and `delete_edge` must execute their existence check and
/// mutation as one atomic unit so concurrent identical requests cannot
/// produce duplicate edges or double deletions.
///
/// Listings are returned in edge creation order, oldest first, with the user
/// id as tiebreak. Callers must not rely on any stronger ordering.
#[async_trait]
pub trait FollowGraph: Send + Sync {
    /// Persist a new edge, returning its id.
    ///
    /// Fails with [`GraphError::Conflict`] when the ordered pair already
    /// exists and [`GraphError::InvalidArgument`] on a self-loop or a missing
    /// endpoint.
    async fn create_edge(&self, follower_id: Uuid, followee_id: Uuid)
    -> Result<Uuid, GraphError>;

    /// Remove an edge. Fails with [`GraphError::NotFound`] when no such edge
    /// exists; deleting the same edge twice surfaces `NotFound` the second
    /// time rather than silently succeeding.
    async fn delete_edge(&self, follower_id: Uuid, followee_id: Uuid) -> Result<(), GraphError>;

    /// Whether an edge exists for the exact ordered pair. No side effects.
    async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool, RepoError>;

    /// Everyone `user_id` follows, optionally capped at `limit`.
    async fn list_following(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError>;

    /// Everyone following `user_id`, optionally capped at `limit`.
    async fn list_followers(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError>;
}
