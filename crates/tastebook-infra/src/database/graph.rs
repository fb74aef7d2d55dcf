//! PostgreSQL follow-edge store.
//!
//! The uniqueness check-then-act is a single `INSERT .. ON CONFLICT DO
//! NOTHING`, and deletion is a single `DELETE`, so concurrent identical
//! requests cannot produce duplicate edges or double deletions; the schema's
//! unique pair index and self-loop check back the same invariants.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use uuid::Uuid;

use tastebook_core::domain::{FollowEdge, User};
use tastebook_core::error::{GraphError, RepoError};
use tastebook_core::ports::FollowGraph;

use super::entity::follow_edge::{self, Entity as FollowEdgeEntity};
use super::entity::user::{self, Entity as UserEntity};

/// SeaORM-backed implementation of the follow graph port.
pub struct PostgresFollowGraph {
    db: DbConn,
}

impl PostgresFollowGraph {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn classify_insert_error(e: DbErr) -> GraphError {
        let msg = e.to_string();
        if msg.contains("foreign key") {
            GraphError::InvalidArgument("unknown user".to_string())
        } else if msg.contains("check") {
            GraphError::InvalidArgument("cannot follow yourself".to_string())
        } else if msg.contains("duplicate") || msg.contains("unique") {
            GraphError::Conflict
        } else {
            GraphError::Storage(RepoError::Query(msg))
        }
    }
}

#[async_trait]
impl FollowGraph for PostgresFollowGraph {
    async fn create_edge(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<Uuid, GraphError> {
        if follower_id == followee_id {
            return Err(GraphError::InvalidArgument(
                "cannot follow yourself".to_string(),
            ));
        }

        let edge = FollowEdge::new(follower_id, followee_id);
        let edge_id = edge.id;

        let result = FollowEdgeEntity::insert(follow_edge::ActiveModel::from(edge))
            .on_conflict(
                OnConflict::columns([
                    follow_edge::Column::FollowerId,
                    follow_edge::Column::FolloweeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(%follower_id, %followee_id, "Follow edge created");
                Ok(edge_id)
            }
            Err(DbErr::RecordNotInserted) => Err(GraphError::Conflict),
            Err(e) => Err(Self::classify_insert_error(e)),
        }
    }

    async fn delete_edge(&self, follower_id: Uuid, followee_id: Uuid) -> Result<(), GraphError> {
        let result = FollowEdgeEntity::delete_many()
            .filter(follow_edge::Column::FollowerId.eq(follower_id))
            .filter(follow_edge::Column::FolloweeId.eq(followee_id))
            .exec(&self.db)
            .await
            .map_err(|e| GraphError::Storage(RepoError::Query(e.to_string())))?;

        if result.rows_affected == 0 {
            return Err(GraphError::NotFound);
        }

        tracing::debug!(%follower_id, %followee_id, "Follow edge removed");
        Ok(())
    }

    async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool, RepoError> {
        let found = FollowEdgeEntity::find()
            .filter(follow_edge::Column::FollowerId.eq(follower_id))
            .filter(follow_edge::Column::FolloweeId.eq(followee_id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn list_following(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError> {
        // Edge creation order, oldest first; user id as tiebreak.
        let result = UserEntity::find()
            .join_rev(JoinType::InnerJoin, follow_edge::Relation::Followee.def())
            .filter(follow_edge::Column::FollowerId.eq(user_id))
            .order_by_asc(follow_edge::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_followers(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .join_rev(JoinType::InnerJoin, follow_edge::Relation::Follower.def())
            .filter(follow_edge::Column::FolloweeId.eq(user_id))
            .order_by_asc(follow_edge::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
