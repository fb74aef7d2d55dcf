//! Follow edge entity for SeaORM.
//!
//! One row per directed (follower, followee) pair. The schema backs the
//! store's invariants: a unique index on the ordered pair and a check that
//! the two endpoints differ.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follow_edges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FolloweeId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Followee,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for tastebook_core::domain::FollowEdge {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            follower_id: model.follower_id,
            followee_id: model.followee_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<tastebook_core::domain::FollowEdge> for ActiveModel {
    fn from(edge: tastebook_core::domain::FollowEdge) -> Self {
        Self {
            id: Set(edge.id),
            follower_id: Set(edge.follower_id),
            followee_id: Set(edge.followee_id),
            created_at: Set(edge.created_at.into()),
        }
    }
}
