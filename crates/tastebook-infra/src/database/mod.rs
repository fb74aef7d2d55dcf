//! Database connection management and SeaORM-backed repositories.

mod connections;
pub mod entity;
mod graph;
mod postgres_base;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbConn;
pub use graph::PostgresFollowGraph;
pub use postgres_base::PostgresBaseRepository;
pub use postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, PostgresRestaurantRepository,
    PostgresStateRepository, PostgresTagRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;
