//! Application state - shared across all handlers.

use std::sync::Arc;

use tastebook_core::ports::{
    Cache, CommentRepository, PostRepository, RestaurantRepository, StateRepository,
    TagRepository, UserRepository,
};
use tastebook_core::social::SocialService;
use tastebook_infra::cache::InMemoryCache;
use tastebook_infra::database::{
    DbConn, PostgresCommentRepository, PostgresFollowGraph, PostgresPostRepository,
    PostgresRestaurantRepository, PostgresStateRepository, PostgresTagRepository,
    PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub states: Arc<dyn StateRepository>,
    pub social: SocialService,
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Wire every repository and service onto one connection pool.
    pub fn new(db: DbConn) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));
        let graph = Arc::new(PostgresFollowGraph::new(db.clone()));
        let social = SocialService::new(graph, users.clone());

        tracing::info!("Application state initialized");

        Self {
            users,
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            comments: Arc::new(PostgresCommentRepository::new(db.clone())),
            restaurants: Arc::new(PostgresRestaurantRepository::new(db.clone())),
            tags: Arc::new(PostgresTagRepository::new(db.clone())),
            states: Arc::new(PostgresStateRepository::new(db)),
            social,
            cache: Arc::new(InMemoryCache::new()),
        }
    }
}
