use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post, Restaurant, State, Tag, TagCount, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts by one author, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// All posts for one restaurant, newest first.
    async fn find_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// A page of posts across all authors, newest first.
    async fn recent(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// The highest-rated posts, best first.
    async fn top_rated(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Posts carrying the given tag, newest first.
    async fn find_tagged_with(&self, tag: &str) -> Result<Vec<Post>, RepoError>;

    /// Tags attached to one post.
    async fn tags_for(&self, post_id: Uuid) -> Result<Vec<Tag>, RepoError>;

    /// Attach a tag by name, creating the tag if needed. Tagging the same
    /// post with the same name twice is a no-op.
    async fn tag_with(&self, post_id: Uuid, name: &str) -> Result<Tag, RepoError>;

    /// Bump the like counter by one.
    async fn increment_likes(&self, post_id: Uuid) -> Result<(), RepoError>;
}

/// Comment repository. Comments are insert-only.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments on one post, oldest first.
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Comments left by one logged-in user, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

/// Restaurant repository.
#[async_trait]
pub trait RestaurantRepository: BaseRepository<Restaurant, Uuid> {
    /// Resolve a restaurant by exact (name, city), creating it when absent.
    async fn find_or_create(&self, name: &str, city: &str) -> Result<Restaurant, RepoError>;

    /// Restaurants whose name contains the given fragment.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Restaurant>, RepoError>;

    /// Restaurants in cities containing the given fragment.
    async fn search_by_city(&self, city: &str) -> Result<Vec<Restaurant>, RepoError>;

    /// Restaurant names starting with the given prefix, for "did you mean"
    /// suggestions.
    async fn names_with_prefix(&self, prefix: &str) -> Result<Vec<String>, RepoError>;

    /// Distinct cities that have at least one restaurant.
    async fn cities(&self) -> Result<Vec<String>, RepoError>;

    /// Distinct cities whose restaurants have at least one review.
    async fn cities_with_reviews(&self) -> Result<Vec<String>, RepoError>;
}

/// Tag repository. Tags come into existence through
/// [`PostRepository::tag_with`]; this trait only reads them.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Tag cloud: every tag in use with its post count, alphabetical.
    async fn cloud(&self) -> Result<Vec<TagCount>, RepoError>;
}

/// State repository.
#[async_trait]
pub trait StateRepository: BaseRepository<State, Uuid> {
    /// Resolve a state by name, creating it when absent.
    async fn find_or_create(&self, name: &str) -> Result<State, RepoError>;

    /// All states present in the database, alphabetical.
    async fn list(&self) -> Result<Vec<State>, RepoError>;
}
