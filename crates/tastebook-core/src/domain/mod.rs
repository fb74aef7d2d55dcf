//! Domain entities - the core business objects.

mod comment;
mod follow;
mod post;
mod restaurant;
mod state;
mod tag;
mod user;

pub use comment::Comment;
pub use follow::FollowEdge;
pub use post::Post;
pub use restaurant::Restaurant;
pub use state::State;
pub use tag::{Tag, TagCount};
pub use user::User;
