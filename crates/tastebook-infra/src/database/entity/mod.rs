//! SeaORM entities and their conversions to the domain types.

pub mod comment;
pub mod follow_edge;
pub mod post;
pub mod post_tag;
pub mod restaurant;
pub mod state;
pub mod tag;
pub mod user;
