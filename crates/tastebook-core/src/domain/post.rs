use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a review authored by a user.
///
/// A post is the same thing as a review. It may reference a restaurant and
/// carry a rating, but neither is required; users can also post plain updates
/// to their profile page. A rating of 0 means "unrated".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub rating: i32,
    pub like_count: i32,
    pub pic: Option<String>,
    pub restaurant_id: Option<Uuid>,
    pub posted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            rating: 0,
            like_count: 0,
            pic: None,
            restaurant_id: None,
            posted_at: now,
            updated_at: now,
        }
    }

    pub fn with_restaurant(mut self, restaurant_id: Uuid, rating: i32) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self.rating = rating;
        self
    }

    pub fn with_pic(mut self, pic: String) -> Self {
        self.pic = Some(pic);
        self
    }
}
