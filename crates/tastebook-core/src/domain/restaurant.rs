use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Restaurant entity - a business that reviews can be attached to.
///
/// Restaurants are deduplicated by (name, city) when auto-created from the
/// free-text review form; the remaining fields are filled in later through
/// the restaurant profile page, optionally by a claiming owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state_id: Option<Uuid>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub cuisine: Option<String>,
    pub cost: Option<String>,
    pub about: Option<String>,
    pub rating: i32,
    pub profile_pic: Option<String>,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Minimal restaurant as created from a review's free-text name and city.
    pub fn new(name: String, city: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            city,
            state_id: None,
            street1: None,
            street2: None,
            zipcode: None,
            phone: None,
            website: None,
            cuisine: None,
            cost: None,
            about: None,
            rating: 0,
            profile_pic: None,
            owner_id: None,
            created_at: Utc::now(),
        }
    }
}
