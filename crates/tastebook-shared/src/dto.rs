//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub about_me: Option<String>,
    pub profile_pic: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to edit a user profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub about_me: Option<String>,
    pub profile_pic: Option<String>,
    pub city: Option<String>,
    /// State abbreviation, resolved find-or-create server side.
    pub state: Option<String>,
}

/// One state option for the profile edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    pub id: Uuid,
    pub name: String,
}

/// A profile page: the user plus their recent activity and a sample of their
/// social graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub reviews: Vec<ReviewResponse>,
    pub following: Vec<UserResponse>,
    pub followers: Vec<UserResponse>,
}

/// Request body for follow/unfollow. The follower defaults to the acting
/// user; admins may name another user to act on their behalf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowRequest {
    pub follower_id: Option<Uuid>,
}

/// Boundary-facing result of a follow or unfollow request.
///
/// Unauthenticated and unauthorized callers receive `success: false` rather
/// than an error status; the `name` is the followee's display name for UI
/// feedback, empty when it could not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub success: bool,
    pub name: String,
}

/// Whether one user follows another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowStatusResponse {
    pub following: bool,
}

/// Request to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReviewRequest {
    pub title: String,
    pub content: String,
    /// 0 or absent means unrated.
    pub rating: Option<i32>,
    /// Free-text restaurant name; resolved find-or-create with `city`.
    pub restaurant: Option<String>,
    pub city: Option<String>,
    pub pic: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to edit a review. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub pic: Option<String>,
}

/// A review as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub rating: i32,
    pub like_count: i32,
    pub pic: Option<String>,
    pub restaurant_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub posted_at: DateTime<Utc>,
}

/// The front page: the newest review, the next few after it, and the
/// featured review of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontPageResponse {
    pub front: Option<ReviewResponse>,
    pub older: Vec<ReviewResponse>,
    pub review_of_the_day: Option<ReviewResponse>,
}

/// Request to comment on a review. `author` is the guest display name and is
/// required when the caller is not logged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommentRequest {
    pub author: Option<String>,
    pub content: String,
}

/// A comment as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

/// A restaurant as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub cuisine: Option<String>,
    pub cost: Option<String>,
    pub about: Option<String>,
    pub rating: i32,
    pub owner_id: Option<Uuid>,
}

/// Request to edit a restaurant profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub zipcode: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub cuisine: Option<String>,
    pub cost: Option<String>,
    pub about: Option<String>,
    pub profile_pic: Option<String>,
}

/// Restaurant search results, with a "did you mean" suggestion when the
/// query found nothing but a prefix match exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RestaurantResponse>,
    pub suggestion: Option<String>,
}

/// One tag cloud entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCloudEntry {
    pub name: String,
    pub count: i64,
}
