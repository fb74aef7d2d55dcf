use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - an account identified by its email address.
///
/// About-me text, the profile picture reference, city, and state cannot be set
/// at signup; they are filled in later through profile edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub about_me: Option<String>,
    pub profile_pic: Option<String>,
    pub city: Option<String>,
    pub state_id: Option<Uuid>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            about_me: None,
            profile_pic: None,
            city: None,
            state_id: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown in user-facing confirmations. Falls back to the email
    /// address when the first name is blank.
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_first_name() {
        let user = User::new(
            "ada@example.com".into(),
            "hash".into(),
            "Ada".into(),
            "Lovelace".into(),
        );
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = User::new("ada@example.com".into(), "hash".into(), "".into(), "".into());
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
