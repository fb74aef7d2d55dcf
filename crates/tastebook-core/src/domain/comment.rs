use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - attached to exactly one post.
///
/// A comment is authored either by a logged-in user (`author_id`) or by a
/// guest (`guest_name`), never both. The constructors are the only way to
/// build one, so the exclusivity holds by construction. Comments are
/// immutable once posted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    /// Comment left by a logged-in user.
    pub fn from_user(post_id: Uuid, author_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id: Some(author_id),
            guest_name: None,
            content,
            posted_at: Utc::now(),
        }
    }

    /// Comment left by a guest under a free-text display name.
    pub fn from_guest(post_id: Uuid, guest_name: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id: None,
            guest_name: Some(guest_name),
            content,
            posted_at: Utc::now(),
        }
    }

    /// Snippet of the comment for list views: at most 50 characters, with an
    /// ellipsis when truncated.
    pub fn snippet(&self) -> String {
        if self.content.chars().count() > 50 {
            let head: String = self.content.chars().take(50).collect();
            format!("{head}...")
        } else {
            self.content.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_and_user_comments_are_exclusive() {
        let post = Uuid::new_v4();
        let by_user = Comment::from_user(post, Uuid::new_v4(), "tasty".into());
        assert!(by_user.author_id.is_some());
        assert!(by_user.guest_name.is_none());

        let by_guest = Comment::from_guest(post, "anon".into(), "tasty".into());
        assert!(by_guest.author_id.is_none());
        assert_eq!(by_guest.guest_name.as_deref(), Some("anon"));
    }

    #[test]
    fn snippet_truncates_long_comments() {
        let long = "x".repeat(80);
        let comment = Comment::from_guest(Uuid::new_v4(), "anon".into(), long);
        assert_eq!(comment.snippet().chars().count(), 53);
        assert!(comment.snippet().ends_with("..."));

        let short = Comment::from_guest(Uuid::new_v4(), "anon".into(), "ok".into());
        assert_eq!(short.snippet(), "ok");
    }
}
