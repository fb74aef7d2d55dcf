//! Review-of-the-day selection.
//!
//! The front page features one review, rotated daily: take the seven
//! best-rated reviews and index them by the weekday modulo however many were
//! actually found. With no reviews there is no feature.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::Post;

/// How many top reviews participate in the rotation.
pub const ROTATION_SIZE: u64 = 7;

/// Pick today's featured review from the rated shortlist.
///
/// `top_reviews` must already be ordered best-first (see
/// [`crate::ports::PostRepository::top_rated`]).
pub fn review_of_the_day(top_reviews: &[Post], today: DateTime<Utc>) -> Option<&Post> {
    if top_reviews.is_empty() {
        return None;
    }
    // Weekday as 1..=7 matching the day-of-week rotation of the front page.
    let weekday = today.weekday().number_from_monday() as usize;
    top_reviews.get(weekday % top_reviews.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn reviews(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| {
                let mut post = Post::new(Uuid::new_v4(), format!("review {i}"), "body".into());
                post.rating = 5 - i as i32;
                post
            })
            .collect()
    }

    #[test]
    fn empty_shortlist_has_no_feature() {
        assert!(review_of_the_day(&[], Utc::now()).is_none());
    }

    #[test]
    fn rotation_is_stable_within_a_day() {
        let posts = reviews(7);
        let day = Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap();
        let morning = review_of_the_day(&posts, day).unwrap();
        let evening =
            review_of_the_day(&posts, Utc.with_ymd_and_hms(2026, 8, 26, 21, 0, 0).unwrap())
                .unwrap();
        assert_eq!(morning.id, evening.id);
    }

    #[test]
    fn rotation_wraps_when_fewer_than_seven_reviews() {
        let posts = reviews(3);
        // Every day must land inside the shortlist, whatever its size.
        for day in 1..=7 {
            let date = Utc.with_ymd_and_hms(2026, 6, day, 12, 0, 0).unwrap();
            let pick = review_of_the_day(&posts, date).unwrap();
            assert!(posts.iter().any(|p| p.id == pick.id));
        }
    }

    #[test]
    fn single_review_is_always_featured() {
        let posts = reviews(1);
        for day in 1..=7 {
            let date = Utc.with_ymd_and_hms(2026, 6, day, 12, 0, 0).unwrap();
            assert_eq!(review_of_the_day(&posts, date).unwrap().id, posts[0].id);
        }
    }
}
