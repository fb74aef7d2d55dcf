//! Review handlers: the front page, CRUD, and likes.

use std::time::Duration;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tastebook_core::domain::Post;
use tastebook_core::reviews::{ROTATION_SIZE, review_of_the_day};
use tastebook_shared::dto::{
    FrontPageResponse, NewReviewRequest, ReviewResponse, UpdateReviewRequest,
};

use crate::handlers::review_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// How many older reviews the front page lists below the newest one.
const FRONT_PAGE_OLDER: u64 = 10;

const ROTD_TTL: Duration = Duration::from_secs(3600);

/// Today's featured review, memoized per day so the top-rated query does not
/// run on every front page hit.
async fn featured_review(state: &AppState) -> AppResult<Option<ReviewResponse>> {
    let today = chrono::Utc::now();
    let key = format!("rotd:{}", today.format("%Y-%m-%d"));

    if let Some(cached) = state.cache.get(&key).await {
        if let Ok(review) = serde_json::from_str(&cached) {
            return Ok(Some(review));
        }
        tracing::warn!("Discarding unreadable cached review-of-the-day");
    }

    let top = state.posts.top_rated(ROTATION_SIZE).await?;
    let Some(pick) = review_of_the_day(&top, today) else {
        return Ok(None);
    };

    let review = review_response(state, pick.clone()).await?;
    match serde_json::to_string(&review) {
        Ok(json) => {
            if let Err(e) = state.cache.set(&key, &json, Some(ROTD_TTL)).await {
                tracing::warn!("Failed to cache review-of-the-day: {}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to serialize review-of-the-day: {}", e),
    }

    Ok(Some(review))
}

/// GET /api/reviews - the front page.
pub async fn front_page(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut recent = state.posts.recent(0, FRONT_PAGE_OLDER + 1).await?;

    let front = if recent.is_empty() {
        None
    } else {
        Some(review_response(&state, recent.remove(0)).await?)
    };

    let mut older = Vec::new();
    for post in recent {
        older.push(review_response(&state, post).await?);
    }

    Ok(HttpResponse::Ok().json(FrontPageResponse {
        front,
        older,
        review_of_the_day: featured_review(&state).await?,
    }))
}

/// POST /api/reviews
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewReviewRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let mut post = Post::new(identity.user_id, req.title, req.content);
    if let Some(pic) = req.pic {
        post = post.with_pic(pic);
    }
    if let Some(rating) = req.rating {
        post.rating = rating;
    }
    if let Some(name) = req.restaurant {
        let city = req.city.ok_or_else(|| {
            AppError::BadRequest("City is required when naming a restaurant".to_string())
        })?;
        let restaurant = state.restaurants.find_or_create(&name, &city).await?;
        post = post.with_restaurant(restaurant.id, req.rating.unwrap_or(0));
    }

    let saved = state.posts.save(post).await?;

    for tag in &req.tags {
        if !tag.trim().is_empty() {
            state.posts.tag_with(saved.id, tag.trim()).await?;
        }
    }

    Ok(HttpResponse::Created().json(review_response(&state, saved).await?))
}

/// GET /api/reviews/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {post_id} not found")))?;

    Ok(HttpResponse::Ok().json(review_response(&state, post).await?))
}

/// PUT /api/reviews/{id} - author or admin only.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateReviewRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {post_id} not found")))?;

    if post.author_id != identity.user_id && !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    let req = body.into_inner();
    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(content) = req.content {
        post.content = content;
    }
    if let Some(rating) = req.rating {
        post.rating = rating;
    }
    if let Some(pic) = req.pic {
        post.pic = Some(pic);
    }
    post.updated_at = chrono::Utc::now();

    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(review_response(&state, saved).await?))
}

/// DELETE /api/reviews/{id} - author or admin only.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {post_id} not found")))?;

    if post.author_id != identity.user_id && !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/reviews/{id}/like - anyone may like, no login required.
pub async fn like(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    state.posts.increment_likes(post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
