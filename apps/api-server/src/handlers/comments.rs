//! Comment handlers. Comments may come from logged-in users or guests.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tastebook_core::domain::Comment;
use tastebook_shared::dto::NewCommentRequest;

use crate::handlers::comment_response;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/reviews/{id}/comments - in posted order.
pub async fn list(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let comments: Vec<_> = state
        .comments
        .find_by_post(post_id)
        .await?
        .into_iter()
        .map(comment_response)
        .collect();

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/reviews/{id}/comments
///
/// Logged-in callers comment under their account; guests must supply a
/// display name in `author`.
pub async fn create(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: web::Json<NewCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Comment cannot be empty".to_string()));
    }

    // The review must exist; comments cascade-delete with it.
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review {post_id} not found")))?;

    let comment = match identity.0 {
        Some(identity) => Comment::from_user(post_id, identity.user_id, req.content),
        None => {
            let guest_name = req
                .author
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(|| {
                    AppError::BadRequest("Guest comments require an author name".to_string())
                })?;
            Comment::from_guest(post_id, guest_name, req.content)
        }
    };

    let saved = state.comments.save(comment).await?;

    Ok(HttpResponse::Created().json(comment_response(saved)))
}
