//! User profile handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tastebook_shared::dto::{ProfileResponse, StateResponse, UpdateProfileRequest};

use crate::handlers::{comment_response, review_response, user_response};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// How many followers/following to show on a profile page.
const SOCIAL_SAMPLE_SIZE: u64 = 10;

/// GET /api/users/{id} - public profile page.
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let mut reviews = Vec::new();
    for post in state.posts.find_by_author(user_id).await? {
        reviews.push(review_response(&state, post).await?);
    }

    let mut following = Vec::new();
    for followee in state
        .social
        .following(user_id, Some(SOCIAL_SAMPLE_SIZE))
        .await?
    {
        following.push(user_response(&state, &followee).await?);
    }

    let mut followers = Vec::new();
    for follower in state
        .social
        .followers(user_id, Some(SOCIAL_SAMPLE_SIZE))
        .await?
    {
        followers.push(user_response(&state, &follower).await?);
    }

    Ok(HttpResponse::Ok().json(ProfileResponse {
        user: user_response(&state, &user).await?,
        reviews,
        following,
        followers,
    }))
}

/// PUT /api/users/{id} - edit a profile; allowed for the user or an admin.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    if identity.user_id != user_id && !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    let mut user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let req = body.into_inner();
    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(about_me) = req.about_me {
        user.about_me = Some(about_me);
    }
    if let Some(profile_pic) = req.profile_pic {
        user.profile_pic = Some(profile_pic);
    }
    if let Some(city) = req.city {
        user.city = Some(city);
    }
    if let Some(state_name) = req.state {
        let resolved = state.states.find_or_create(&state_name).await?;
        user.state_id = Some(resolved.id);
    }
    user.updated_at = chrono::Utc::now();

    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(user_response(&state, &saved).await?))
}

/// GET /api/states - states on file, for the profile edit form.
pub async fn states(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let states: Vec<_> = state
        .states
        .list()
        .await?
        .into_iter()
        .map(|s| StateResponse {
            id: s.id,
            name: s.name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(states))
}

/// GET /api/users/{id}/reviews
pub async fn reviews(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let mut out = Vec::new();
    for post in state.posts.find_by_author(user_id).await? {
        out.push(review_response(&state, post).await?);
    }

    Ok(HttpResponse::Ok().json(out))
}

/// GET /api/users/{id}/comments
pub async fn comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let comments: Vec<_> = state
        .comments
        .find_by_author(user_id)
        .await?
        .into_iter()
        .map(comment_response)
        .collect();

    Ok(HttpResponse::Ok().json(comments))
}
