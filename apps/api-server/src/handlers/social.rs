//! Follow graph handlers.
//!
//! Follow and unfollow answer HTTP 200 with `{ success, name }` even when
//! denied; only storage faults become error statuses.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use tastebook_core::social::FollowOutcome;
use tastebook_shared::dto::{FollowRequest, FollowResponse, FollowStatusResponse};

use crate::handlers::user_response;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u64>,
}

fn follow_response(outcome: FollowOutcome) -> FollowResponse {
    match outcome {
        FollowOutcome::Done { followee_name } => FollowResponse {
            success: true,
            name: followee_name,
        },
        FollowOutcome::Denied { followee_name, .. } => FollowResponse {
            success: false,
            name: followee_name.unwrap_or_default(),
        },
    }
}

/// POST /api/users/{id}/follow - the acting user follows `{id}`.
///
/// Admins may pass `follower_id` in the body to manage an edge on behalf of
/// another user; anyone else naming someone other than themselves is denied.
pub async fn follow(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: Option<web::Json<FollowRequest>>,
) -> AppResult<HttpResponse> {
    let followee_id = path.into_inner();
    let actor = identity.0.as_ref().map(|i| i.actor());
    let follower_id = body
        .and_then(|b| b.follower_id)
        .or(actor.as_ref().map(|a| a.user_id))
        .unwrap_or(Uuid::nil());

    let outcome = state
        .social
        .follow(actor.as_ref(), follower_id, followee_id)
        .await?;

    Ok(HttpResponse::Ok().json(follow_response(outcome)))
}

/// DELETE /api/users/{id}/follow
pub async fn unfollow(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: Option<web::Json<FollowRequest>>,
) -> AppResult<HttpResponse> {
    let followee_id = path.into_inner();
    let actor = identity.0.as_ref().map(|i| i.actor());
    let follower_id = body
        .and_then(|b| b.follower_id)
        .or(actor.as_ref().map(|a| a.user_id))
        .unwrap_or(Uuid::nil());

    let outcome = state
        .social
        .unfollow(actor.as_ref(), follower_id, followee_id)
        .await?;

    Ok(HttpResponse::Ok().json(follow_response(outcome)))
}

/// GET /api/users/{id}/following/{followee_id}
pub async fn is_following(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (follower_id, followee_id) = path.into_inner();

    let following = state.social.is_following(follower_id, followee_id).await?;

    Ok(HttpResponse::Ok().json(FollowStatusResponse { following }))
}

/// GET /api/users/{id}/following?limit=
pub async fn following(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let mut out = Vec::new();
    for user in state.social.following(user_id, query.limit).await? {
        out.push(user_response(&state, &user).await?);
    }

    Ok(HttpResponse::Ok().json(out))
}

/// GET /api/users/{id}/followers?limit=
pub async fn followers(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let mut out = Vec::new();
    for user in state.social.followers(user_id, query.limit).await? {
        out.push(user_response(&state, &user).await?);
    }

    Ok(HttpResponse::Ok().json(out))
}
