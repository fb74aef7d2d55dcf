//! Tag handlers.

use actix_web::{HttpResponse, web};

use tastebook_shared::dto::TagCloudEntry;

use crate::handlers::review_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/tags - the tag cloud.
pub async fn cloud(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries: Vec<_> = state
        .tags
        .cloud()
        .await?
        .into_iter()
        .map(|t| TagCloudEntry {
            name: t.name,
            count: t.count,
        })
        .collect();

    Ok(HttpResponse::Ok().json(entries))
}

/// GET /api/tags/{name}/reviews
pub async fn reviews(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let tag = path.into_inner();

    let mut out = Vec::new();
    for post in state.posts.find_tagged_with(&tag).await? {
        out.push(review_response(&state, post).await?);
    }

    Ok(HttpResponse::Ok().json(out))
}
