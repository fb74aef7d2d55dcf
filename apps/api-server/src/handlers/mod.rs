//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod health;
mod profile;
mod restaurants;
mod reviews;
mod search;
mod social;
mod tags;

use std::sync::Arc;

use actix_web::web;

use tastebook_core::domain::{Comment, Post, Restaurant, User};
use tastebook_core::ports::RateLimiter;
use tastebook_shared::dto::{CommentResponse, RestaurantResponse, ReviewResponse, UserResponse};

use crate::middleware::error::AppResult;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, auth_limiter: Arc<dyn RateLimiter>) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/states", web::get().to(profile::states))
            // Auth routes - rate limited to slow down credential stuffing
            .service(
                web::scope("/auth")
                    .wrap(RateLimitMiddleware::new(auth_limiter))
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // User profiles and the follow graph
            .service(
                web::scope("/users")
                    .route("/{id}", web::get().to(profile::show))
                    .route("/{id}", web::put().to(profile::update))
                    .route("/{id}/reviews", web::get().to(profile::reviews))
                    .route("/{id}/comments", web::get().to(profile::comments))
                    .route("/{id}/following", web::get().to(social::following))
                    .route("/{id}/followers", web::get().to(social::followers))
                    .route(
                        "/{id}/following/{followee_id}",
                        web::get().to(social::is_following),
                    )
                    .route("/{id}/follow", web::post().to(social::follow))
                    .route("/{id}/follow", web::delete().to(social::unfollow)),
            )
            // Reviews and their comments
            .service(
                web::scope("/reviews")
                    .route("", web::get().to(reviews::front_page))
                    .route("", web::post().to(reviews::create))
                    .route("/{id}", web::get().to(reviews::show))
                    .route("/{id}", web::put().to(reviews::update))
                    .route("/{id}", web::delete().to(reviews::delete))
                    .route("/{id}/like", web::post().to(reviews::like))
                    .route("/{id}/comments", web::get().to(comments::list))
                    .route("/{id}/comments", web::post().to(comments::create)),
            )
            .service(
                web::scope("/tags")
                    .route("", web::get().to(tags::cloud))
                    .route("/{name}/reviews", web::get().to(tags::reviews)),
            )
            .service(
                web::scope("/restaurants")
                    .route("/{id}", web::get().to(restaurants::show))
                    .route("/{id}", web::put().to(restaurants::update)),
            )
            .service(
                web::scope("/search")
                    .route("/restaurants", web::get().to(search::restaurants))
                    .route("/cities", web::get().to(search::cities)),
            ),
    );
}

/// Render a user for the wire, resolving the state name.
pub(crate) async fn user_response(state: &AppState, user: &User) -> AppResult<UserResponse> {
    let state_name = match user.state_id {
        Some(id) => state.states.find_by_id(id).await?.map(|s| s.name),
        None => None,
    };

    Ok(UserResponse {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        about_me: user.about_me.clone(),
        profile_pic: user.profile_pic.clone(),
        city: user.city.clone(),
        state: state_name,
        is_admin: user.is_admin,
        created_at: user.created_at,
    })
}

/// Render a review for the wire, resolving its tag names.
pub(crate) async fn review_response(state: &AppState, post: Post) -> AppResult<ReviewResponse> {
    let tags = state
        .posts
        .tags_for(post.id)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    Ok(ReviewResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        content: post.content,
        rating: post.rating,
        like_count: post.like_count,
        pic: post.pic,
        restaurant_id: post.restaurant_id,
        tags,
        posted_at: post.posted_at,
    })
}

pub(crate) fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        author_id: comment.author_id,
        guest_name: comment.guest_name,
        content: comment.content,
        posted_at: comment.posted_at,
    }
}

pub(crate) fn restaurant_response(restaurant: Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        id: restaurant.id,
        name: restaurant.name,
        city: restaurant.city,
        street1: restaurant.street1,
        street2: restaurant.street2,
        zipcode: restaurant.zipcode,
        phone: restaurant.phone,
        website: restaurant.website,
        cuisine: restaurant.cuisine,
        cost: restaurant.cost,
        about: restaurant.about,
        rating: restaurant.rating,
        owner_id: restaurant.owner_id,
    }
}
