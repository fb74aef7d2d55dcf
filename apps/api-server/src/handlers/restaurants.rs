//! Restaurant profile handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use tastebook_shared::dto::{RestaurantResponse, ReviewResponse, UpdateRestaurantRequest};

use crate::handlers::{restaurant_response, review_response};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RestaurantProfileResponse {
    pub restaurant: RestaurantResponse,
    pub reviews: Vec<ReviewResponse>,
}

/// GET /api/restaurants/{id} - the restaurant plus its reviews.
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let restaurant_id = path.into_inner();

    let restaurant = state
        .restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {restaurant_id} not found")))?;

    let mut reviews = Vec::new();
    for post in state.posts.find_by_restaurant(restaurant_id).await? {
        reviews.push(review_response(&state, post).await?);
    }

    Ok(HttpResponse::Ok().json(RestaurantProfileResponse {
        restaurant: restaurant_response(restaurant),
        reviews,
    }))
}

/// PUT /api/restaurants/{id} - owner or admin only.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRestaurantRequest>,
) -> AppResult<HttpResponse> {
    let restaurant_id = path.into_inner();

    let mut restaurant = state
        .restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant {restaurant_id} not found")))?;

    let owns = restaurant.owner_id == Some(identity.user_id);
    if !owns && !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    let req = body.into_inner();
    if let Some(name) = req.name {
        restaurant.name = name;
    }
    if let Some(city) = req.city {
        restaurant.city = city;
    }
    if let Some(street1) = req.street1 {
        restaurant.street1 = Some(street1);
    }
    if let Some(street2) = req.street2 {
        restaurant.street2 = Some(street2);
    }
    if let Some(zipcode) = req.zipcode {
        restaurant.zipcode = Some(zipcode);
    }
    if let Some(phone) = req.phone {
        restaurant.phone = Some(phone);
    }
    if let Some(website) = req.website {
        restaurant.website = Some(website);
    }
    if let Some(cuisine) = req.cuisine {
        restaurant.cuisine = Some(cuisine);
    }
    if let Some(cost) = req.cost {
        restaurant.cost = Some(cost);
    }
    if let Some(about) = req.about {
        restaurant.about = Some(about);
    }
    if let Some(profile_pic) = req.profile_pic {
        restaurant.profile_pic = Some(profile_pic);
    }

    let saved = state.restaurants.save(restaurant).await?;

    Ok(HttpResponse::Ok().json(restaurant_response(saved)))
}
