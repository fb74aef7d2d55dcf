//! Restaurant search handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use tastebook_shared::dto::SearchResponse;

use crate::handlers::restaurant_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RestaurantQuery {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub with_reviews: bool,
}

/// When a name search misses, suggest an existing restaurant sharing the
/// query's first three characters.
async fn did_you_mean(state: &AppState, name: &str) -> AppResult<Option<String>> {
    if name.chars().count() < 3 {
        return Ok(None);
    }
    let prefix: String = name.chars().take(3).collect();
    let mut names = state.restaurants.names_with_prefix(&prefix).await?;
    if names.is_empty() {
        Ok(None)
    } else {
        Ok(Some(names.remove(0)))
    }
}

/// GET /api/search/restaurants?name=|city=
pub async fn restaurants(
    state: web::Data<AppState>,
    query: web::Query<RestaurantQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let (results, suggestion) = match (&query.name, &query.city) {
        (Some(name), _) if !name.trim().is_empty() => {
            let found = state.restaurants.search_by_name(name.trim()).await?;
            let suggestion = if found.is_empty() {
                did_you_mean(&state, name.trim()).await?
            } else {
                None
            };
            (found, suggestion)
        }
        (_, Some(city)) if !city.trim().is_empty() => {
            (state.restaurants.search_by_city(city.trim()).await?, None)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Provide a name or city to search for".to_string(),
            ));
        }
    };

    Ok(HttpResponse::Ok().json(SearchResponse {
        results: results.into_iter().map(restaurant_response).collect(),
        suggestion,
    }))
}

/// GET /api/search/cities?with_reviews=
///
/// All cities with a restaurant, or with `with_reviews=true` only those whose
/// restaurants have at least one review.
pub async fn cities(
    state: web::Data<AppState>,
    query: web::Query<CityQuery>,
) -> AppResult<HttpResponse> {
    let cities = if query.with_reviews {
        state.restaurants.cities_with_reviews().await?
    } else {
        state.restaurants.cities().await?
    };

    Ok(HttpResponse::Ok().json(cities))
}
