//! Route handlers.
//!
//! Joke routes share one pipeline: call upstream, substitute the mascot,
//! shape the response. Any upstream failure becomes a 503.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::health::{check_upstream, HealthReport};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::jokes::mascot::popular_mascots;
use crate::jokes::{CategoryList, MascotCatalog, TransformedJoke, DEFAULT_MASCOT, WOOF_MASCOT};

/// Query string of the joke routes, kept as raw pairs.
///
/// A repeated `mascot` parameter is not an error; the last one wins.
pub type QueryPairs = Vec<(String, String)>;

/// Mascot requested in the query string, or the default.
pub fn requested_mascot(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == "mascot")
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| DEFAULT_MASCOT.to_string())
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Meow Norris Joke API! 🐱🐶",
        "description": "Get Chuck Norris jokes transformed for our office mascots",
        "endpoints": {
            "random_meow_joke": "/jokes/random",
            "random_woof_joke": "/jokes/woof/random",
            "joke_by_category": "/jokes/category/{category}",
            "woof_joke_by_category": "/jokes/woof/category/{category}",
            "categories": "/jokes/categories",
            "mascots": "/mascots",
            "custom_mascot": "/jokes/random?mascot=YourMascot"
        },
        "popular_mascots": popular_mascots(),
    }))
}

pub async fn random_joke(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<TransformedJoke>, ApiError> {
    random_with_mascot(&state, &requested_mascot(&query)).await
}

pub async fn category_joke(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<TransformedJoke>, ApiError> {
    category_with_mascot(&state, &category, &requested_mascot(&query)).await
}

pub async fn woof_random_joke(
    State(state): State<AppState>,
) -> Result<Json<TransformedJoke>, ApiError> {
    random_with_mascot(&state, WOOF_MASCOT).await
}

pub async fn woof_category_joke(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<TransformedJoke>, ApiError> {
    category_with_mascot(&state, &category, WOOF_MASCOT).await
}

pub async fn categories(State(state): State<AppState>) -> Result<Json<CategoryList>, ApiError> {
    let categories = state
        .client
        .list_categories()
        .await
        .map_err(|_| ApiError::categories_unavailable())?;
    Ok(Json(CategoryList::from(categories)))
}

pub async fn mascots() -> Json<MascotCatalog> {
    Json(MascotCatalog::new())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(check_upstream(&state.client).await)
}

async fn random_with_mascot(state: &AppState, mascot: &str) -> Result<Json<TransformedJoke>, ApiError> {
    let joke = state
        .client
        .fetch_random()
        .await
        .map_err(|_| ApiError::joke_unavailable())?;
    Ok(Json(TransformedJoke::random(joke, mascot)))
}

async fn category_with_mascot(
    state: &AppState,
    category: &str,
    mascot: &str,
) -> Result<Json<TransformedJoke>, ApiError> {
    let joke = state
        .client
        .fetch_by_category(category)
        .await
        .map_err(|_| ApiError::category_unavailable(category))?;
    Ok(Json(TransformedJoke::in_category(joke, category, mascot)))
}
