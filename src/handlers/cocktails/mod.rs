pub mod details;
pub mod search;

use axum::{routing::get, Router};
use std::sync::Arc;
use tera::Tera;

use crate::data::repositories::CocktailDbClient;

pub type CocktailState = (CocktailDbClient, Arc<Tera>);

pub fn cocktail_router(client: CocktailDbClient, tera: Arc<Tera>) -> Router {
    Router::new()
        .route("/search", get(search::search))
        .route("/cocktail-details", get(details::cocktail_details))
        .with_state((client, tera))
}
