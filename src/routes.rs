use axum::{
    routing::{get, get_service},
    Extension, Router,
};
use std::sync::Arc;
use tera::Tera;
use tower_http::services::ServeDir;

use crate::data::repositories::CocktailDbClient;
use crate::handlers::{cocktails, pages};

pub fn build_router(client: CocktailDbClient, templates: Arc<Tera>, css_dir: &str) -> Router {
    Router::new()
        // Static pages
        .route("/", get(pages::home))
        .route("/cocktails", get(pages::cocktails_page))
        // Search and details, backed by the cocktail API
        .merge(cocktails::cocktail_router(client, templates.clone()))
        // Stylesheets
        .nest_service("/css", get_service(ServeDir::new(css_dir)))
        // Any other path gets the landing page
        .fallback(pages::home)
        .layer(Extension(templates))
}
