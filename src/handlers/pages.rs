use axum::{response::Html, Extension};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::data::models::{Cocktail, CocktailError};
use crate::utils::render_template;

pub async fn home(
    Extension(templates): Extension<Arc<Tera>>,
) -> Result<Html<String>, CocktailError> {
    render_template(&templates, "index.html", Context::new())
}

// Search form with nothing searched yet
pub async fn cocktails_page(
    Extension(templates): Extension<Arc<Tera>>,
) -> Result<Html<String>, CocktailError> {
    let mut context = Context::new();
    context.insert("query", "");
    context.insert("drinks", &Vec::<Cocktail>::new());
    context.insert("searched", &false);
    render_template(&templates, "cocktails.html", context)
}
