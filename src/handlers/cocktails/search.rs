use axum::{
    extract::{Query, State},
    response::Html,
};
use tera::Context;

use crate::{
    data::models::{CocktailError, SearchParams},
    handlers::cocktails::CocktailState,
    utils::render_template,
};

pub async fn search(
    State((client, tera)): State<CocktailState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, CocktailError> {
    let result = client.search(&params.cocktail).await.map_err(|e| {
        log::error!("Search for {:?} failed: {}", params.cocktail, e);
        e
    })?;

    log::info!(
        "Search for {:?} returned {} drinks",
        result.query,
        result.drinks.len()
    );

    let mut context = Context::from_serialize(&result)?;
    context.insert("searched", &true);
    render_template(&tera, "cocktails.html", context)
}
