use axum::{
    extract::{Query, State},
    response::Html,
};
use tera::Context;

use crate::{
    data::models::{CocktailError, DetailsParams},
    handlers::cocktails::CocktailState,
    utils::render_template,
};

pub async fn cocktail_details(
    State((client, tera)): State<CocktailState>,
    Query(params): Query<DetailsParams>,
) -> Result<Html<String>, CocktailError> {
    let cocktail = client.lookup(&params.id).await.map_err(|e| {
        match &e {
            CocktailError::NotFound => log::warn!("No cocktail with id {:?}", params.id),
            _ => log::error!("Lookup of {:?} failed: {}", params.id, e),
        }
        e
    })?;

    let mut context = Context::new();
    context.insert("cocktail", &cocktail);
    render_template(&tera, "cocktail-details.html", context)
}
