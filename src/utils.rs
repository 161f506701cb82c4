use axum::response::Html;
use tera::{Tera, Context};

use crate::data::models::CocktailError;

pub fn render_template(
    tera: &Tera,
    template_name: &str,
    context: Context,
) -> Result<Html<String>, CocktailError> {
    tera.render(template_name, &context).map(Html).map_err(|e| {
        let err = CocktailError::from(e);
        log::error!("Failed to render {}: {}", template_name, err);
        err
    })
}
