use thiserror::Error;

#[derive(Error, Debug)]
pub enum CocktailError {
    #[error("Failed to fetch from cocktail API: {0}")]
    RemoteFetch(String),
    #[error("Cocktail not found")]
    NotFound,
    #[error("Unexpected value for `{field}`: expected {expected}")]
    Decode {
        field: String,
        expected: &'static str,
    },
    #[error("Template error: {0}")]
    Render(String),
}
