pub mod api_models;
pub mod cocktail_models;
pub mod error_models;

pub use api_models::{DrinkRecord, LookupResponse, SearchResponse};
pub use cocktail_models::{Cocktail, DetailsParams, Ingredients, SearchParams, SearchResult};
pub use error_models::CocktailError;
