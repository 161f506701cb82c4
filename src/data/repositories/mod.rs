pub mod cocktail_db;

pub use cocktail_db::CocktailDbClient;
