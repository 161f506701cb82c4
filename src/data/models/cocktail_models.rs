use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// name -> measure, "" when the measure is missing
pub type Ingredients = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail: String,
    pub category: String,
    pub alcoholic: String,
    pub glass: String,
    pub ingredients: Ingredients,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub drinks: Vec<Cocktail>,
}

// Query string structs
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub cocktail: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    #[serde(default)]
    pub id: String,
}
