use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

// No match comes back as `"drinks": null`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub drinks: Option<Vec<DrinkRecord>>,
}

// Lookup records stay untyped and are read field by field
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Map<String, Value>>>,
}

#[derive(Debug, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "idDrink", default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(rename = "strDrink", default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "nullable_string")]
    pub instructions: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "nullable_string")]
    pub thumbnail: String,
    #[serde(rename = "strCategory", default, deserialize_with = "nullable_string")]
    pub category: String,
    #[serde(rename = "strAlcoholic", default, deserialize_with = "nullable_string")]
    pub alcoholic: String,
    #[serde(rename = "strGlass", default, deserialize_with = "nullable_string")]
    pub glass: String,
    // strIngredientN / strMeasureN and everything else
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
