use serde_json::{Map, Value};

use crate::data::models::{Cocktail, CocktailError, DrinkRecord};
use crate::features::cocktails::extract_ingredients;

impl From<DrinkRecord> for Cocktail {
    fn from(record: DrinkRecord) -> Self {
        let ingredients = extract_ingredients(&record.extra);
        Cocktail {
            id: record.id,
            name: record.name,
            instructions: record.instructions,
            thumbnail: record.thumbnail,
            category: record.category,
            alcoholic: record.alcoholic,
            glass: record.glass,
            ingredients,
        }
    }
}

impl Cocktail {
    // id and name must be strings, the rest may be absent or null
    pub fn from_lookup_record(record: &Map<String, Value>) -> Result<Self, CocktailError> {
        Ok(Cocktail {
            id: required_string(record, "idDrink")?,
            name: required_string(record, "strDrink")?,
            instructions: optional_string(record, "strInstructions")?,
            thumbnail: optional_string(record, "strDrinkThumb")?,
            category: optional_string(record, "strCategory")?,
            alcoholic: optional_string(record, "strAlcoholic")?,
            glass: optional_string(record, "strGlass")?,
            ingredients: extract_ingredients(record),
        })
    }
}

fn required_string(record: &Map<String, Value>, field: &str) -> Result<String, CocktailError> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(CocktailError::Decode {
            field: field.to_string(),
            expected: "string",
        }),
    }
}

fn optional_string(record: &Map<String, Value>, field: &str) -> Result<String, CocktailError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CocktailError::Decode {
            field: field.to_string(),
            expected: "string or null",
        }),
    }
}
