use lazy_static::lazy_static;
use serde_json::{Map, Value};

use crate::data::models::Ingredients;

// Upstream numbers ingredient slots 1..=15
pub const MAX_INGREDIENTS: usize = 15;

lazy_static! {
    static ref INGREDIENT_KEYS: Vec<(String, String)> = (1..=MAX_INGREDIENTS)
        .map(|i| (format!("strIngredient{}", i), format!("strMeasure{}", i)))
        .collect();
}

// Empty or missing measures map to "", a repeated name keeps its last slot
pub fn extract_ingredients(record: &Map<String, Value>) -> Ingredients {
    let mut ingredients = Ingredients::new();

    for (ingredient_key, measure_key) in INGREDIENT_KEYS.iter() {
        let Some(name) = non_empty_str(record, ingredient_key) else {
            continue;
        };
        let measure = non_empty_str(record, measure_key).unwrap_or_default();
        ingredients.insert(name.to_string(), measure.to_string());
    }

    ingredients
}

fn non_empty_str<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::String(_) | Value::Null => None,
        other => {
            log::warn!("Ignoring non-string value for {}: {}", key, other);
            None
        }
    }
}
