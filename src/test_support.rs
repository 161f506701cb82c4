use axum::{extract::Query, routing::get, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;

// Serves `app` on an ephemeral loopback port
pub async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{}", addr)
}

// Loopback port nobody listens on
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

// search: mojito -> two drinks, empty -> [], else null
// lookup: 11007 -> margarita, bad-shape -> numeric id, else null
pub fn fixture_api() -> Router {
    Router::new()
        .route("/search.php", get(search))
        .route("/lookup.php", get(lookup))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(match params.get("s").map(String::as_str) {
        Some("mojito") => json!({ "drinks": [mojito(), blueberry_mojito()] }),
        Some("empty") => json!({ "drinks": [] }),
        _ => json!({ "drinks": null }),
    })
}

async fn lookup(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(match params.get("i").map(String::as_str) {
        Some("11007") => json!({ "drinks": [margarita()] }),
        Some("bad-shape") => json!({ "drinks": [{ "idDrink": 1, "strDrink": "Broken" }] }),
        _ => json!({ "drinks": null }),
    })
}

pub fn margarita() -> Value {
    json!({
        "idDrink": "11007",
        "strDrink": "Margarita",
        "strCategory": "Ordinary Drink",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": "Rub the rim of the glass with the lime slice to make the salt stick to it.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
        "strIngredient1": "Tequila",
        "strIngredient2": "Triple sec",
        "strIngredient3": null,
        "strMeasure1": "1 1/2 oz",
        "strMeasure2": "",
        "strMeasure3": null
    })
}

fn mojito() -> Value {
    json!({
        "idDrink": "11000",
        "strDrink": "Mojito",
        "strCategory": "Cocktail",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Highball glass",
        "strInstructions": "Muddle mint leaves with sugar and lime juice.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/metwgh1606770327.jpg",
        "strIngredient1": "Light rum",
        "strIngredient2": "Lime",
        "strIngredient3": "Sugar",
        "strIngredient4": "Mint",
        "strIngredient5": "Soda water",
        "strIngredient6": null,
        "strMeasure1": "2-3 oz",
        "strMeasure2": "Juice of 1",
        "strMeasure3": "2 tsp",
        "strMeasure4": "2-4",
        "strMeasure5": null
    })
}

fn blueberry_mojito() -> Value {
    json!({
        "idDrink": "178336",
        "strDrink": "Blueberry Mojito",
        "strCategory": "Cocktail",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Highball glass",
        "strInstructions": "Muddle the blueberries, mint and lime.",
        "strDrinkThumb": null,
        "strIngredient1": "Blueberries",
        "strIngredient2": "White rum",
        "strMeasure1": "12",
        "strMeasure2": "2 oz"
    })
}
