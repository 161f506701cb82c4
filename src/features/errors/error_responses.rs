use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use crate::data::models::CocktailError;

impl IntoResponse for CocktailError {
    fn into_response(self) -> Response {
        let status = match self {
            CocktailError::NotFound => StatusCode::NOT_FOUND,
            CocktailError::RemoteFetch(_)
            | CocktailError::Decode { .. }
            | CocktailError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
