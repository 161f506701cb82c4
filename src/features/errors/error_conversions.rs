use reqwest::Error as ReqwestError;
use std::error::Error;
use serde_json::Error as JsonError;
use tera::Error as TeraError;
use crate::data::models::CocktailError;

impl From<ReqwestError> for CocktailError {
    fn from(err: ReqwestError) -> Self {
        if err.is_timeout() {
            CocktailError::RemoteFetch(format!("request timed out: {}", err))
        } else {
            CocktailError::RemoteFetch(err.to_string())
        }
    }
}

impl From<JsonError> for CocktailError {
    fn from(err: JsonError) -> Self {
        CocktailError::RemoteFetch(format!("malformed response: {}", err))
    }
}

impl From<TeraError> for CocktailError {
    fn from(err: TeraError) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        CocktailError::Render(message)
    }
}
