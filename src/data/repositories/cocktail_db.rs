use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::data::models::{Cocktail, CocktailError, LookupResponse, SearchResponse, SearchResult};

const SEARCH_ENDPOINT: &str = "search.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";
// Real responses are a few KiB; anything past this is not a drink list
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// Clones share the connection pool
#[derive(Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CocktailError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn search(&self, query: &str) -> Result<SearchResult, CocktailError> {
        let response: SearchResponse = self.fetch(SEARCH_ENDPOINT, "s", query).await?;

        let drinks = response
            .drinks
            .unwrap_or_default()
            .into_iter()
            .map(Cocktail::from)
            .collect();

        Ok(SearchResult {
            query: query.to_string(),
            drinks,
        })
    }

    pub async fn lookup(&self, id: &str) -> Result<Cocktail, CocktailError> {
        let response: LookupResponse = self.fetch(LOOKUP_ENDPOINT, "i", id).await?;

        let record = response
            .drinks
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(CocktailError::NotFound)?;

        Cocktail::from_lookup_record(&record)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: &str,
        value: &str,
    ) -> Result<T, CocktailError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {} with {}={:?}", url, param, value);

        let mut response = self
            .client
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await?
            .error_for_status()?;

        if response
            .content_length()
            .is_some_and(|len| len > MAX_BODY_BYTES as u64)
        {
            return Err(body_too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(body_too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

fn body_too_large() -> CocktailError {
    CocktailError::RemoteFetch(format!(
        "response body exceeds {} bytes",
        MAX_BODY_BYTES
    ))
}
