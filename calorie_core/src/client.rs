//! Blocking HTTP client for the USDA nutrition database.
//!
//! Every call is a single GET with query parameters. There is no retry and
//! no timeout beyond the transport default; any failure ends the call.

use crate::usda::{FoodDetail, FoodList, SearchList};
use crate::{Config, Error, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

const LIST_ENDPOINT: &str = "/list/";
const SEARCH_ENDPOINT: &str = "/search/";
const REPORTS_ENDPOINT: &str = "/V2/reports";

/// Read-only access to a nutrition database
pub trait NutritionApi {
    /// List foods sorted by name
    fn list_foods(&self, max: u32) -> Result<FoodList>;

    /// Search foods by free text, sorted by relevance
    fn search_foods(&self, query: &str, max: u32) -> Result<SearchList>;

    /// Full report for one food identifier
    fn food_detail(&self, ndbno: &str) -> Result<FoodDetail>;
}

/// Client for `https://api.nal.usda.gov/ndb`
pub struct UsdaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl UsdaClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from configuration, reading the API key from the environment
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self::new(config.api.base_url.clone(), api_key))
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {} {:?} api_key=<redacted>", url, params);

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json")])
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .map_err(|e| redacted(endpoint, e))?;

        let status = response.status();
        tracing::debug!("Received HTTP response with status: {}", status);
        let response = response
            .error_for_status()
            .map_err(|e| redacted(endpoint, e))?;

        let body = response.text().map_err(|e| redacted(endpoint, e))?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { endpoint, source })
    }
}

/// Drop the request URL from a transport error; its query string holds the API key
fn redacted(endpoint: &'static str, e: reqwest::Error) -> Error {
    Error::Http {
        endpoint,
        source: e.without_url(),
    }
}

impl NutritionApi for UsdaClient {
    fn list_foods(&self, max: u32) -> Result<FoodList> {
        let max = max.to_string();
        self.get(
            LIST_ENDPOINT,
            &[("lt", "f"), ("max", max.as_str()), ("sort", "n")],
        )
    }

    fn search_foods(&self, query: &str, max: u32) -> Result<SearchList> {
        let max = max.to_string();
        self.get(
            SEARCH_ENDPOINT,
            &[("sort", "r"), ("q", query), ("max", max.as_str())],
        )
    }

    fn food_detail(&self, ndbno: &str) -> Result<FoodDetail> {
        self.get(REPORTS_ENDPOINT, &[("type", "b"), ("ndbno", ndbno)])
    }
}
