use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::constants::{
    ALL_STATIONS_PATH, END_STATION_PARAM, FIND_PATH_PATH, LINES_AND_STATIONS_PATH,
    START_STATION_PARAM,
};
use crate::models::{LineCatalog, RouteResult, StationDirectory};

/// Read-only view of the routing service
///
/// Every call is a single attempt; callers decide what a failure means.
#[allow(async_fn_in_trait)]
pub trait TransitBackend {
    /// Fetch every station name, used for validation and autocomplete
    async fn all_stations(&self) -> Result<StationDirectory, ApiError>;

    /// Fetch the line name -> ordered stations mapping for the sidebar
    async fn lines_and_stations(&self) -> Result<LineCatalog, ApiError>;

    /// Ask the service for a path between two station names, sent verbatim
    async fn find_path(&self, start: &str, end: &str) -> Result<RouteResult, ApiError>;
}

/// Body the service sends alongside a non-success status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull a human-readable message out of an error body
///
/// Only a non-empty string `detail` counts; anything else (missing field,
/// validation error lists, HTML error pages) yields `None`.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// `TransitBackend` over HTTP using the browser's fetch (via reqwest)
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build the GET request for a route search without sending it
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not form a valid URL.
    pub fn find_path_request(&self, start: &str, end: &str) -> Result<reqwest::Request, ApiError> {
        let request = self
            .http
            .get(self.url(FIND_PATH_PATH))
            .query(&[(START_STATION_PARAM, start), (END_STATION_PARAM, end)])
            .build()?;
        Ok(request)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, ApiError> {
        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TransitBackend for HttpBackend {
    async fn all_stations(&self) -> Result<StationDirectory, ApiError> {
        let request = self.http.get(self.url(ALL_STATIONS_PATH)).build()?;
        self.fetch_json(request).await
    }

    async fn lines_and_stations(&self) -> Result<LineCatalog, ApiError> {
        let request = self.http.get(self.url(LINES_AND_STATIONS_PATH)).build()?;
        self.fetch_json(request).await
    }

    async fn find_path(&self, start: &str, end: &str) -> Result<RouteResult, ApiError> {
        let request = self.find_path_request(start, end)?;
        self.fetch_json(request).await
    }
}
