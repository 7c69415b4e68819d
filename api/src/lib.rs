//! This crate contains the client for the remote store API and the types it returns.

pub mod prefs;
pub mod product;

use dioxus_logger::tracing::debug;
use prefs::user_prefs::UserPrefs;
use product::Product;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Errors surfaced by the store API.
///
/// Cloneable so that one settled request can be handed to every subscriber
/// of the same query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid store url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether repeating the same request may succeed.
    ///
    /// Transport failures and server-side (5xx) errors qualify; a 4xx answer
    /// or an unparsable body will not change on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::InvalidUrl(_) => false,
        }
    }
}

/// Read-only client for the store API.
#[derive(Clone, Debug)]
pub struct StoreClient {
    base_url: String,
    http: reqwest::Client,
}

impl PartialEq for StoreClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_prefs(prefs: &UserPrefs) -> Self {
        Self::new(prefs.store_api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products/categories`
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.categories_url()?).await
    }

    /// `GET /products` when `category` is `None`, else `GET /products/category/{category}`.
    pub async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, ApiError> {
        self.get_json(self.products_url(category)?).await
    }

    pub fn categories_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["products", "categories"])
    }

    pub fn products_url(&self, category: Option<&str>) -> Result<Url, ApiError> {
        match category {
            Some(category) => self.endpoint(&["products", "category", category]),
            None => self.endpoint(&["products"]),
        }
    }

    /// Appends `segments` to the base url. Each segment is percent-encoded on its own,
    /// so a category such as `men's clothing` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
