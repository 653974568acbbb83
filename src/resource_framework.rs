use std::fmt::Debug;
use std::marker::PhantomData;
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::error::FetchError;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type served by the API must implement to be fetched by ResourceClient
pub trait Resource: DeserializeOwned + Debug + Send + Sync + 'static {
    /// Path segment under the base URL, e.g. `users`
    const PATH: &'static str;
}

// =============================================================================
// 2. THE GENERIC CLIENT
// =============================================================================

/// Read-only handle on one collection resource.
#[derive(Debug)]
pub struct ResourceClient<T: Resource> {
    http: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            _resource: PhantomData,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url, T::PATH)
    }

    /// GET the whole collection and decode it as a JSON array of `T`.
    ///
    /// The body is read in full before decoding so a transport failure and a shape mismatch
    /// surface as different errors.
    pub async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        let url = self.url();
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| FetchError::Network { resource: T::PATH, source })?;

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { resource: T::PATH, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { resource: T::PATH, source })
    }
}
