use thiserror::Error;

/// Errors raised while pulling a resource from the remote API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or non-2xx status.
    #[error("Network error fetching {resource}: {source}")]
    Network {
        resource: &'static str,
        source: reqwest::Error,
    },
    /// Body was not JSON, or not shaped like the expected records.
    #[error("Decode error for {resource}: {source}")]
    Decode {
        resource: &'static str,
        source: serde_json::Error,
    },
}
