//! Configuration management using Figment
//!
//! Defaults reproduce the fixed FanCode setup. A `fancode.toml` in the working directory may
//! override any of them:
//!
//! ```toml
//! base_url = "http://jsonplaceholder.typicode.com"
//! threshold = 50.0
//! request_timeout_secs = 10
//!
//! [bounds]
//! min_lat = -40.0
//! max_lat = 5.0
//! min_lng = 5.0
//! max_lng = 100.0
//! ```

use std::path::Path;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::app_system::AppError;
use crate::domain::Bounds;
use crate::pipeline::DEFAULT_THRESHOLD;

pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com";
pub const DEFAULT_CONFIG_FILE: &str = "fancode.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub bounds: Bounds,
    pub threshold: f64,
    /// Whole-request timeout. `None` keeps the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bounds: Bounds::FANCODE_CITY,
            threshold: DEFAULT_THRESHOLD,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load from `fancode.toml` in the working directory, falling back to defaults.
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a specific file. A missing file is not an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
        }

        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::InvalidConfig("base_url must not be empty".to_string()));
        }

        let b = &self.bounds;
        if [b.min_lat, b.max_lat, b.min_lng, b.max_lng].iter().any(|v| !v.is_finite()) {
            return Err(AppError::InvalidConfig("bounds must be finite numbers".to_string()));
        }
        if b.min_lat > b.max_lat || b.min_lng > b.max_lng {
            return Err(AppError::InvalidConfig(format!(
                "bounds are inverted: lat [{}, {}], lng [{}, {}]",
                b.min_lat, b.max_lat, b.min_lng, b.max_lng
            )));
        }

        if !self.threshold.is_finite() {
            return Err(AppError::InvalidConfig("threshold must be a finite number".to_string()));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("request_timeout_secs must be positive".to_string()));
        }

        Ok(())
    }
}
