use serde::{Deserialize, Serialize};

/// Inclusive latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// The FanCode city region.
    pub const FANCODE_CITY: Bounds = Bounds {
        min_lat: -40.0,
        max_lat: 5.0,
        min_lng: 5.0,
        max_lng: 100.0,
    };

    /// NaN on either axis is never contained.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FANCODE_CITY
    }
}
