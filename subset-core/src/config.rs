use crate::bounds::Limits;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default API path, resolved relative to the page.
pub const DEFAULT_ENDPOINT: &str = "data";

/// Form settings loaded once at startup.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Path of the data API relative to the page URL
    pub endpoint: String,
    /// Whether a job reference is required alongside the email address
    pub require_reference: bool,
    pub lat_limits: Limits,
    pub lon_limits: Limits,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            require_reference: true,
            lat_limits: Limits::LATITUDE,
            lon_limits: Limits::LONGITUDE,
        }
    }
}

impl FormConfig {
    /// Parse a JSON config. Missing keys take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn limits_for(&self, latitude: bool) -> Limits {
        if latitude {
            self.lat_limits
        } else {
            self.lon_limits
        }
    }
}
