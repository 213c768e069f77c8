//! The subset job the form posts, and submit-time validation.

use crate::bounds::BoundingBox;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check the required contact fields. Both are trimmed before the check.
/// With `require_reference` off only the email address is required.
pub fn validate_submission(
    email: &str,
    reference: &str,
    require_reference: bool,
) -> Result<(), ValidationError> {
    let email_missing = email.trim().is_empty();
    let reference_missing = require_reference && reference.trim().is_empty();
    if require_reference && (email_missing || reference_missing) {
        Err(ValidationError::MissingEmailAndReference)
    } else if email_missing {
        Err(ValidationError::MissingEmail)
    } else {
        Ok(())
    }
}

/// Spatial extent of a subset job.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum RequestArea {
    Point { lat: f64, lon: f64 },
    Country { region_id: String },
    Bounds(BoundingBox),
}

/// A complete subset job as submitted to the server.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SubsetRequest {
    pub dataset: String,
    pub area: RequestArea,
    pub start_time: String,
    pub end_time: String,
    pub email: String,
    pub reference: String,
}

impl SubsetRequest {
    /// Form parameters in the order the form posts them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("DATASET", self.dataset.clone())];
        match &self.area {
            RequestArea::Point { lat, lon } => {
                pairs.push(("DATATYPE", "point".to_string()));
                pairs.push(("LAT", lat.to_string()));
                pairs.push(("LON", lon.to_string()));
            }
            RequestArea::Country { region_id } => {
                pairs.push(("DATATYPE", "region".to_string()));
                pairs.push(("REGION", region_id.clone()));
            }
            RequestArea::Bounds(bbox) => {
                pairs.push(("DATATYPE", "region".to_string()));
                pairs.push(("REGION", "BOUNDS".to_string()));
                pairs.push(("MINLAT", bbox.min_lat.to_string()));
                pairs.push(("MAXLAT", bbox.max_lat.to_string()));
                pairs.push(("MINLON", bbox.min_lon.to_string()));
                pairs.push(("MAXLON", bbox.max_lon.to_string()));
            }
        }
        pairs.push(("STARTTIME", self.start_time.clone()));
        pairs.push(("ENDTIME", self.end_time.clone()));
        pairs.push(("EMAIL", self.email.trim().to_string()));
        pairs.push(("REF", self.reference.trim().to_string()));
        pairs
    }
}

impl fmt::Display for SubsetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ", self.dataset)?;
        match &self.area {
            RequestArea::Point { lat, lon } => write!(f, "point ({}, {})", lat, lon)?,
            RequestArea::Country { region_id } => write!(f, "region {}", region_id)?,
            RequestArea::Bounds(b) => write!(
                f,
                "bounds [{}, {}] x [{}, {}]",
                b.min_lat, b.max_lat, b.min_lon, b.max_lon
            )?,
        }
        write!(f, ", {} to {}", self.start_time, self.end_time)
    }
}
