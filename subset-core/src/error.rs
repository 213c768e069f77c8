/// Error types for the subset form core
use thiserror::Error;

/// Main error type for data API and form model operations
#[derive(Error, Debug)]
pub enum SubsetError {
    /// The server answered GETTIMES with a non-success status: the dataset
    /// is not loaded yet. This is an expected, transient state.
    #[error("Dataset {dataset} is not loaded on the server yet (status {status})")]
    Unavailable { dataset: String, status: u16 },

    /// Any other request answered with a non-success status
    #[error("{request} request failed with status {status}")]
    Status { request: String, status: u16 },

    /// Network-level failure, no response was received
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    /// Failed to parse a JSON response body
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A dataset list entry was not a single-key object
    #[error("Invalid dataset list entry: {0}")]
    InvalidDatasetEntry(String),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// The time range produced no months
    #[error("Time range {start} to {end} contains no months")]
    EmptyTimeRange { start: String, end: String },

    /// The API base URL could not be resolved
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for SubsetError {
    fn from(e: reqwest::Error) -> Self {
        SubsetError::Transport(e.to_string())
    }
}

/// Reasons a submission is blocked before it leaves the page
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("You must enter an email address and a job reference.")]
    MissingEmailAndReference,

    #[error("You must enter an email address.")]
    MissingEmail,
}

/// Type alias for Results using SubsetError
pub type Result<T> = std::result::Result<T, SubsetError>;
