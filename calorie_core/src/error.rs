//! Error types for the calorie_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for calorie_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Transport failure or non-success status from the nutrition API
    ///
    /// The source never carries the request URL, which holds the API key.
    #[error("HTTP error from {endpoint}: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a body that does not match the expected shape
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The database has no food under this identifier
    #[error("No food found for ndbno {0}")]
    FoodNotFound(String),

    /// The environment variable holding the API key is unset or empty
    #[error("API key not set: export {0} to query the nutrition database")]
    MissingApiKey(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
