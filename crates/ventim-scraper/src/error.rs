use thiserror::Error;
use ventim_core::CriteriaError;

/// Every failure surfaced by the extraction pipeline. Nothing is retried or
/// recovered internally; each variant aborts the current operation.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} ({reason}) from {url}")]
    UnexpectedStatus {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {context} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        context: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid search criteria: {0}")]
    Validation(#[from] CriteriaError),

    #[error("embedded JSON in {context} is malformed: {source}")]
    EmbeddedJson {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no configuration block containing \"{marker}\" found")]
    PayloadNotFound { marker: String },

    #[error("{context} is missing field \"{field}\"")]
    MissingField { context: String, field: String },

    #[error("seat map schema violation at {path}: {reason}")]
    Schema { path: String, reason: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
