use thiserror::Error;

/// Invalid or incomplete backend configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} is not set")]
    Missing { field: String },

    #[error("Configuration error: {field} = {value} is not an http(s) URL")]
    InvalidUrl { field: String, value: String },

    #[error("Configuration error: {field} = {value}")]
    Invalid { field: String, value: String },
}

/// Failure loading posts from the document database
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Feed request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Could not decode document {document}: {reason}")]
    Decode { document: String, reason: String },
}

impl FeedError {
    pub fn decode(document: impl Into<String>, reason: impl Into<String>) -> Self {
        FeedError::Decode {
            document: document.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network {
            message: err.to_string(),
        }
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
