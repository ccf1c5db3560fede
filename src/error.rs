use std::error::Error;

use crate::shorten::ApiError;

// Error type covering the whole pipeline.  Every variant is terminal: main
// prints the error and exits with status 1.
#[derive(Debug, derive_more::Display)]
pub enum FirelinkError {
    #[display("cannot read clipboard: {_0}")]
    Input(String),
    #[display("invalid link: {_0}")]
    Validation(url::ParseError),
    #[display("configuration error: {_0}")]
    Config(String),
    #[display("request failed: {_0}")]
    Network(reqwest::Error),
    #[display("unexpected response from link service: {_0}")]
    Protocol(serde_json::Error),
    #[display("link service error: {_0}")]
    Service(ApiError),
    #[display("invalid internationalized host: {_0}")]
    Encoding(String),
}

impl Error for FirelinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FirelinkError::Validation(e) => Some(e),
            FirelinkError::Network(e) => Some(e),
            FirelinkError::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

impl From<url::ParseError> for FirelinkError {
    fn from(e: url::ParseError) -> Self {
        FirelinkError::Validation(e)
    }
}

impl From<reqwest::Error> for FirelinkError {
    fn from(e: reqwest::Error) -> Self {
        FirelinkError::Network(e)
    }
}

impl From<serde_json::Error> for FirelinkError {
    fn from(e: serde_json::Error) -> Self {
        FirelinkError::Protocol(e)
    }
}
