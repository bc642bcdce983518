use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failures of a single call against the Plex server.
#[derive(Debug, Error)]
pub enum PlexError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connect, timeout, body read).
    #[error("{method} {endpoint} failed: {source}")]
    Transport {
        method: Method,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{method} {endpoint} returned HTTP {status}")]
    Status {
        method: Method,
        endpoint: String,
        status: StatusCode,
    },

    #[error("malformed XML from {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: xmltree::ParseError,
    },

    #[error("unexpected document from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_xml_rs::Error,
    },
}

impl PlexError {
    /// HTTP status of a [`PlexError::Status`] failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PlexError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} variable not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
