//! Error types for the FreeStuff client.

use crate::transport::TransportError;
use crate::types::GameCategory;

/// Errors produced by the FreeStuff client and its result checks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to execute request against '{uri}': {source}")]
    Transport {
        uri: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("game ID {id} has an out-of-range 'until' timestamp: {until}")]
    InvalidTimestamp { id: i64, until: i64 },

    #[error("unexpected response status code {status} from '{uri}'{}", describe_message(.message))]
    Api {
        uri: String,
        status: u16,
        message: Option<String>,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API key")]
    InvalidKey,

    #[error("request deadline elapsed")]
    Timeout,

    #[error("no game IDs returned for category '{category}'")]
    EmptyResult { category: GameCategory },

    #[error("asked for {requested} IDs, got {received} games")]
    CountMismatch { requested: usize, received: usize },

    #[error("game ID {id} has no title")]
    MissingTitle { id: i64 },

    #[error("game ID {id} was not requested")]
    UnexpectedId { id: i64 },

    #[error("game ID {id} was requested but not returned")]
    MissingId { id: i64 },
}

impl Error {
    /// Returns the API-supplied message of an [`Error::Api`], if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn describe_message(message: &Option<String>) -> String {
    match message {
        Some(m) => format!("; response message was: '{m}'"),
        None => "; the error could not be obtained from the response".into(),
    }
}
