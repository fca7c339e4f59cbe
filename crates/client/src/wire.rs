//! JSON envelopes returned by the FreeStuff API (internal).

use std::collections::HashMap;

use chrono::DateTime;
use serde::Deserialize;

use crate::error::Error;
use crate::types::{GameInfo, GameInfoUrls};

/// Error envelope returned alongside non-200 statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
    #[serde(default)]
    #[allow(dead_code)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// Response of `/games/{category}`.
#[derive(Debug, Deserialize)]
pub(crate) struct GameListResponse {
    pub data: Vec<i64>,
}

/// Response of `/game/{ids}/info`.
///
/// Entries are keyed by the string-encoded game ID. Iteration order over the
/// map is unspecified.
#[derive(Debug, Deserialize)]
pub(crate) struct GameInfoResponse {
    pub data: HashMap<String, WireGameInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGameInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Unix epoch seconds.
    #[serde(default)]
    pub until: Option<i64>,
    #[serde(default)]
    pub urls: WireGameInfoUrls,
    #[serde(default)]
    pub store: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireGameInfoUrls {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub browser: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub client: String,
}

impl WireGameInfo {
    /// Projects the wire record onto the domain model.
    ///
    /// An empty `client` URL is treated as absent.
    pub(crate) fn into_domain(self) -> Result<GameInfo, Error> {
        let until = match self.until {
            Some(secs) => Some(DateTime::from_timestamp(secs, 0).ok_or(
                Error::InvalidTimestamp {
                    id: self.id,
                    until: secs,
                },
            )?),
            None => None,
        };

        let client = Some(self.urls.client).filter(|c| !c.is_empty());

        Ok(GameInfo {
            id: self.id,
            title: self.title,
            description: self.description,
            until,
            kind: self.kind,
            urls: GameInfoUrls {
                default: self.urls.default,
                browser: self.urls.browser,
                org: self.urls.org,
                client,
            },
            store: self.store,
        })
    }
}
