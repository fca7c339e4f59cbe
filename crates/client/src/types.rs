//! Public domain types for the FreeStuff API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game listing category supported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    /// All games known to the API.
    All,
    /// Games that have been manually approved for listing.
    Approved,
    /// All known free games.
    #[default]
    Free,
}

impl GameCategory {
    /// Path segment used by the `/games/{category}` endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            GameCategory::All => "all",
            GameCategory::Approved => "approved",
            GameCategory::Free => "free",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`GameCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game category '{0}' (expected all, approved or free)")]
pub struct ParseCategoryError(pub String);

impl FromStr for GameCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(GameCategory::All),
            "approved" => Ok(GameCategory::Approved),
            "free" => Ok(GameCategory::Free),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Information about a single listed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    /// ID identifying the game in FreeStuff.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Point at which the game stops being free; `None` means free forever.
    pub until: Option<DateTime<Utc>>,
    /// Type of product as reported by the API (e.g. `"game"`).
    pub kind: String,
    pub urls: GameInfoUrls,
    /// Identifier of the store listing the game (e.g. `"epic"`).
    pub store: String,
}

impl GameInfo {
    pub fn is_free_forever(&self) -> bool {
        self.until.is_none()
    }
}

/// Links at which a game can be viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameInfoUrls {
    /// Default URL to view the game.
    pub default: String,
    /// URL meant for a web browser.
    pub browser: String,
    /// Original store URL, bypassing analytics and referrers.
    pub org: String,
    /// Deep link into the store's client app, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}
