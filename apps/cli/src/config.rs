//! CLI configuration, read from environment variables:
//!
//! - `FREESTUFF_API_KEY` (required)
//! - `FREESTUFF_CATEGORY` (`all`, `approved` or `free`; default `free`)
//! - `FREESTUFF_TIMEOUT_SECS` (default `30`)
//! - `FREESTUFF_API_URL` (optional base URL override)

use std::time::Duration;

use anyhow::{Context, bail};
use freestuff_client::GameCategory;

pub const API_KEY_VAR: &str = "FREESTUFF_API_KEY";
pub const CATEGORY_VAR: &str = "FREESTUFF_CATEGORY";
pub const TIMEOUT_VAR: &str = "FREESTUFF_TIMEOUT_SECS";
pub const API_URL_VAR: &str = "FREESTUFF_API_URL";

/// CLI configuration.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,

    /// Category whose games are checked.
    pub category: GameCategory,

    /// Deadline for the whole check (ping, IDs, info).
    pub timeout: Duration,

    pub base_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("category", &self.category)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let Some(api_key) = get(API_KEY_VAR) else {
            bail!("{API_KEY_VAR} must be set");
        };

        let category = match get(CATEGORY_VAR) {
            Some(raw) => raw
                .parse::<GameCategory>()
                .with_context(|| format!("invalid {CATEGORY_VAR}"))?,
            None => GameCategory::default(),
        };

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {TIMEOUT_VAR}: '{raw}'"))?;
                if secs == 0 {
                    bail!("{TIMEOUT_VAR} must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => default_timeout(),
        };

        Ok(Self {
            api_key,
            category,
            timeout,
            base_url: get(API_URL_VAR),
        })
    }
}
