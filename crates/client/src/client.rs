//! FreeStuff API client.
//!
//! Every request carries `Authorization: Basic <api key>` with the key passed
//! through verbatim. No timeout is enforced here; callers bound calls with
//! [`with_deadline`] or by dropping the future.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::Error;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::{GameCategory, GameInfo};
use crate::wire::{ErrorResponse, GameInfoResponse, GameListResponse};

const DEFAULT_BASE_URL: &str = "https://api.freestuffbot.xyz/v1";

/// FreeStuff API client.
///
/// Cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct Client {
    auth: HeaderValue,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client with the given API key, backed by `reqwest`.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_transport(api_key, ReqwestTransport::build()?)
    }

    /// Creates a new client that sends requests through `transport`.
    pub fn with_transport(api_key: &str, transport: impl Transport + 'static) -> Result<Self, Error> {
        let mut auth =
            HeaderValue::from_str(&format!("Basic {api_key}")).map_err(|_| Error::InvalidKey)?;
        auth.set_sensitive(true);

        Ok(Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(transport),
        })
    }

    /// Sets a custom base URL (for testing or proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pings the API.
    pub async fn ping(&self) -> Result<(), Error> {
        self.get("/ping").await?;
        Ok(())
    }

    /// Returns the IDs of the games listed under `category`, in API order.
    pub async fn get_game_ids(&self, category: GameCategory) -> Result<Vec<i64>, Error> {
        let resp = self.get(&format!("/games/{category}")).await?;
        let list: GameListResponse = decode(&resp.body, || {
            format!("game list response for category '{category}'")
        })?;
        Ok(list.data)
    }

    /// Returns game information for the given IDs.
    ///
    /// The API keys its answer by game ID, so the order of the returned
    /// entries is unspecified and need not match `game_ids`. Either every
    /// entry is returned or an error is.
    pub async fn get_game_info(&self, game_ids: &[i64]) -> Result<Vec<GameInfo>, Error> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = join_ids(game_ids, "+");
        let resp = self.get(&format!("/game/{joined}/info")).await?;
        let infos: GameInfoResponse = decode(&resp.body, || {
            format!(
                "response for reading {} game IDs [{}]",
                game_ids.len(),
                join_ids(game_ids, ", ")
            )
        })?;

        infos
            .data
            .into_values()
            .map(|info| info.into_domain())
            .collect()
    }

    /// Performs an authenticated GET request and rejects non-200 statuses.
    async fn get(&self, uri: &str) -> Result<HttpResponse, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth.clone());

        let request = HttpRequest {
            method: Method::GET,
            url: format!("{}{}", self.base_url, uri),
            headers,
        };

        debug!(uri, "sending request");
        let resp = self
            .transport
            .execute(request)
            .await
            .map_err(|source| Error::Transport {
                uri: uri.to_string(),
                source,
            })?;
        debug!(uri, status = resp.status.as_u16(), "received response");

        if resp.status != StatusCode::OK {
            return Err(response_error(uri, &resp));
        }

        Ok(resp)
    }
}

/// The FreeStuff API contract, separate from its HTTP implementation.
///
/// [`Client`] implements it; consumers that need to stand in for the whole
/// API (rather than only the HTTP layer) implement it themselves.
pub trait FreeStuffApi: Send + Sync {
    /// Pings the API.
    fn ping(&self) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send + '_>>;

    /// Returns the IDs of the games listed under `category`.
    fn get_game_ids(
        &self,
        category: GameCategory,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<i64>, Error>> + Send + '_>>;

    /// Returns game information for the given IDs, in unspecified order.
    fn get_game_info<'a>(
        &'a self,
        game_ids: &'a [i64],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<GameInfo>, Error>> + Send + 'a>>;
}

impl FreeStuffApi for Client {
    fn ping(&self) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send + '_>> {
        Box::pin(Client::ping(self))
    }

    fn get_game_ids(
        &self,
        category: GameCategory,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<i64>, Error>> + Send + '_>> {
        Box::pin(Client::get_game_ids(self, category))
    }

    fn get_game_info<'a>(
        &'a self,
        game_ids: &'a [i64],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<GameInfo>, Error>> + Send + 'a>> {
        Box::pin(Client::get_game_info(self, game_ids))
    }
}

/// Classifies a non-200 response, extracting the API's message when the
/// error envelope decodes.
fn response_error(uri: &str, resp: &HttpResponse) -> Error {
    let status = resp.status.as_u16();
    let message = match serde_json::from_slice::<ErrorResponse>(&resp.body) {
        Ok(envelope) if !envelope.message.is_empty() => Some(envelope.message),
        Ok(_) => None,
        Err(e) => {
            warn!(uri, status, error = %e, "could not decode error response");
            None
        }
    };
    Error::Api {
        uri: uri.to_string(),
        status,
        message,
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], context: impl FnOnce() -> String) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        context: context(),
        source,
    })
}

fn join_ids(ids: &[i64], sep: &str) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Runs `fut` under a deadline, mapping expiry to [`Error::Timeout`].
///
/// The in-flight request is cancelled when the deadline elapses.
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    tokio::time::timeout(deadline, fut)
        .await
        .map_err(|_| Error::Timeout)?
}
