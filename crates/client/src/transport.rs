//! HTTP transport seam.
//!
//! The [`Client`](crate::Client) never talks to `reqwest` directly; it hands a
//! fully-formed [`HttpRequest`] to a [`Transport`] and gets back a buffered
//! [`HttpResponse`]. Tests substitute their own implementation.

use std::future::Future;
use std::pin::Pin;

use crate::error::Error;

pub use reqwest::header::HeaderMap;
pub use reqwest::{Method, StatusCode};

/// Failure reported by a [`Transport`] while executing a request.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A fully-formed outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

/// A response with its body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Executes HTTP requests on behalf of the client.
///
/// Implementations carry no retry or timeout policy of their own.
pub trait Transport: Send + Sync {
    /// Executes the given request.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + '_>>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport over a default `reqwest` client.
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn build() -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }

    /// Wraps an existing `reqwest` client, e.g. one configured with a timeout.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(http: reqwest::Client) -> Self {
        Self::new(http)
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + '_>> {
        Box::pin(async move {
            let resp = self
                .http
                .request(request.method, &request.url)
                .headers(request.headers)
                .send()
                .await?;
            let status = resp.status();
            let body = resp.bytes().await?.to_vec();
            Ok::<_, TransportError>(HttpResponse { status, body })
        })
    }
}
