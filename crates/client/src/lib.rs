//! Client for the [FreeStuff](https://freestuffbot.xyz) free games API v1.
//!
//! Provides an async client for the three listing endpoints (ping, game IDs
//! by category, game info by ID batch), mapping the API's JSON envelopes onto
//! a typed domain model. The HTTP sender sits behind the [`Transport`] trait
//! so it can be swapped for a test double.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod validate;

mod wire;

pub use client::{Client, FreeStuffApi, with_deadline};
pub use error::Error;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
pub use types::{GameCategory, GameInfo, GameInfoUrls, ParseCategoryError};
