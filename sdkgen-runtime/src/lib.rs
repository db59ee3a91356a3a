//! Runtime support for Rust SDKs emitted by sdkgen.
//!
//! Generated modules declare their routes as [`Route`] constants and call
//! [`Client::call`] from one free function per operation:
//!
//! ```ignore
//! use sdkgen_runtime::{Params, StaticToken};
//!
//! dog_parlor::set_base_url("https://api.example.com");
//! dog_parlor::set_token_provider(StaticToken::new("secret"));
//!
//! let path = Params::new().with("id", "abc");
//! let envelope = dog_parlor::get_dogs_appointments(Some(&path), None, None, None).await;
//! if envelope.success {
//!     println!("{}", envelope.data.unwrap_or_default());
//! }
//! ```
//!
//! Every failure, including a missing path parameter, comes back as a failed
//! [`ResponseEnvelope`]; operations never panic or return `Err`.

mod client;
mod config;
mod envelope;
mod error;
mod params;
mod route;
mod transport;

#[cfg(feature = "testing")]
mod mock;
#[cfg(feature = "reqwest")]
mod reqwest_transport;

pub use async_trait::async_trait;
pub use client::Client;
pub use config::{CallConfig, ModuleConfig, StaticToken, TokenProvider};
pub use envelope::ResponseEnvelope;
pub use error::{CallError, TransportError};
#[cfg(feature = "testing")]
pub use mock::MockTransport;
pub use params::{Params, build_path};
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
pub use route::{Method, OperationOptions, Route};
pub use serde_json::{Value, json};
pub use transport::{HttpRequest, HttpResponse, Transport, normalize_body};
