//! Module configuration and per-call overrides.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::Client;

/// Supplies the bearer token. Called once per authenticated request.
///
/// An empty token means no `Authorization` header is sent. Any
/// `Fn() -> String` closure is a provider.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> String;
}

#[async_trait]
impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    async fn token(&self) -> String {
        self()
    }
}

/// A fixed token obtained elsewhere.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> String {
        self.0.clone()
    }
}

/// Per-module state read once at the start of every call.
#[derive(Clone)]
pub struct ModuleConfig {
    /// Prepended to every path; empty until set.
    pub base_url: String,
    pub token_provider: Arc<dyn TokenProvider>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token_provider: Arc::new(String::new),
        }
    }
}

impl fmt::Debug for ModuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Per-call overrides. Never modifies the module configuration.
#[derive(Debug, Clone, Default)]
pub struct CallConfig {
    /// Extra headers, applied after the generated ones.
    pub headers: IndexMap<String, String>,
    pub timeout: Option<Duration>,
    /// Log the request and response at `info` level.
    pub debug: bool,
    /// Send through this client instead of the module default.
    pub client: Option<Client>,
}

impl CallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}
