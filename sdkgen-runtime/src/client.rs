//! The client that owns configuration and transport for one SDK module.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    CallConfig, CallError, HttpRequest, ModuleConfig, OperationOptions, Params, ResponseEnvelope,
    Route, TokenProvider, Transport, params::build_path,
};

/// Owns a [`ModuleConfig`] and a [`Transport`].
///
/// Cloning is cheap and clones share state. Setters take effect for calls
/// that start afterwards; a call in flight keeps the snapshot it took.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    config: RwLock<Arc<ModuleConfig>>,
    transport: RwLock<Arc<dyn Transport>>,
}

impl Client {
    /// A client with an empty base URL, an empty token and the default
    /// transport.
    pub fn new() -> Self {
        Self::with_transport(default_transport())
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(Inner {
                config: RwLock::new(Arc::new(ModuleConfig::default())),
                transport: RwLock::new(transport),
            }),
        }
    }

    pub fn set_base_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.update(|config| config.base_url = url);
    }

    pub fn set_token_provider(&self, provider: impl TokenProvider + 'static) {
        let provider: Arc<dyn TokenProvider> = Arc::new(provider);
        self.update(|config| config.token_provider = provider);
    }

    pub fn set_transport(&self, transport: Arc<dyn Transport>) {
        *self
            .inner
            .transport
            .write()
            .unwrap_or_else(PoisonError::into_inner) = transport;
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> Arc<ModuleConfig> {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn transport(&self) -> Arc<dyn Transport> {
        self.inner
            .transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut ModuleConfig)) {
        let mut guard = self
            .inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = ModuleConfig::clone(&guard);
        f(&mut next);
        *guard = Arc::new(next);
    }

    /// Perform one operation and wrap the outcome in an envelope.
    ///
    /// When `config` names a client, that client's configuration and
    /// transport are used instead of this one's.
    pub async fn call(
        &self,
        route: &Route,
        options: OperationOptions,
        path: Option<&Params>,
        query: Option<&Params>,
        body: Option<&Value>,
        config: Option<&CallConfig>,
    ) -> ResponseEnvelope {
        match self
            .try_call(route, options, path, query, body, config)
            .await
        {
            Ok(data) => ResponseEnvelope::ok(data),
            Err(err) => ResponseEnvelope::fail(err.to_string()),
        }
    }

    /// Like [`Client::call`], but keeps the typed error.
    pub async fn try_call(
        &self,
        route: &Route,
        options: OperationOptions,
        path: Option<&Params>,
        query: Option<&Params>,
        body: Option<&Value>,
        config: Option<&CallConfig>,
    ) -> Result<Value, CallError> {
        let defaults = CallConfig::default();
        let call = config.unwrap_or(&defaults);
        let client = call.client.as_ref().unwrap_or(self);

        let snapshot = client.config();
        let transport = client.transport();

        let path = format!("{}{}", route.base_path, build_path(route.uri, path)?);
        let query_string = query.map(Params::to_query_string).unwrap_or_default();
        let url = format!(
            "{}{}{}",
            snapshot.base_url.trim_end_matches('/'),
            path,
            query_string
        );

        let mut headers = IndexMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if options.auth_required {
            let token = snapshot.token_provider.token().await;
            if !token.is_empty() {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }
        let body = body.filter(|_| options.has_body).cloned();
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers.extend(call.headers.clone());

        let request = HttpRequest {
            method: route.method,
            url,
            path,
            query: query.map(Params::query_pairs).unwrap_or_default(),
            headers,
            body,
            timeout: call.timeout,
        };

        debug!(method = %request.method, url = %request.url, "sending request");
        if call.debug {
            info!(method = %request.method, url = %request.url, body = ?request.body, "request");
        }

        let response = transport.send(request).await.inspect_err(|err| {
            warn!(route = %route, error = %err, "transport failed");
        })?;

        if call.debug {
            info!(status = response.status, body = %response.body, "response");
        }

        if (200..300).contains(&response.status) {
            Ok(response.body)
        } else {
            Err(CallError::Status {
                status: response.status,
                detail: describe(response.body),
            })
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

fn describe(body: Value) -> Option<String> {
    match body {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(feature = "reqwest")]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(crate::ReqwestTransport::new())
}

#[cfg(not(feature = "reqwest"))]
fn default_transport() -> Arc<dyn Transport> {
    Arc::new(crate::transport::NoTransport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_replace_snapshot() {
        let client = Client::new();
        let before = client.config();
        client.set_base_url("https://api.test");

        assert_eq!(before.base_url, "");
        assert_eq!(client.config().base_url, "https://api.test");
    }

    #[test]
    fn test_clones_share_state() {
        let client = Client::new();
        let other = client.clone();
        other.set_base_url("https://shared.test");
        assert_eq!(client.config().base_url, "https://shared.test");
    }

    #[test]
    fn test_describe_status_body() {
        assert_eq!(describe(Value::Null), None);
        assert_eq!(describe(Value::String("gone".into())), Some("gone".into()));
        assert_eq!(
            describe(serde_json::json!({"message": "bad"})),
            Some("{\"message\":\"bad\"}".into())
        );
    }
}
