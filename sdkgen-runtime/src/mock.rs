//! An in-memory transport for tests.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::{HttpRequest, HttpResponse, Method, Transport, TransportError};

type Handler = Arc<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync>;

struct Stub {
    method: Method,
    path: String,
    handler: Handler,
}

/// Records every request and answers from registered handlers.
///
/// Handlers match on method and expanded path (no base URL, no query). A
/// request with no matching handler fails with
/// [`TransportError::Unmatched`].
#[derive(Default)]
pub struct MockTransport {
    stubs: Mutex<Vec<Stub>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, method: Method, path: impl Into<String>, handler: F) -> &Self
    where
        F: Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static,
    {
        self.push(method, path.into(), Arc::new(move |req: &HttpRequest| Ok(handler(req))))
    }

    /// Answer `method path` with a fixed status and body.
    pub fn reply(
        &self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        body: impl Into<Value>,
    ) -> &Self {
        let response = HttpResponse::new(status, body);
        self.push(
            method,
            path.into(),
            Arc::new(move |_: &HttpRequest| Ok(response.clone())),
        )
    }

    /// Fail `method path` with a transport error.
    pub fn fail(&self, method: Method, path: impl Into<String>, error: TransportError) -> &Self {
        self.push(method, path.into(), Arc::new(move |_: &HttpRequest| Err(error.clone())))
    }

    fn push(&self, method: Method, path: String, handler: Handler) -> &Self {
        self.stubs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Stub {
                method,
                path,
                handler,
            });
        self
    }

    /// Every request sent so far, matched or not.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        // The lock is released before the handler runs, so handlers may stub.
        let handler = self
            .stubs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|s| s.method == request.method && s.path == request.path)
            .map(|s| s.handler.clone());
        match handler {
            Some(handler) => handler(&request),
            None => Err(TransportError::Unmatched {
                method: request.method,
                path: request.path,
            }),
        }
    }
}
