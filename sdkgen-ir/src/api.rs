//! API Intermediate Representation.
//!
//! The IR is the annotated form of the input document that every emitter
//! consumes:
//!
//! ```text
//! SwaggerDocument → Vec<Endpoint> (lowering) → ApiIR (naming + shapes) → emitters
//! ```

use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use thiserror::Error;

use crate::{Endpoint, HttpMethod, QueryParam, UriTemplate};

/// API IR - annotated endpoints plus document metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIR {
    /// Document metadata.
    pub meta: ApiMeta,
    /// Operations in document order.
    pub operations: Vec<Operation>,
}

impl ApiIR {
    /// Build the name → route registry.
    pub fn registry(&self) -> Result<EndpointRegistry, RegistryError> {
        let mut registry = EndpointRegistry::default();
        for op in &self.operations {
            registry.insert(op.name.clone(), &op.endpoint)?;
        }
        Ok(registry)
    }

    /// Find the operation serving `method` on `uri`.
    pub fn find(&self, method: HttpMethod, uri: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.endpoint.method == method && op.endpoint.uri.as_str() == uri)
    }

    /// Returns true if any operation sends a bearer token.
    pub fn uses_auth(&self) -> bool {
        self.operations.iter().any(|op| op.endpoint.auth_required)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiMeta {
    /// API title (`info.title`).
    pub title: String,
    /// API version (`info.version`).
    pub version: String,
    /// Prefix of every request path, from `basePath`. Starts with `/` and
    /// never ends with one; `None` when the document serves from the root.
    pub base_path: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// A casing-neutral operation identifier.
///
/// Stored as lowercase word tokens; emitters apply their own casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OperationName {
    words: Vec<String>,
}

impl OperationName {
    /// Create a name from word tokens. Tokens are lowercased and empty ones dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return a copy with `word` appended.
    pub fn with_suffix(&self, word: impl AsRef<str>) -> Self {
        let mut words = self.words.clone();
        words.push(word.as_ref().to_lowercase());
        Self { words }
    }

    /// Return a copy with `word` prepended.
    pub fn with_prefix(&self, word: impl AsRef<str>) -> Self {
        let mut words = vec![word.as_ref().to_lowercase()];
        words.extend(self.words.iter().cloned());
        Self { words }
    }

    /// Words joined with `_`.
    pub fn snake(&self) -> String {
        self.words.join("_")
    }

    /// Words concatenated. Two names with equal fold keys collide under
    /// every casing convention.
    pub fn fold_key(&self) -> String {
        self.words.concat()
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// The resolved calling convention for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestShape {
    /// Placeholder names that must be supplied, in template order.
    pub path_params: Vec<String>,
    /// Declared query parameters. Undeclared keys still pass through.
    pub query_params: Vec<QueryParam>,
    /// Whether the `body` slot is attached to the request.
    pub accepts_body: bool,
    /// Whether the bearer token is attached.
    pub auth_required: bool,
}

/// An endpoint annotated with its derived name and request shape.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub name: OperationName,
    pub endpoint: Endpoint,
    pub shape: RequestShape,
}

impl Operation {
    pub fn method(&self) -> HttpMethod {
        self.endpoint.method
    }

    pub fn uri(&self) -> &UriTemplate {
        &self.endpoint.uri
    }
}

/// Registry errors. Both indicate a pipeline bug or invalid input that
/// validation should have rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("operation name '{0}' is already registered")]
    DuplicateName(String),
    #[error("route {method} {uri} is already registered as '{existing}'")]
    DuplicateRoute {
        method: HttpMethod,
        uri: String,
        existing: String,
    },
}

/// A registry value: the route an operation name points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub method: HttpMethod,
    pub uri: String,
}

/// Mapping from operation name to route.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EndpointRegistry {
    routes: BTreeMap<OperationName, RouteEntry>,
}

impl EndpointRegistry {
    /// Register `name` for `endpoint`. Never overwrites.
    pub fn insert(&mut self, name: OperationName, endpoint: &Endpoint) -> Result<(), RegistryError> {
        if self.routes.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if let Some(existing) = self.lookup(endpoint.method, endpoint.uri.as_str()) {
            return Err(RegistryError::DuplicateRoute {
                method: endpoint.method,
                uri: endpoint.uri.to_string(),
                existing: existing.to_string(),
            });
        }
        self.routes.insert(
            name,
            RouteEntry {
                method: endpoint.method,
                uri: endpoint.uri.to_string(),
            },
        );
        Ok(())
    }

    /// Find the name registered for `(method, uri)`.
    pub fn lookup(&self, method: HttpMethod, uri: &str) -> Option<&OperationName> {
        self.routes
            .iter()
            .find(|(_, route)| route.method == method && route.uri == uri)
            .map(|(name, _)| name)
    }

    pub fn get(&self, name: &OperationName) -> Option<&RouteEntry> {
        self.routes.get(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Entries ordered by name words.
    pub fn iter(&self) -> impl Iterator<Item = (&OperationName, &RouteEntry)> {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(method: HttpMethod, uri: &str) -> Endpoint {
        Endpoint::new(method, UriTemplate::parse(uri).unwrap())
    }

    #[test]
    fn test_operation_name_normalizes_words() {
        let name = OperationName::new(["Get", "", "Dogs"]);
        assert_eq!(name.words(), &["get", "dogs"]);
        assert_eq!(name.snake(), "get_dogs");
        assert_eq!(name.fold_key(), "getdogs");
        assert_eq!(name.to_string(), "get dogs");
    }

    #[test]
    fn test_fold_key_detects_casing_collisions() {
        let a = OperationName::new(["get", "dogs", "list"]);
        let b = OperationName::new(["get", "dogslist"]);
        assert_ne!(a, b);
        assert_eq!(a.fold_key(), b.fold_key());
    }

    #[test]
    fn test_with_suffix_and_prefix() {
        let name = OperationName::new(["get", "dogs"]);
        assert_eq!(name.with_suffix("2").words(), &["get", "dogs", "2"]);
        assert_eq!(name.with_prefix("op").words(), &["op", "get", "dogs"]);
    }

    #[test]
    fn test_registry_insert_and_lookup() {
        let mut registry = EndpointRegistry::default();
        let list = OperationName::new(["get", "dogs"]);
        registry
            .insert(list.clone(), &endpoint(HttpMethod::Get, "/dogs"))
            .unwrap();
        registry
            .insert(
                OperationName::new(["post", "dogs"]),
                &endpoint(HttpMethod::Post, "/dogs"),
            )
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(HttpMethod::Get, "/dogs"), Some(&list));
        assert_eq!(registry.lookup(HttpMethod::Delete, "/dogs"), None);
        assert_eq!(registry.get(&list).unwrap().uri, "/dogs");
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = EndpointRegistry::default();
        let name = OperationName::new(["get", "dogs"]);
        registry
            .insert(name.clone(), &endpoint(HttpMethod::Get, "/dogs"))
            .unwrap();

        let err = registry
            .insert(name, &endpoint(HttpMethod::Get, "/cats"))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("get dogs".into()));

        let err = registry
            .insert(
                OperationName::new(["list", "dogs"]),
                &endpoint(HttpMethod::Get, "/dogs"),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRoute { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_iterates_sorted() {
        let mut registry = EndpointRegistry::default();
        for (words, uri) in [
            (["post", "dogs"], "/dogs"),
            (["get", "dogs"], "/dogs/all"),
            (["delete", "dogs"], "/dogs/old"),
        ] {
            let method = words[0].parse().unwrap();
            registry
                .insert(OperationName::new(words), &endpoint(method, uri))
                .unwrap();
        }
        let order: Vec<_> = registry.iter().map(|(n, _)| n.snake()).collect();
        assert_eq!(order, vec!["delete_dogs", "get_dogs", "post_dogs"]);
    }
}
