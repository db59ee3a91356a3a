//! Path and query arguments.

use indexmap::IndexMap;
use serde_json::Value;

use crate::CallError;

/// Named call arguments, kept in insertion order.
///
/// ```
/// use sdkgen_runtime::Params;
///
/// let query = Params::new().with("country", "US").with("active", true);
/// assert_eq!(query.to_query_string(), "?country=US&active=true");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(IndexMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Query pairs: null values are skipped and arrays repeat the key.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_string)
                        .map(|item| (key.clone(), item)),
                ),
                other => pairs.extend(scalar_string(other).map(|v| (key.clone(), v))),
            }
        }
        pairs
    }

    /// Percent-encoded query string with a leading `?`, or empty.
    pub fn to_query_string(&self) -> String {
        let encoded = self
            .query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{}", encoded)
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Map<String, Value>> for Params {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// String form of a scalar; `None` for null. Nested values become JSON text.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Substitute every `{name}` placeholder of `uri` with its percent-encoded
/// value from `path`.
pub fn build_path(uri: &str, path: Option<&Params>) -> Result<String, CallError> {
    let mut out = String::with_capacity(uri.len());
    let mut rest = uri;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        out.push_str(&rest[..open]);

        let name = &rest[open + 1..close];
        let value = path
            .and_then(|p| p.get(name))
            .and_then(scalar_string)
            .ok_or_else(|| CallError::MissingPathParam {
                param: name.to_string(),
                uri: uri.to_string(),
            })?;
        out.push_str(&urlencoding::encode(&value));
        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
