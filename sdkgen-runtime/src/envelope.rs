//! The uniform `{success, data, error}` result of every operation.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Result of one operation call. Exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) if self.success => Ok(data),
            (_, error) => Err(error.unwrap_or_else(|| "unknown error".to_string())),
        }
    }
}

impl ResponseEnvelope<Value> {
    /// Deserialize `data` into `U`. A decode failure yields a failed envelope.
    pub fn decode<U: DeserializeOwned>(self) -> ResponseEnvelope<U> {
        match self.into_result() {
            Ok(data) => match serde_json::from_value(data) {
                Ok(decoded) => ResponseEnvelope::ok(decoded),
                Err(err) => ResponseEnvelope::fail(format!("invalid response body: {}", err)),
            },
            Err(error) => ResponseEnvelope::fail(error),
        }
    }
}
