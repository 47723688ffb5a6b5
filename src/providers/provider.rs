//! Core push provider trait and request types.
//!
//! This module provides the abstraction for push providers, allowing other
//! vendors to plug in analogously to the FCM implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::error::PushResult;

/// Alert content of a notification.
///
/// Plain text is wrapped on the wire as `{title: text, body: text}` with
/// the same literal in both fields; a detail alert passes through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alert {
    /// Structured alert with separate title and body
    Detail { title: String, body: String },
    /// Plain alert text
    Text(String),
}

impl Alert {
    /// Convenience constructor for a plain-text alert
    pub fn text<S: Into<String>>(text: S) -> Self {
        Alert::Text(text.into())
    }

    /// Convenience constructor for a structured alert
    pub fn detail<S: Into<String>>(title: S, body: S) -> Self {
        Alert::Detail {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A payload value with its variant made explicit.
///
/// Wire coercion is defined per variant instead of sniffing types at
/// runtime, so its behavior is enumerable and exhaustively testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PayloadValue {
    /// Absent value; coercion omits the key entirely
    #[default]
    Null,
    /// Boolean; coerced to "1"/"0"
    Bool(bool),
    /// Number; coerced to its decimal text
    Number(serde_json::Number),
    /// String; passed through
    String(String),
    /// Nested mapping; recursively coerced, then JSON-string-encoded
    Map(BTreeMap<String, PayloadValue>),
}

impl From<JsonValue> for PayloadValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PayloadValue::Null,
            JsonValue::Bool(b) => PayloadValue::Bool(b),
            JsonValue::Number(n) => PayloadValue::Number(n),
            JsonValue::String(s) => PayloadValue::String(s),
            JsonValue::Object(map) => PayloadValue::Map(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
            // No list variant on the wire; arrays become their JSON text
            array @ JsonValue::Array(_) => PayloadValue::String(array.to_string()),
        }
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue::Bool(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::String(value.to_string())
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        PayloadValue::Number(value.into())
    }
}

/// Platform payload extensions of a send request.
///
/// `android`, `apns` and `webpush` are provider-native JSON passed through
/// untouched; `data` is coerced to string leaves before it reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Android-specific message options, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<JsonValue>,
    /// APNs-specific message options, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apns: Option<JsonValue>,
    /// Webpush-specific message options, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpush: Option<JsonValue>,
    /// Custom key/value data, coerced to string values on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, PayloadValue>>,
}

/// A single notification send request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendRequest {
    /// Device token addressing one installed-app instance (required)
    pub token: String,
    /// Alert content (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    /// Platform payload extensions
    #[serde(default)]
    pub payload: Payload,
    /// Opaque caller metadata; not part of the wire format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<JsonValue>,
}

impl SendRequest {
    /// Creates a request addressing the given device token
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }
}

/// Raw successful response of a send attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResponse {
    /// HTTP status code reported by the provider
    pub status: u16,
    /// Response body, returned to the caller unparsed
    pub body: String,
}

/// Trait for push providers (FCM, APNs, etc.)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Delivers one notification: a single request yields a single
    /// response or a single typed error. No retries.
    async fn send(&self, request: &SendRequest) -> PushResult<SendResponse>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op)
    async fn validate_config(&self) -> PushResult<()> {
        Ok(())
    }
}
