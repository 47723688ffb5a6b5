//! Wire-message construction for the FCM v1 send endpoint.
//!
//! Message schema reference:
//! https://firebase.google.com/docs/reference/fcm/rest/v1/projects.messages

use std::collections::BTreeMap;

use serde_json::{Value as JsonValue, json};

use super::values::coerce_map;
use crate::providers::provider::{Alert, Payload, PayloadValue};

/// Alert content as a payload mapping, plain text wrapped with the same
/// literal in both fields
fn alert_fields(alert: &Alert) -> BTreeMap<String, PayloadValue> {
    let (title, body) = match alert {
        Alert::Text(text) => (text.clone(), text.clone()),
        Alert::Detail { title, body } => (title.clone(), body.clone()),
    };

    [
        ("title".to_string(), PayloadValue::String(title)),
        ("body".to_string(), PayloadValue::String(body)),
    ]
    .into_iter()
    .collect()
}

/// Empty or zero-like extension values are omitted from the wire entirely
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    }
}

/// Builds the wire message document.
///
/// Pure and deterministic: `{"message": {"token", "notification"?,
/// "data"?, "android"?, "webpush"?, "apns"?}}`. Optional fields that are
/// absent or empty are omitted, never emitted as empty objects.
pub fn build_message(token: &str, alert: Option<&Alert>, payload: &Payload) -> JsonValue {
    let mut message = serde_json::Map::new();
    message.insert("token".to_string(), json!(token));

    if let Some(alert) = alert {
        message.insert(
            "notification".to_string(),
            json!(coerce_map(&alert_fields(alert))),
        );
    }

    if let Some(data) = &payload.data
        && !data.is_empty()
    {
        message.insert("data".to_string(), json!(coerce_map(data)));
    }

    let extensions = [
        ("android", &payload.android),
        ("webpush", &payload.webpush),
        ("apns", &payload.apns),
    ];
    for (key, extension) in extensions {
        if let Some(value) = extension
            && is_truthy(value)
        {
            message.insert(key.to_string(), value.clone());
        }
    }

    json!({ "message": message })
}

/// Serializes the wire message to the request body text
pub fn build_request(token: &str, alert: Option<&Alert>, payload: &Payload) -> String {
    build_message(token, alert, payload).to_string()
}
