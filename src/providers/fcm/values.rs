//! Wire-safe value coercion for the FCM v1 schema.
//!
//! FCM requires `notification` and `data` leaf values to be strings, with
//! two quirks: booleans become `"1"`/`"0"` rather than `"true"`/`"false"`,
//! and nested mappings become string-encoded JSON blobs rather than nested
//! objects.

use std::collections::BTreeMap;

use crate::providers::provider::PayloadValue;

/// Coerces a payload mapping into its wire form.
///
/// Per variant:
/// - `Bool(true)` -> `"1"`, `Bool(false)` -> `"0"`
/// - `Map` -> recursively coerced, then serialized to a JSON string;
///   if serialization fails the field is dropped with a diagnostic and
///   the rest of the mapping is unaffected
/// - `Null` -> key omitted entirely
/// - `Number`/`String` -> decimal text / passed through
pub fn coerce_map(map: &BTreeMap<String, PayloadValue>) -> BTreeMap<String, String> {
    let mut formatted = BTreeMap::new();

    for (key, value) in map {
        match value {
            PayloadValue::Null => {}
            PayloadValue::Bool(b) => {
                formatted.insert(key.clone(), if *b { "1" } else { "0" }.to_string());
            }
            PayloadValue::Map(nested) => match serde_json::to_string(&coerce_map(nested)) {
                Ok(encoded) => {
                    formatted.insert(key.clone(), encoded);
                }
                Err(e) => {
                    tracing::error!(field = %key, error = %e, "Error treating field");
                }
            },
            PayloadValue::Number(n) => {
                formatted.insert(key.clone(), n.to_string());
            }
            PayloadValue::String(s) => {
                formatted.insert(key.clone(), s.clone());
            }
        }
    }

    formatted
}

/// Coerces an arbitrary payload value.
///
/// Mappings go through [`coerce_map`]; anything else passes through
/// unchanged.
pub fn coerce_value(value: &PayloadValue) -> PayloadValue {
    match value {
        PayloadValue::Map(map) => PayloadValue::Map(
            coerce_map(map)
                .into_iter()
                .map(|(k, v)| (k, PayloadValue::String(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map_of(entries: Vec<(&str, PayloadValue)>) -> BTreeMap<String, PayloadValue> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_bool_true_becomes_one() {
        let coerced = coerce_map(&map_of(vec![("flag", PayloadValue::Bool(true))]));
        assert_eq!(coerced.get("flag").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_bool_false_becomes_zero() {
        let coerced = coerce_map(&map_of(vec![("flag", PayloadValue::Bool(false))]));
        assert_eq!(coerced.get("flag").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_null_key_is_omitted() {
        let coerced = coerce_map(&map_of(vec![
            ("gone", PayloadValue::Null),
            ("kept", PayloadValue::from("value")),
        ]));
        assert!(!coerced.contains_key("gone"));
        assert_eq!(coerced.get("kept").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_number_becomes_decimal_text() {
        let coerced = coerce_map(&map_of(vec![("count", PayloadValue::from(42))]));
        assert_eq!(coerced.get("count").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_string_passes_through() {
        let coerced = coerce_map(&map_of(vec![("name", PayloadValue::from("alice"))]));
        assert_eq!(coerced.get("name").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_nested_map_becomes_json_string() {
        let nested = map_of(vec![
            ("active", PayloadValue::Bool(true)),
            ("label", PayloadValue::from("inner")),
        ]);
        let coerced = coerce_map(&map_of(vec![("meta", PayloadValue::Map(nested.clone()))]));

        // The output is a single string containing valid JSON that decodes
        // to the recursively coerced nested mapping
        let encoded = coerced.get("meta").expect("meta should survive");
        let decoded: BTreeMap<String, String> = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded, coerce_map(&nested));
        assert_eq!(decoded.get("active").map(String::as_str), Some("1"));
        assert_eq!(decoded.get("label").map(String::as_str), Some("inner"));
    }

    #[test]
    fn test_doubly_nested_map() {
        let inner = map_of(vec![("deep", PayloadValue::Bool(false))]);
        let middle = map_of(vec![("inner", PayloadValue::Map(inner))]);
        let coerced = coerce_map(&map_of(vec![("outer", PayloadValue::Map(middle))]));

        let decoded: BTreeMap<String, String> =
            serde_json::from_str(coerced.get("outer").unwrap()).unwrap();
        let decoded_inner: BTreeMap<String, String> =
            serde_json::from_str(decoded.get("inner").unwrap()).unwrap();
        assert_eq!(decoded_inner.get("deep").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_non_map_value_passes_through_unchanged() {
        let scalar = PayloadValue::from("plain");
        assert_eq!(coerce_value(&scalar), scalar);

        let number = PayloadValue::from(3);
        assert_eq!(coerce_value(&number), number);
    }

    #[test]
    fn test_coerce_value_on_map_stringifies_leaves() {
        let value = PayloadValue::Map(map_of(vec![("flag", PayloadValue::Bool(true))]));
        match coerce_value(&value) {
            PayloadValue::Map(map) => {
                assert_eq!(map.get("flag"), Some(&PayloadValue::String("1".to_string())));
            }
            other => panic!("Expected Map, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_booleans_never_stringify_natively(b: bool, key in "[a-z]{1,8}") {
            let coerced = coerce_map(
                &[(key.clone(), PayloadValue::Bool(b))].into_iter().collect(),
            );
            let out = coerced.get(&key).unwrap();
            prop_assert_eq!(out.as_str(), if b { "1" } else { "0" });
            prop_assert_ne!(out.as_str(), "true");
            prop_assert_ne!(out.as_str(), "false");
        }

        #[test]
        fn prop_integers_round_trip_as_text(n: i64, key in "[a-z]{1,8}") {
            let coerced = coerce_map(
                &[(key.clone(), PayloadValue::from(n))].into_iter().collect(),
            );
            let expected = n.to_string();
            prop_assert_eq!(coerced.get(&key).unwrap().as_str(), expected.as_str());
        }
    }
}
