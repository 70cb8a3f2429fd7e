/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Typed, non-failing reads out of an untyped JSON tree.
//!
//! Every accessor returns `None` both when a key is missing (or `null`) and
//! when it holds the wrong kind of value, so call sites can treat "absent"
//! and "malformed" the same way: keep whatever the record already had.

use num_bigint::BigInt;
use serde_json::{Map, Value};

use crate::error::{AgentMetaError, AgentMetaResult};

/// A decoded top-level JSON object.
pub type JsonObject = Map<String, Value>;

/// Short name of a JSON value's kind, used in diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse raw bytes into a top-level JSON object.
pub fn parse_object(bytes: &[u8]) -> AgentMetaResult<JsonObject> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        other => Err(AgentMetaError::NotAnObject(kind(&other))),
    }
}

/// Read an integral JSON number without narrowing it.
///
/// Fractional and exponent-form numbers are not integers and yield `None`.
pub fn integer(value: &Value) -> Option<BigInt> {
    match value {
        Value::Number(number) => BigInt::parse_bytes(number.to_string().as_bytes(), 10),
        _ => None,
    }
}

/// Collect the string elements of an array, dropping everything else.
pub fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
    )
}

/// Field-level accessors over a JSON object.
pub trait FieldAccess {
    /// The child under `key` unless it is missing or `null`.
    fn present(&self, key: &str) -> Option<&Value>;

    /// The child under `key`, falling back to `legacy` only when the
    /// canonical key is missing or `null`.
    fn present_or_legacy(&self, key: &str, legacy: &str) -> Option<&Value> {
        self.present(key).or_else(|| self.present(legacy))
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.present(key)?.as_str()
    }

    /// A string field, treating the empty string as absent.
    fn non_empty_string(&self, key: &str) -> Option<&str> {
        self.string(key).filter(|s| !s.is_empty())
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.present(key)?.as_bool()
    }

    fn integer(&self, key: &str) -> Option<BigInt> {
        integer(self.present(key)?)
    }

    fn array(&self, key: &str) -> Option<&[Value]> {
        self.present(key)?.as_array().map(Vec::as_slice)
    }

    fn object(&self, key: &str) -> Option<&JsonObject> {
        self.present(key)?.as_object()
    }

    fn string_list(&self, key: &str) -> Option<Vec<String>> {
        string_list(self.present(key)?)
    }

    /// A string field that may also arrive as an integral number; both
    /// forms are normalized to the decimal string.
    fn string_or_integer(&self, key: &str) -> Option<String> {
        match self.present(key)? {
            Value::String(s) => Some(s.clone()),
            other => integer(other).map(|n| n.to_string()),
        }
    }
}

impl FieldAccess for JsonObject {
    fn present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn null_and_missing_are_both_absent() {
        let obj = object(json!({ "name": null }));
        assert!(obj.present("name").is_none());
        assert!(obj.present("other").is_none());
    }

    #[test]
    fn type_mismatch_reads_as_absent() {
        let obj = object(json!({ "name": 7, "active": "yes", "skills": "a" }));
        assert_eq!(obj.string("name"), None);
        assert_eq!(obj.boolean("active"), None);
        assert_eq!(obj.string_list("skills"), None);
        assert!(obj.object("name").is_none());
    }

    #[test]
    fn integers_keep_full_precision() {
        let obj = object(
            serde_json::from_str(r#"{"big": 123456789012345678901234567890}"#).expect("json"),
        );
        let expected =
            BigInt::parse_bytes(b"123456789012345678901234567890", 10).expect("bigint literal");
        assert_eq!(obj.integer("big"), Some(expected));
    }

    #[test]
    fn fractional_numbers_are_not_integers() {
        let obj = object(json!({ "a": 1.5, "b": -4 }));
        assert_eq!(obj.integer("a"), None);
        assert_eq!(obj.integer("b"), Some(BigInt::from(-4)));
    }

    #[test]
    fn string_list_drops_non_strings() {
        let obj = object(json!({ "skills": ["a", 1, null, "b", { "c": 1 }] }));
        assert_eq!(
            obj.string_list("skills"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn legacy_alias_only_when_canonical_missing_or_null() {
        let obj = object(json!({ "services": null, "endpoints": [1] }));
        assert!(obj.present_or_legacy("services", "endpoints").is_some());

        let obj = object(json!({ "services": "oops", "endpoints": [1] }));
        let picked = obj.present_or_legacy("services", "endpoints");
        assert_eq!(picked.and_then(Value::as_str), Some("oops"));
    }

    #[test]
    fn string_or_integer_normalizes_numbers() {
        let obj = object(json!({ "a": 84532, "b": "0x14a34", "c": true }));
        assert_eq!(obj.string_or_integer("a").as_deref(), Some("84532"));
        assert_eq!(obj.string_or_integer("b").as_deref(), Some("0x14a34"));
        assert_eq!(obj.string_or_integer("c"), None);
    }

    #[test]
    fn parse_object_rejects_other_top_levels() {
        let err = parse_object(b"[1, 2]").expect_err("array top level");
        assert!(matches!(err, AgentMetaError::NotAnObject("array")));

        let err = parse_object(b"{ not json").expect_err("syntax error");
        assert!(matches!(err, AgentMetaError::MalformedDocument(_)));
    }
}
