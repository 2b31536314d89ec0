//! Decoding of external JSON into [`Value`].
//!
//! Plain JSON maps onto the matching variants directly. Values JSON has no
//! syntax for are written as objects carrying a `"$type"` key, e.g.
//! `{"$type": "nan"}` or `{"$type": "set", "items": [1, 2]}`.
//!
//! Errors carry the JSON path of the node that failed (`$[2].items[0]`).

use crate::domain::model::{Function, Object, ObjectOrigin, Primitive, Symbol, Value};
use crate::utils::error::{Result, ValueKindsError};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

pub const TYPE_KEY: &str = "$type";

/// Parses `text` as JSON and decodes it with [`decode_sequence`].
pub fn parse_sequence(text: &str) -> Result<Vec<Value>> {
    let json: Json = serde_json::from_str(text)?;
    decode_sequence(&json)
}

/// A top-level array is the sequence itself; any other document is a
/// sequence of one.
pub fn decode_sequence(json: &Json) -> Result<Vec<Value>> {
    let values = match json {
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_at(item, &format!("$[{}]", i)))
            .collect::<Result<Vec<_>>>()?,
        other => vec![decode_at(other, "$")?],
    };
    tracing::debug!("Decoded {} values", values.len());
    Ok(values)
}

pub fn decode_value(json: &Json) -> Result<Value> {
    decode_at(json, "$")
}

fn decode_at(json: &Json, path: &str) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| ValueKindsError::decode(path, format!("number {} is out of range", n))),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => Ok(Value::Array(decode_items(items, path)?)),
        Json::Object(map) => match map.get(TYPE_KEY) {
            Some(Json::String(tag)) => decode_tagged(tag, map, path),
            Some(other) => Err(ValueKindsError::decode(
                path,
                format!("{} must be a string, found {}", TYPE_KEY, json_kind(other)),
            )),
            None => Ok(Value::Object(Object::with_fields(decode_fields(map, path)?))),
        },
    }
}

fn decode_items(items: &[Json], path: &str) -> Result<Vec<Value>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_at(item, &format!("{}[{}]", path, i)))
        .collect()
}

fn decode_fields(map: &Map<String, Json>, path: &str) -> Result<BTreeMap<String, Value>> {
    map.iter()
        .map(|(key, value)| -> Result<(String, Value)> {
            Ok((key.clone(), decode_at(value, &format!("{}.{}", path, key))?))
        })
        .collect()
}

fn decode_tagged(tag: &str, map: &Map<String, Json>, path: &str) -> Result<Value> {
    match tag {
        "undefined" => Ok(Value::Undefined),
        "nan" => Ok(Value::Number(f64::NAN)),
        "infinity" => {
            let negative = optional_bool(map, "negative", path)?.unwrap_or(false);
            Ok(Value::Number(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }))
        }
        "bigint" => decode_bigint(required(map, "value", path)?, path).map(Value::BigInt),
        "symbol" => Ok(Value::Symbol(Symbol {
            description: optional_str(map, "description", path)?,
        })),
        "function" => Ok(Value::Function(Function {
            name: optional_str(map, "name", path)?,
        })),
        "date" => decode_date(required(map, "value", path)?, path).map(Value::Date),
        "regexp" => {
            let source = required_str(map, "source", path)?;
            Regex::new(source)
                .map(Value::RegExp)
                .map_err(|e| ValueKindsError::decode(path, format!("invalid regexp: {}", e)))
        }
        "set" => {
            let items = required_array(map, "items", path)?;
            Ok(Value::Set(decode_items(items, &format!("{}.items", path))?))
        }
        "map" => {
            let entries = required_array(map, "entries", path)?;
            let entries_path = format!("{}.entries", path);
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| decode_entry(entry, &format!("{}[{}]", entries_path, i)))
                .collect::<Result<Vec<_>>>()
                .map(Value::Map)
        }
        "wrapper" => {
            let inner = required(map, "value", path)?;
            let primitive = match inner {
                Json::String(s) => Primitive::String(s.clone()),
                Json::Bool(b) => Primitive::Bool(*b),
                Json::Number(n) => match n.as_f64() {
                    Some(f) => Primitive::Number(f),
                    None => {
                        return Err(ValueKindsError::decode(path, "wrapped number is out of range"))
                    }
                },
                other => {
                    return Err(ValueKindsError::decode(
                        path,
                        format!("only primitives can be wrapped, found {}", json_kind(other)),
                    ))
                }
            };
            Ok(Value::Object(Object::wrapper(primitive)))
        }
        "object" => {
            let fields = match map.get("fields") {
                Some(Json::Object(fields)) => decode_fields(fields, &format!("{}.fields", path))?,
                Some(other) => {
                    return Err(ValueKindsError::decode(
                        path,
                        format!("'fields' must be an object, found {}", json_kind(other)),
                    ))
                }
                None => BTreeMap::new(),
            };
            let origin = if optional_bool(map, "null_prototype", path)?.unwrap_or(false) {
                ObjectOrigin::NullPrototype
            } else {
                ObjectOrigin::Plain
            };
            Ok(Value::Object(Object { fields, origin }))
        }
        other => Err(ValueKindsError::decode(
            path,
            format!("unknown {} '{}'", TYPE_KEY, other),
        )),
    }
}

fn decode_entry(entry: &Json, path: &str) -> Result<(Value, Value)> {
    match entry {
        Json::Array(pair) if pair.len() == 2 => Ok((
            decode_at(&pair[0], &format!("{}[0]", path))?,
            decode_at(&pair[1], &format!("{}[1]", path))?,
        )),
        _ => Err(ValueKindsError::decode(
            path,
            "map entry must be a [key, value] pair",
        )),
    }
}

fn decode_bigint(json: &Json, path: &str) -> Result<i128> {
    match json {
        Json::String(s) => {
            let digits = s.trim();
            digits
                .strip_suffix('n')
                .unwrap_or(digits)
                .parse::<i128>()
                .map_err(|e| ValueKindsError::decode(path, format!("invalid bigint '{}': {}", s, e)))
        }
        Json::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .ok_or_else(|| ValueKindsError::decode(path, format!("bigint {} is not an integer", n))),
        other => Err(ValueKindsError::decode(
            path,
            format!("bigint value must be a string or integer, found {}", json_kind(other)),
        )),
    }
}

fn decode_date(json: &Json, path: &str) -> Result<DateTime<Utc>> {
    match json {
        Json::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| ValueKindsError::decode(path, format!("invalid date '{}': {}", s, e))),
        Json::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or_else(|| ValueKindsError::decode(path, format!("invalid epoch millis {}", n))),
        other => Err(ValueKindsError::decode(
            path,
            format!("date value must be a string or integer, found {}", json_kind(other)),
        )),
    }
}

fn required<'a>(map: &'a Map<String, Json>, key: &str, path: &str) -> Result<&'a Json> {
    map.get(key)
        .ok_or_else(|| ValueKindsError::decode(path, format!("missing '{}'", key)))
}

fn required_str<'a>(map: &'a Map<String, Json>, key: &str, path: &str) -> Result<&'a str> {
    match required(map, key, path)? {
        Json::String(s) => Ok(s),
        other => Err(ValueKindsError::decode(
            path,
            format!("'{}' must be a string, found {}", key, json_kind(other)),
        )),
    }
}

fn required_array<'a>(map: &'a Map<String, Json>, key: &str, path: &str) -> Result<&'a [Json]> {
    match required(map, key, path)? {
        Json::Array(items) => Ok(items),
        other => Err(ValueKindsError::decode(
            path,
            format!("'{}' must be an array, found {}", key, json_kind(other)),
        )),
    }
}

fn optional_str(map: &Map<String, Json>, key: &str, path: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Json::Null) => Ok(None),
        Some(Json::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValueKindsError::decode(
            path,
            format!("'{}' must be a string, found {}", key, json_kind(other)),
        )),
    }
}

fn optional_bool(map: &Map<String, Json>, key: &str, path: &str) -> Result<Option<bool>> {
    match map.get(key) {
        None | Some(Json::Null) => Ok(None),
        Some(Json::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ValueKindsError::decode(
            path,
            format!("'{}' must be a boolean, found {}", key, json_kind(other)),
        )),
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        let values = decode_sequence(&json!([null, true, 1.5, "s", [], {"a": 1}])).unwrap();
        assert!(matches!(values[0], Value::Null));
        assert!(matches!(values[1], Value::Bool(true)));
        assert!(matches!(values[2], Value::Number(n) if n == 1.5));
        assert!(matches!(&values[3], Value::String(s) if s == "s"));
        assert!(matches!(&values[4], Value::Array(items) if items.is_empty()));
        match &values[5] {
            Value::Object(object) => {
                assert!(object.has_prototype());
                assert!(matches!(object.fields.get("a"), Some(Value::Number(n)) if *n == 1.0));
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_non_array_document_is_single_value() {
        let values = decode_sequence(&json!({"$type": "undefined"})).unwrap();
        assert_eq!(values.len(), 1);
        assert!(matches!(values[0], Value::Undefined));
    }

    #[test]
    fn test_numbers() {
        let values = decode_sequence(&json!([
            {"$type": "nan"},
            {"$type": "infinity"},
            {"$type": "infinity", "negative": true},
            {"$type": "bigint", "value": "170141183460469231731687303715884105727"},
            {"$type": "bigint", "value": 10},
            {"$type": "bigint", "value": "10n"}
        ]))
        .unwrap();
        assert!(matches!(values[0], Value::Number(n) if n.is_nan()));
        assert!(matches!(values[1], Value::Number(n) if n == f64::INFINITY));
        assert!(matches!(values[2], Value::Number(n) if n == f64::NEG_INFINITY));
        assert!(matches!(values[3], Value::BigInt(i128::MAX)));
        assert!(matches!(values[4], Value::BigInt(10)));
        assert!(matches!(values[5], Value::BigInt(10)));
        assert!(decode_value(&json!({"$type": "bigint", "value": "10nnn"})).is_err());
    }

    #[test]
    fn test_dates() {
        let value = decode_value(&json!({"$type": "date", "value": "2024-01-15T10:30:00+02:00"}))
            .unwrap();
        match value {
            Value::Date(date) => assert_eq!(date.to_rfc3339(), "2024-01-15T08:30:00+00:00"),
            other => panic!("expected date, got {:?}", other),
        }
        let value = decode_value(&json!({"$type": "date", "value": 0})).unwrap();
        assert!(matches!(value, Value::Date(date) if date.timestamp() == 0));
        assert!(decode_value(&json!({"$type": "date", "value": "yesterday"})).is_err());
    }

    #[test]
    fn test_containers() {
        let value = decode_value(&json!({
            "$type": "map",
            "entries": [["k", {"$type": "set", "items": [1, 2]}]]
        }))
        .unwrap();
        match value {
            Value::Map(entries) => {
                assert_eq!(entries.len(), 1);
                assert!(matches!(&entries[0].0, Value::String(k) if k == "k"));
                assert!(matches!(&entries[0].1, Value::Set(items) if items.len() == 2));
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_objects() {
        let wrapped = decode_value(&json!({"$type": "wrapper", "value": "12"})).unwrap();
        assert!(matches!(
            wrapped,
            Value::Object(Object { origin: ObjectOrigin::Wrapper(Primitive::String(ref s)), .. }) if s == "12"
        ));
        let bare = decode_value(&json!({"$type": "object", "null_prototype": true})).unwrap();
        assert!(matches!(bare, Value::Object(ref o) if !o.has_prototype()));
        assert!(decode_value(&json!({"$type": "wrapper", "value": []})).is_err());
    }

    #[test]
    fn test_errors_carry_path() {
        let err = decode_sequence(&json!([1, {"$type": "set", "items": [{"$type": "nope"}]}]))
            .unwrap_err();
        match err {
            ValueKindsError::DecodeError { path, message } => {
                assert_eq!(path, "$[1].items[0]");
                assert!(message.contains("nope"));
            }
            other => panic!("unexpected error {:?}", other),
        }

        let err = decode_value(&json!({"$type": "regexp", "source": "("})).unwrap_err();
        assert!(matches!(err, ValueKindsError::DecodeError { ref path, .. } if path == "$"));

        let err = decode_value(&json!({"$type": 3})).unwrap_err();
        assert!(err.to_string().contains("must be a string"));

        let err = decode_value(&json!({"$type": "map", "entries": [[1]]})).unwrap_err();
        assert!(matches!(err, ValueKindsError::DecodeError { ref path, .. } if path == "$.entries[0]"));
    }

    #[test]
    fn test_parse_sequence_rejects_bad_json() {
        assert!(matches!(
            parse_sequence("[1,"),
            Err(ValueKindsError::SerializationError(_))
        ));
        assert_eq!(parse_sequence("[1, 2, 3]").unwrap().len(), 3);
    }
}
