use crate::utils::error::ValueKindsError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Coarse category of a value, as reported by a `typeof`-style check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShallowKind {
    String,
    Boolean,
    BigInt,
    Symbol,
    Undefined,
    Number,
    Function,
    Object,
}

impl ShallowKind {
    pub const ALL: [ShallowKind; 8] = [
        ShallowKind::String,
        ShallowKind::Boolean,
        ShallowKind::BigInt,
        ShallowKind::Symbol,
        ShallowKind::Undefined,
        ShallowKind::Number,
        ShallowKind::Function,
        ShallowKind::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShallowKind::String => "string",
            ShallowKind::Boolean => "boolean",
            ShallowKind::BigInt => "bigint",
            ShallowKind::Symbol => "symbol",
            ShallowKind::Undefined => "undefined",
            ShallowKind::Number => "number",
            ShallowKind::Function => "function",
            ShallowKind::Object => "object",
        }
    }
}

impl fmt::Display for ShallowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShallowKind {
    type Err = ValueKindsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShallowKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValueKindsError::UnknownTagError { tag: s.to_string() })
    }
}

/// Refined classification that separates null, NaN, Infinity and the
/// built-in containers from the generic object kind.
///
/// Ordering follows the tag string, so sorted collections of `RealType`
/// come out in the same order as their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "bigint")]
    BigInt,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "NaN")]
    NaN,
    #[serde(rename = "Infinity")]
    Infinity,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "regexp")]
    RegExp,
    #[serde(rename = "set")]
    Set,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "unknown")]
    Unknown,
}

impl RealType {
    pub const ALL: [RealType; 17] = [
        RealType::String,
        RealType::Boolean,
        RealType::BigInt,
        RealType::Symbol,
        RealType::Undefined,
        RealType::NaN,
        RealType::Infinity,
        RealType::Number,
        RealType::Function,
        RealType::Null,
        RealType::Date,
        RealType::RegExp,
        RealType::Set,
        RealType::Map,
        RealType::Array,
        RealType::Object,
        RealType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RealType::String => "string",
            RealType::Boolean => "boolean",
            RealType::BigInt => "bigint",
            RealType::Symbol => "symbol",
            RealType::Undefined => "undefined",
            RealType::NaN => "NaN",
            RealType::Infinity => "Infinity",
            RealType::Number => "number",
            RealType::Function => "function",
            RealType::Null => "null",
            RealType::Date => "date",
            RealType::RegExp => "regexp",
            RealType::Set => "set",
            RealType::Map => "map",
            RealType::Array => "array",
            RealType::Object => "object",
            RealType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RealType {
    type Err = ValueKindsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RealType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ValueKindsError::UnknownTagError { tag: s.to_string() })
    }
}

impl PartialOrd for RealType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for tag in RealType::ALL {
            assert_eq!(tag.as_str().parse::<RealType>().unwrap(), tag);
        }
        for kind in ShallowKind::ALL {
            assert_eq!(kind.to_string().parse::<ShallowKind>().unwrap(), kind);
        }
        assert!("Object".parse::<RealType>().is_err());
        assert!("nan".parse::<RealType>().is_err());
    }

    #[test]
    fn test_real_type_orders_by_label() {
        let mut tags = RealType::ALL.to_vec();
        tags.sort();
        let labels: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
        let mut expected = labels.clone();
        expected.sort();
        assert_eq!(labels, expected);
        assert_eq!(tags[0], RealType::Infinity);
        assert_eq!(tags[1], RealType::NaN);
        assert!(RealType::Boolean < RealType::Null);
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&RealType::NaN).unwrap(), "\"NaN\"");
        assert_eq!(serde_json::to_string(&RealType::RegExp).unwrap(), "\"regexp\"");
        assert_eq!(serde_json::to_string(&ShallowKind::BigInt).unwrap(), "\"bigint\"");
        let tag: RealType = serde_json::from_str("\"Infinity\"").unwrap();
        assert_eq!(tag, RealType::Infinity);
    }
}
