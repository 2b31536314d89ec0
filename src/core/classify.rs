use crate::domain::model::Value;
use crate::domain::tags::{RealType, ShallowKind};
use std::collections::{BTreeMap, HashSet};

/// The `typeof` view of a value.
pub fn shallow_kind(value: &Value) -> ShallowKind {
    match value {
        Value::String(_) => ShallowKind::String,
        Value::Bool(_) => ShallowKind::Boolean,
        Value::BigInt(_) => ShallowKind::BigInt,
        Value::Symbol(_) => ShallowKind::Symbol,
        Value::Undefined => ShallowKind::Undefined,
        Value::Number(_) => ShallowKind::Number,
        Value::Function(_) => ShallowKind::Function,
        Value::Null
        | Value::Date(_)
        | Value::RegExp(_)
        | Value::Set(_)
        | Value::Map(_)
        | Value::Array(_)
        | Value::Object(_) => ShallowKind::Object,
    }
}

/// Refines the shallow kind into a [`RealType`].
///
/// Numbers split into NaN, positive Infinity and everything else (negative
/// infinity stays a plain number). Object-kind values are tested in the
/// order null, date, regexp, set, map, array, object; an object with no
/// prototype matches none of these and is `unknown`.
pub fn classify(value: &Value) -> RealType {
    match shallow_kind(value) {
        ShallowKind::String => RealType::String,
        ShallowKind::Boolean => RealType::Boolean,
        ShallowKind::BigInt => RealType::BigInt,
        ShallowKind::Symbol => RealType::Symbol,
        ShallowKind::Undefined => RealType::Undefined,
        ShallowKind::Number => classify_number(value),
        ShallowKind::Function => RealType::Function,
        ShallowKind::Object => classify_object(value),
    }
}

fn classify_number(value: &Value) -> RealType {
    match value {
        Value::Number(n) if n.is_nan() => RealType::NaN,
        Value::Number(n) if *n == f64::INFINITY => RealType::Infinity,
        Value::Number(_) => RealType::Number,
        _ => RealType::Unknown,
    }
}

fn classify_object(value: &Value) -> RealType {
    match value {
        Value::Null => RealType::Null,
        Value::Date(_) => RealType::Date,
        Value::RegExp(_) => RealType::RegExp,
        Value::Set(_) => RealType::Set,
        Value::Map(_) => RealType::Map,
        Value::Array(_) => RealType::Array,
        Value::Object(object) if object.has_prototype() => RealType::Object,
        _ => RealType::Unknown,
    }
}

pub fn shallow_kinds(values: &[Value]) -> Vec<ShallowKind> {
    values.iter().map(shallow_kind).collect()
}

pub fn classify_all(values: &[Value]) -> Vec<RealType> {
    values.iter().map(classify).collect()
}

/// True when every element has the shallow kind of the first one.
/// Empty and single-element sequences are trivially homogeneous.
pub fn all_same_shallow_kind(values: &[Value]) -> bool {
    match values.split_first() {
        Some((first, rest)) => {
            let kind = shallow_kind(first);
            rest.iter().all(|value| shallow_kind(value) == kind)
        }
        None => true,
    }
}

/// True when no two elements share a real type.
pub fn all_unique_real_types(values: &[Value]) -> bool {
    let distinct: HashSet<RealType> = values.iter().map(classify).collect();
    distinct.len() == values.len()
}

/// Occurrences of each real type, sorted ascending by tag label.
pub fn count_by_real_type(values: &[Value]) -> Vec<(RealType, usize)> {
    let mut counts: BTreeMap<RealType, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(classify(value)).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
