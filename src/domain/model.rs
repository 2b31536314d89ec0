use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::BTreeMap;

/// A runtime value from a dynamically typed source.
///
/// Every category the classifier distinguishes is its own variant, so
/// classification is a match on the variant plus a look at the number
/// payload.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    /// IEEE 754 double, including NaN and both infinities.
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Date(DateTime<Utc>),
    RegExp(Regex),
    Set(Vec<Value>),
    /// Entries in insertion order; keys may be any value.
    Map(Vec<(Value, Value)>),
    Array(Vec<Value>),
    Object(Object),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbol {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub name: Option<String>,
}

/// A keyed object. `origin` records how it was created, which decides
/// whether it counts as a plain object.
#[derive(Debug, Clone, Default)]
pub struct Object {
    pub fields: BTreeMap<String, Value>,
    pub origin: ObjectOrigin,
}

#[derive(Debug, Clone, Default)]
pub enum ObjectOrigin {
    /// `{}` or any ordinary instance.
    #[default]
    Plain,
    /// A primitive boxed into an object, e.g. `new String("12")`.
    Wrapper(Primitive),
    /// Created without a prototype, so not an instance of the base object.
    NullPrototype,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Bool(bool),
    Number(f64),
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: BTreeMap<String, Value>) -> Self {
        Self {
            fields,
            origin: ObjectOrigin::Plain,
        }
    }

    pub fn wrapper(primitive: Primitive) -> Self {
        Self {
            fields: BTreeMap::new(),
            origin: ObjectOrigin::Wrapper(primitive),
        }
    }

    pub fn null_prototype() -> Self {
        Self {
            fields: BTreeMap::new(),
            origin: ObjectOrigin::NullPrototype,
        }
    }

    pub fn has_prototype(&self) -> bool {
        !matches!(self.origin, ObjectOrigin::NullPrototype)
    }
}

impl Value {
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol {
            description: description.map(str::to_string),
        })
    }

    pub fn function(name: Option<&str>) -> Self {
        Value::Function(Function {
            name: name.map(str::to_string),
        })
    }

    /// Compiles `pattern` into a `RegExp` value.
    pub fn regexp(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Value::RegExp)
    }

    pub fn now() -> Self {
        Value::Date(Utc::now())
    }

    /// Boxed string, the `new String(s)` case.
    pub fn string_object(s: impl Into<String>) -> Self {
        Value::Object(Object::wrapper(Primitive::String(s.into())))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_prototype_tracking() {
        assert!(Object::new().has_prototype());
        assert!(Object::wrapper(Primitive::Bool(true)).has_prototype());
        assert!(!Object::null_prototype().has_prototype());
    }

    #[test]
    fn test_regexp_constructor_rejects_bad_pattern() {
        assert!(Value::regexp(r"\w+").is_ok());
        assert!(Value::regexp("(unclosed").is_err());
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(Value::from(3), Value::Number(n) if n == 3.0));
        assert!(matches!(Value::from("a"), Value::String(s) if s == "a"));
        assert!(matches!(Value::from(vec![]), Value::Array(items) if items.is_empty()));
    }
}
