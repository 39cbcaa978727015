//! Value types that state fields can hold.
//!
//! A [`State`] is a flat mapping from field name to [`Value`]. Values cover
//! the plain-data model: primitives, sequences, and nested maps. Derived
//! `PartialEq` gives the deep structural equality the change gate relies on.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A state snapshot: field name to value.
///
/// Snapshots are supplied fresh on every notification and never mutated by
/// this crate. Equality between snapshots is deep and structural.
pub type State = BTreeMap<String, Value>;

/// Possible values a state field can hold.
///
/// # Examples
///
/// ```
/// use statewatch::Value;
///
/// let bool_val = Value::Bool(true);
/// let float_val = Value::Float(3.14);
/// let string_val = Value::String("hello".to_string());
///
/// assert!(bool_val.is_bool());
/// assert!(float_val.is_float());
/// assert!(string_val.is_string());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<Value>),
    Map(State),
}

impl Value {
    /// Returns true if this is a `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this is a `Bool`.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns true if this is an `Int`.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this is a `Float`.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns true if this is an `Int` or a `Float`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns true if this is a `String`.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this is a `Seq`.
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns true if this is a `Map`.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns the boolean value, if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric value as a float.
    ///
    /// `Int` widens to `f64`, so either numeric variant can be compared
    /// with one conversion.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the string value, if this is a `String`.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements, if this is a `Seq`.
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested map, if this is a `Map`.
    #[must_use]
    pub const fn as_map(&self) -> Option<&State> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a human-readable name for this value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Seq(v) => write!(f, "seq[{}]", v.len()),
            Self::Map(v) => write!(f, "map[{}]", v.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl From<State> for Value {
    fn from(v: State) -> Self {
        Self::Map(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Seq(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Builds a [`State`] from a JSON object.
///
/// Returns `None` when the JSON value is not an object; states are flat
/// top-level mappings by contract.
#[must_use]
pub fn state_from_json(json: serde_json::Value) -> Option<State> {
    match Value::from(json) {
        Value::Map(state) => Some(state),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bool() {
        let val = Value::Bool(true);
        assert!(val.is_bool());
        assert_eq!(val.as_bool(), Some(true));
        assert_eq!(val.type_name(), "bool");
    }

    #[test]
    fn test_value_int() {
        let val = Value::Int(42);
        assert!(val.is_int());
        assert!(val.is_number());
        assert_eq!(val.as_int(), Some(42));
        assert_eq!(val.as_float(), Some(42.0)); // Int can be read as float
        assert_eq!(val.type_name(), "int");
    }

    #[test]
    fn test_value_float() {
        let val = Value::Float(3.14);
        assert!(val.is_float());
        assert!(val.is_number());
        assert!((val.as_float().unwrap() - 3.14).abs() < f64::EPSILON);
        assert_eq!(val.type_name(), "float");
    }

    #[test]
    fn test_value_string() {
        let val = Value::String("hello".to_string());
        assert!(val.is_string());
        assert_eq!(val.as_string(), Some("hello"));
        assert_eq!(val.type_name(), "string");
    }

    #[test]
    fn test_value_null() {
        let val = Value::Null;
        assert!(val.is_null());
        assert_eq!(val.type_name(), "null");
    }

    #[test]
    fn test_value_seq_and_map() {
        let seq: Value = vec![1i64, 2, 3].into();
        assert!(seq.is_seq());
        assert_eq!(seq.as_seq().unwrap().len(), 3);

        let mut inner = State::new();
        inner.insert("k".to_string(), Value::Int(1));
        let map = Value::Map(inner);
        assert!(map.is_map());
        assert_eq!(map.as_map().unwrap().len(), 1);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "true");
        assert_eq!(format!("{}", Value::Int(42)), "42");
        assert_eq!(format!("{}", Value::String("hi".into())), "\"hi\"");
        assert_eq!(format!("{}", Value::Null), "null");
        assert_eq!(format!("{}", Value::Seq(vec![Value::Int(1)])), "seq[1]");
    }

    #[test]
    fn test_deep_equality() {
        let a = state_from_json(serde_json::json!({
            "user": {"name": "ada", "tags": ["x", "y"]},
            "count": 6,
        }))
        .unwrap();
        let b = state_from_json(serde_json::json!({
            "count": 6,
            "user": {"tags": ["x", "y"], "name": "ada"},
        }))
        .unwrap();
        assert_eq!(a, b);

        let c = state_from_json(serde_json::json!({
            "user": {"name": "ada", "tags": ["x"]},
            "count": 6,
        }))
        .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_json_numbers() {
        let v = Value::from(serde_json::json!(6));
        assert_eq!(v, Value::Int(6));
        let v = Value::from(serde_json::json!(6.5));
        assert_eq!(v, Value::Float(6.5));
    }

    #[test]
    fn test_state_from_json_rejects_non_object() {
        assert!(state_from_json(serde_json::json!([1, 2])).is_none());
        assert!(state_from_json(serde_json::json!("scalar")).is_none());
    }

    #[test]
    fn test_value_serialization() {
        let val = Value::String("test".into());
        let json = serde_json::to_string(&val).unwrap();
        let deserialized: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(val, deserialized);
    }

    #[test]
    fn test_value_type_mismatch() {
        let val = Value::Bool(true);
        assert!(val.as_int().is_none());
        assert!(val.as_float().is_none());
        assert!(val.as_string().is_none());
    }
}
