//! Wire value model.
//!
//! Every modeled field stores an `Option<V>` where `V` implements
//! [`WireValue`]. `None` is "unset"; any `Some` (including `0`, `false` and
//! `""`) is a real value that is emitted on encode.

use std::fmt;

use serde_json::{Number, Value};

/// Raw JSON value: null, bool, number, string, array or object of itself.
///
/// Objects keep insertion order (`serde_json` is built with `preserve_order`).
pub type RawValue = Value;

/// Shape a field expects on the wire. Used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Bool,
    Float,
    Raw,
    /// Nested structured type, named by its descriptor.
    Object(&'static str),
    Array(Box<ValueKind>),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => f.write_str("string"),
            Self::Int => f.write_str("integer"),
            Self::Bool => f.write_str("boolean"),
            Self::Float => f.write_str("number"),
            Self::Raw => f.write_str("raw"),
            Self::Object(name) => write!(f, "object<{name}>"),
            Self::Array(item) => write!(f, "array<{item}>"),
        }
    }
}

/// JSON type name of a value, as reported in mismatch errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A value whose JSON shape did not match the expected kind.
///
/// `path` is relative to the field value (array indices for elements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: Vec<String>,
    pub found: &'static str,
}

impl Mismatch {
    pub fn of(value: &Value) -> Self {
        Self {
            path: Vec::new(),
            found: json_type_name(value),
        }
    }

    pub fn at(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }
}

// -------------------------------------------------------------------------
// Raw passthrough

/// Raw-passthrough field value.
///
/// Stored and re-emitted as-is. Used for enum-like string unions whose full
/// value set is not enforced locally, and for timestamps (see
/// [`crate::timestamp`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Raw(pub RawValue);

impl Raw {
    pub fn new(value: impl Into<RawValue>) -> Self {
        Self(value.into())
    }

    /// The string content, when the raw value is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn as_value(&self) -> &RawValue {
        &self.0
    }

    pub fn into_inner(self) -> RawValue {
        self.0
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl From<Value> for Raw {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

// -------------------------------------------------------------------------
// WireValue

/// Conversion between a Rust field value and its JSON wire form.
pub trait WireValue: Sized {
    fn kind() -> ValueKind;

    /// Converts a non-null JSON value. Nulls are handled by the caller for
    /// top-level fields; inside arrays they reach this function.
    fn from_wire(value: RawValue) -> Result<Self, Mismatch>;

    /// `None` when the value has no JSON representation (e.g. NaN).
    fn to_wire(&self) -> Option<RawValue>;

    /// Canonical query-string form. `None` means "emit nothing".
    fn to_query(&self) -> Option<String>;

    /// A held value that is equivalent to "unset" on the wire.
    fn is_null(&self) -> bool {
        false
    }
}

impl WireValue for String {
    fn kind() -> ValueKind {
        ValueKind::Str
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Mismatch::of(&other)),
        }
    }

    fn to_wire(&self) -> Option<RawValue> {
        Some(Value::String(self.clone()))
    }

    fn to_query(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl WireValue for i64 {
    fn kind() -> ValueKind {
        ValueKind::Int
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        value.as_i64().ok_or_else(|| Mismatch::of(&value))
    }

    fn to_wire(&self) -> Option<RawValue> {
        Some(Value::Number(Number::from(*self)))
    }

    fn to_query(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl WireValue for bool {
    fn kind() -> ValueKind {
        ValueKind::Bool
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        value.as_bool().ok_or_else(|| Mismatch::of(&value))
    }

    fn to_wire(&self) -> Option<RawValue> {
        Some(Value::Bool(*self))
    }

    fn to_query(&self) -> Option<String> {
        Some(if *self { "true" } else { "false" }.to_string())
    }
}

impl WireValue for f64 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        value.as_f64().ok_or_else(|| Mismatch::of(&value))
    }

    fn to_wire(&self) -> Option<RawValue> {
        Number::from_f64(*self).map(Value::Number)
    }

    fn to_query(&self) -> Option<String> {
        Number::from_f64(*self).map(|n| n.to_string())
    }
}

impl WireValue for Raw {
    fn kind() -> ValueKind {
        ValueKind::Raw
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        Ok(Self(value))
    }

    fn to_wire(&self) -> Option<RawValue> {
        Some(self.0.clone())
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn to_query(&self) -> Option<String> {
        match &self.0 {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl<V: WireValue> WireValue for Vec<V> {
    fn kind() -> ValueKind {
        ValueKind::Array(Box::new(V::kind()))
    }

    fn from_wire(value: RawValue) -> Result<Self, Mismatch> {
        let Value::Array(items) = value else {
            return Err(Mismatch::of(&value));
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| V::from_wire(item).map_err(|m| m.at(i.to_string())))
            .collect()
    }

    fn to_wire(&self) -> Option<RawValue> {
        self.iter()
            .map(WireValue::to_wire)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array)
    }

    /// Elements joined with `,`; an empty array projects to nothing.
    fn to_query(&self) -> Option<String> {
        let parts: Vec<String> = self.iter().filter_map(WireValue::to_query).collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(","))
        }
    }
}
