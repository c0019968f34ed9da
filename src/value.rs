use std::collections::HashMap;
use std::fmt;

use serde_json::Map;

use crate::{Error, Result};

pub use serde_json::Value;

/// Dynamic kind of a decoded JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(label)
    }
}

/// Shape a sub-document is required to have before it can be extracted
/// and wrapped in a fresh parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

impl ContainerKind {
    pub fn as_kind(self) -> Kind {
        match self {
            ContainerKind::Array => Kind::Array,
            ContainerKind::Object => Kind::Object,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_kind().fmt(f)
    }
}

pub fn decode(data: &[u8]) -> Result<Value> {
    serde_json::from_slice(data)
        .map_err(|err| Error::invalid_data(format!("malformed JSON: {err}")))
}

pub fn encode(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|err| Error::invalid_data(format!("value does not encode to JSON: {err}")))
}

/// Kind-checked downcast from a decoded node to a concrete Rust type.
///
/// Container implementations succeed only when every element converts:
/// `Vec<i64>` matches `[1, 2]` but not `[1, "2"]`.
pub trait FromJson: Sized {
    /// Kind this type matches, reported in type-mismatch diagnostics.
    fn expected() -> Kind;

    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJson for bool {
    fn expected() -> Kind {
        Kind::Bool
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJson for i64 {
    fn expected() -> Kind {
        Kind::Number
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJson for u64 {
    fn expected() -> Kind {
        Kind::Number
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FromJson for f64 {
    fn expected() -> Kind {
        Kind::Number
    }

    // Integer nodes convert too; any JSON number has an f64 reading.
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromJson for String {
    fn expected() -> Kind {
        Kind::String
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn expected() -> Kind {
        Kind::Array
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_json).collect()
    }
}

impl<T: FromJson> FromJson for HashMap<String, T> {
    fn expected() -> Kind {
        Kind::Object
    }

    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(name, element)| T::from_json(element).map(|element| (name.clone(), element)))
            .collect()
    }
}

impl FromJson for Map<String, Value> {
    fn expected() -> Kind {
        Kind::Object
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}
