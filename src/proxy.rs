use crate::value::{self, FromJson, Value};
use crate::{ArrayParser, Key, ObjectParser};

/// One element lifted out of an iteration step: the key it was found
/// under plus an owned copy of the decoded value, with typed extraction
/// that never re-decodes the source bytes.
#[derive(Debug, Clone)]
pub struct Proxy {
    key: Key,
    value: Value,
}

impl Proxy {
    pub(crate) fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Downcast of the captured value; `None` on kind mismatch.
    pub fn get<T: FromJson>(&self) -> Option<T> {
        T::from_json(&self.value)
    }

    /// Downcast paired with the element's key, for callers building a
    /// result mapping.
    pub fn get_with_key<T: FromJson>(&self) -> (&Key, Option<T>) {
        (&self.key, self.get())
    }

    /// Fresh parser over the captured value if it is an array, re-encoded
    /// for recursive descent.
    pub fn as_array_parser(&self) -> Option<ArrayParser> {
        if !self.value.is_array() {
            return None;
        }
        let data = value::encode(&self.value).ok()?;
        Some(ArrayParser::new(data))
    }

    /// Fresh parser over the captured value if it is an object.
    pub fn as_object_parser(&self) -> Option<ObjectParser> {
        if !self.value.is_object() {
            return None;
        }
        let data = value::encode(&self.value).ok()?;
        Some(ObjectParser::new(data))
    }
}
