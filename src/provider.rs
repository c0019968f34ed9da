use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use serde::Serialize;
use serde_json::Map;

use crate::parser::Parser;
use crate::value::{FromJson, Value};
use crate::{ArrayParser, Error, ObjectParser, Proxy, Result};

/// Adapter exposing the parser surface for payloads that are not yet
/// byte buffers. Every call to [`Provider::parser`] re-derives the
/// parser; nothing is cached across calls.
pub trait Provider {
    type Parser: Parser;

    /// Derives a fresh parser over the payload. Fails with `InvalidData`
    /// only if serializing an in-memory payload fails; byte-backed
    /// providers cannot fail here.
    fn parser(&self) -> Result<Self::Parser>;

    /// Nested array at `key`, or `None` on any failure.
    fn array_at(&self, key: <Self::Parser as Parser>::Key<'_>) -> Option<ArrayParser> {
        self.parser().ok()?.array_at(key)
    }

    /// Nested object at `key`, or `None` on any failure.
    fn object_at(&self, key: <Self::Parser as Parser>::Key<'_>) -> Option<ObjectParser> {
        self.parser().ok()?.object_at(key)
    }

    /// Typed value at `key`, or `None` on any failure.
    fn value_at<T: FromJson>(&self, key: <Self::Parser as Parser>::Key<'_>) -> Option<T> {
        self.parser().ok()?.value_at(key)
    }

    /// Derives the parser and iterates it. A payload whose parser cannot
    /// be constructed fails with `FailedIteration`; callback errors and
    /// decode errors propagate unchanged.
    fn iterate<F>(&self, callback: F) -> Result<()>
    where
        F: FnMut(Proxy) -> Result<()>,
    {
        let parser = self.parser().map_err(|err| {
            Error::failed_iteration(format!("parser could not be constructed: {err}"))
        })?;
        parser.iterate(callback)
    }
}

fn serialized<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload)
        .map_err(|err| Error::invalid_data(format!("payload does not serialize to JSON: {err}")))
}

/// Byte buffer understood to hold a top-level JSON array.
#[derive(Debug, Clone)]
pub struct ArrayData {
    data: Vec<u8>,
}

impl ArrayData {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl Provider for ArrayData {
    type Parser = ArrayParser;

    fn parser(&self) -> Result<ArrayParser> {
        Ok(ArrayParser::new(self.data.clone()))
    }
}

/// Byte buffer understood to hold a top-level JSON object.
#[derive(Debug, Clone)]
pub struct ObjectData {
    data: Vec<u8>,
}

impl ObjectData {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl Provider for ObjectData {
    type Parser = ObjectParser;

    fn parser(&self) -> Result<ObjectParser> {
        Ok(ObjectParser::new(self.data.clone()))
    }
}

impl<T: Serialize> Provider for [T] {
    type Parser = ArrayParser;

    fn parser(&self) -> Result<ArrayParser> {
        serialized(self).map(ArrayParser::new)
    }
}

/// Sets surface as arrays; hash-set iteration order is unspecified, so
/// the produced array order is too.
impl<T, S> Provider for HashSet<T, S>
where
    T: Serialize + Eq + Hash,
    S: BuildHasher,
{
    type Parser = ArrayParser;

    fn parser(&self) -> Result<ArrayParser> {
        serialized(self).map(ArrayParser::new)
    }
}

impl<T> Provider for BTreeSet<T>
where
    T: Serialize + Ord,
{
    type Parser = ArrayParser;

    fn parser(&self) -> Result<ArrayParser> {
        serialized(self).map(ArrayParser::new)
    }
}

impl<T, S> Provider for HashMap<String, T, S>
where
    T: Serialize,
    S: BuildHasher,
{
    type Parser = ObjectParser;

    fn parser(&self) -> Result<ObjectParser> {
        serialized(self).map(ObjectParser::new)
    }
}

impl<T: Serialize> Provider for BTreeMap<String, T> {
    type Parser = ObjectParser;

    fn parser(&self) -> Result<ObjectParser> {
        serialized(self).map(ObjectParser::new)
    }
}

impl Provider for Map<String, Value> {
    type Parser = ObjectParser;

    fn parser(&self) -> Result<ObjectParser> {
        serialized(self).map(ObjectParser::new)
    }
}

/// Entry points for callers holding raw JSON bytes.
pub trait JsonBytes {
    fn array_data(&self) -> ArrayData;
    fn object_data(&self) -> ObjectData;
    fn array_parser(&self) -> ArrayParser;
    fn object_parser(&self) -> ObjectParser;
}

impl JsonBytes for [u8] {
    fn array_data(&self) -> ArrayData {
        ArrayData::new(self)
    }

    fn object_data(&self) -> ObjectData {
        ObjectData::new(self)
    }

    fn array_parser(&self) -> ArrayParser {
        ArrayParser::new(self)
    }

    fn object_parser(&self) -> ObjectParser {
        ObjectParser::new(self)
    }
}
