use serde_json::Map;

use crate::parser::{mismatched_kind, mismatched_root, missing_name, Parser};
use crate::value::{self, ContainerKind, FromJson, Kind, Value};
use crate::{Key, Proxy, Result};

/// Parser over bytes whose top-level shape is a JSON object.
#[derive(Debug, Clone)]
pub struct ObjectParser {
    data: Vec<u8>,
}

impl ObjectParser {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    fn root(&self) -> Result<Map<String, Value>> {
        match value::decode(&self.data)? {
            Value::Object(entries) => Ok(entries),
            other => Err(mismatched_root(ContainerKind::Object, Kind::of(&other))),
        }
    }

    fn entry(&self, name: &str) -> Result<Value> {
        let mut entries = self.root()?;
        entries.remove(name).ok_or_else(|| missing_name(name))
    }
}

impl Parser for ObjectParser {
    type Key<'k> = &'k str;
    type Root = Map<String, Value>;

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn get_value<T: FromJson>(&self, key: Self::Key<'_>) -> Result<T> {
        let entry = self.entry(key)?;
        T::from_json(&entry)
            .ok_or_else(|| mismatched_kind(key.into(), T::expected(), Kind::of(&entry)))
    }

    fn get_document(&self, key: Self::Key<'_>, kind: ContainerKind) -> Result<Vec<u8>> {
        let entry = self.entry(key)?;
        if Kind::of(&entry) != kind.as_kind() {
            return Err(mismatched_kind(key.into(), kind.as_kind(), Kind::of(&entry)));
        }
        value::encode(&entry)
    }

    fn parse(&self) -> Result<Self::Root> {
        self.root()
    }

    /// Entries are visited in the order the backing map yields them
    /// (source-text order as built); callers must not rely on any
    /// particular order.
    fn iterate<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(Proxy) -> Result<()>,
    {
        for (name, entry) in self.root()? {
            callback(Proxy::new(Key::Name(name), entry))?;
        }
        Ok(())
    }
}
