use crate::parser::{mismatched_kind, mismatched_root, missing_index, Parser};
use crate::value::{self, ContainerKind, FromJson, Kind, Value};
use crate::{Key, Proxy, Result};

/// Parser over bytes whose top-level shape is a JSON array.
#[derive(Debug, Clone)]
pub struct ArrayParser {
    data: Vec<u8>,
}

impl ArrayParser {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    fn root(&self) -> Result<Vec<Value>> {
        match value::decode(&self.data)? {
            Value::Array(elements) => Ok(elements),
            other => Err(mismatched_root(ContainerKind::Array, Kind::of(&other))),
        }
    }

    fn element(&self, index: usize) -> Result<Value> {
        let elements = self.root()?;
        let len = elements.len();
        elements
            .into_iter()
            .nth(index)
            .ok_or_else(|| missing_index(index, len))
    }
}

impl Parser for ArrayParser {
    type Key<'k> = usize;
    type Root = Vec<Value>;

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn get_value<T: FromJson>(&self, key: Self::Key<'_>) -> Result<T> {
        let element = self.element(key)?;
        T::from_json(&element)
            .ok_or_else(|| mismatched_kind(key.into(), T::expected(), Kind::of(&element)))
    }

    fn get_document(&self, key: Self::Key<'_>, kind: ContainerKind) -> Result<Vec<u8>> {
        let element = self.element(key)?;
        if Kind::of(&element) != kind.as_kind() {
            return Err(mismatched_kind(key.into(), kind.as_kind(), Kind::of(&element)));
        }
        value::encode(&element)
    }

    fn parse(&self) -> Result<Self::Root> {
        self.root()
    }

    fn iterate<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(Proxy) -> Result<()>,
    {
        for (index, element) in self.root()?.into_iter().enumerate() {
            callback(Proxy::new(Key::Index(index), element))?;
        }
        Ok(())
    }
}
