mod array;
mod object;

pub use array::ArrayParser;
pub use object::ObjectParser;

use crate::value::{ContainerKind, FromJson, Kind};
use crate::{Error, Key, Proxy, Result};

/// Capability interface shared by the two parser variants. An
/// [`ArrayParser`] addresses elements by `usize`, an [`ObjectParser`] by
/// `&str`; the binding is fixed at construction and encoded in the key
/// type, never checked at runtime.
///
/// Every operation re-decodes the owned byte buffer; no decoded state is
/// cached between calls.
pub trait Parser: Sized {
    /// Key type this variant is addressed by, convertible into the shared
    /// [`Key`] discriminator.
    type Key<'k>: Copy + Into<Key>;

    /// Typed top-level collection returned by [`Parser::parse`].
    type Root;

    /// The owned byte buffer backing this parser.
    fn data(&self) -> &[u8];

    /// Decodes the buffer and returns the element at `key` downcast to
    /// `T`. Fails with `InvalidData` if the buffer is malformed or its
    /// top-level shape is wrong, `InvalidKey` if `key` does not resolve,
    /// and `InvalidType` if the element's dynamic kind does not match `T`.
    fn get_value<T: FromJson>(&self, key: Self::Key<'_>) -> Result<T>;

    /// Looks up `key` like [`Parser::get_value`], requires the element to
    /// be the given container shape, and returns it re-encoded to bytes so
    /// the nested document can be wrapped in a fresh parser.
    fn get_document(&self, key: Self::Key<'_>, kind: ContainerKind) -> Result<Vec<u8>>;

    /// Decodes and returns the full top-level collection.
    fn parse(&self) -> Result<Self::Root>;

    /// Decodes the top-level collection once and invokes `callback` with a
    /// [`Proxy`] per element. A callback error aborts the remaining
    /// elements and propagates unchanged.
    fn iterate<F>(&self, callback: F) -> Result<()>
    where
        F: FnMut(Proxy) -> Result<()>;

    /// Nested array at `key`, or `None` on any failure.
    fn array_at(&self, key: Self::Key<'_>) -> Option<ArrayParser> {
        let data = self.get_document(key, ContainerKind::Array).ok()?;
        Some(ArrayParser::new(data))
    }

    /// Nested object at `key`, or `None` on any failure.
    fn object_at(&self, key: Self::Key<'_>) -> Option<ObjectParser> {
        let data = self.get_document(key, ContainerKind::Object).ok()?;
        Some(ObjectParser::new(data))
    }

    /// Typed value at `key`, or `None` on any failure.
    fn value_at<T: FromJson>(&self, key: Self::Key<'_>) -> Option<T> {
        self.get_value(key).ok()
    }
}

pub(crate) fn missing_index(index: usize, len: usize) -> Error {
    Error::invalid_key(format!(
        "index {index} is out of bounds for array of length {len}"
    ))
}

pub(crate) fn missing_name(name: &str) -> Error {
    Error::invalid_key(format!("key {name:?} is not present in object"))
}

pub(crate) fn mismatched_kind(key: Key, expected: Kind, found: Kind) -> Error {
    Error::invalid_type(format!("expected {expected} at {key}, found {found}"))
}

pub(crate) fn mismatched_root(expected: ContainerKind, found: Kind) -> Error {
    Error::invalid_data(format!("expected top-level {expected}, found {found}"))
}
