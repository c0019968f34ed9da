pub mod error;
pub mod key;
pub mod parser;
pub mod provider;
pub mod proxy;
pub mod value;

pub use crate::error::{Error, ErrorKind};
pub use crate::key::Key;
pub use crate::parser::{ArrayParser, ObjectParser, Parser};
pub use crate::provider::{ArrayData, JsonBytes, ObjectData, Provider};
pub use crate::proxy::Proxy;
pub use crate::value::{ContainerKind, FromJson, Kind, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn array_parser(data: impl Into<Vec<u8>>) -> ArrayParser {
    ArrayParser::new(data)
}

pub fn object_parser(data: impl Into<Vec<u8>>) -> ObjectParser {
    ObjectParser::new(data)
}
