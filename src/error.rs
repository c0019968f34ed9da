use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidData,
    InvalidKey,
    InvalidType,
    FailedIteration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::InvalidData => "invalid data",
            ErrorKind::InvalidKey => "invalid key",
            ErrorKind::InvalidType => "invalid type",
            ErrorKind::FailedIteration => "failed iteration",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidData,
            message: message.into(),
        }
    }

    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidKey,
            message: message.into(),
        }
    }

    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidType,
            message: message.into(),
        }
    }

    pub fn failed_iteration(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::FailedIteration,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
