//! Error types for gdkit-core.

use std::path::PathBuf;

use thiserror::Error;

/// A project name or entry symbol that cannot be used safely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("project name must not be empty")]
    EmptyName,

    #[error("project name '{name}' is reserved")]
    ReservedName { name: String },

    #[error("project name '{name}' has leading or trailing whitespace")]
    SurroundingWhitespace { name: String },

    #[error("project name '{name}' contains invalid character {ch:?}")]
    InvalidNameChar { name: String, ch: char },

    #[error("entry symbol must not be empty")]
    EmptyEntrySymbol,

    #[error("entry symbol '{symbol}' contains invalid character {ch:?}")]
    InvalidEntrySymbolChar { symbol: String, ch: char },
}

/// All errors that can arise from properties file operations.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Underlying I/O failure, annotated with the file involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed line in the properties file.
    #[error("failed to parse {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A required key is absent and no default was supplied.
    #[error("missing key '{key}' in {path}")]
    MissingKey { key: &'static str, path: PathBuf },

    /// A stored value failed identity validation.
    #[error("invalid value in {path}: {source}")]
    Identity {
        path: PathBuf,
        #[source]
        source: IdentityError,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PropertiesError {
    PropertiesError::Io {
        path: path.into(),
        source,
    }
}
