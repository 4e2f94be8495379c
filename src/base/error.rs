//! Error type shared by every mapping operation.

use std::sync::Arc;

use super::Symbol;

/// Errors raised while loading, querying, transforming or saving tables.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Malformed input text. `line` is 1-based.
    #[error("invalid mapping format at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A call violated an operation's contract (unknown namespace,
    /// mutation of the root namespace, duplicate namespace, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A namespace has no entry for a root symbol at save time.
    #[error("missing mapping for {symbol} in namespace '{namespace}'")]
    MissingMapping { namespace: Arc<str>, symbol: Symbol },

    /// A table holds a symbol that cannot be written in its format.
    #[error("inconsistent mapping table: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MappingError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        MappingError::Format {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn unknown_namespace(namespace: &str) -> Self {
        MappingError::InvalidArgument(format!("unknown namespace: '{}'", namespace))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MappingError>;
