//! Error types for phpgen library.

use thiserror::Error;

/// Result type alias for phpgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing or rendering code.
#[derive(Error, Debug)]
pub enum Error {
    /// A name segment failed validation (empty, or containing a separator).
    #[error("Invalid {kind} `{name}`: {reason}")]
    InvalidName {
        /// What was being constructed (e.g. "class name")
        kind: &'static str,
        /// The offending input, as given
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A path contained no non-empty segments at all.
    #[error("{kind} requires at least one non-empty part")]
    EmptyPath {
        /// What was being constructed (e.g. "namespace")
        kind: &'static str,
    },

    /// A combinator was called with arguments it cannot honor.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Render options could not be loaded.
    #[error("Invalid render options: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn empty_name(kind: &'static str, name: &str) -> Self {
        Error::InvalidName {
            kind,
            name: name.to_string(),
            reason: "cannot be empty",
        }
    }

    pub(crate) fn contains_separator(kind: &'static str, name: &str) -> Self {
        Error::InvalidName {
            kind,
            name: name.to_string(),
            reason: "cannot contain namespace separator",
        }
    }
}
