//! Function names.

use std::fmt;
use std::str::FromStr;

use super::{split_path, NamespaceName, SEPARATOR};
use crate::error::{Error, Result};

/// A possibly namespaced function, e.g. `Symfony\Component\String\u`.
///
/// Renders with a `function ` marker so it can be told apart from a class
/// of the same path in declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName {
    path: String,
}

impl FunctionName {
    /// Create a function name. A leading `\` is ignored.
    pub fn new(name: &str) -> Result<Self> {
        let segments = split_path("function name", [name])
            .map_err(|_| Error::empty_name("function name", name))?;
        Ok(Self {
            path: segments.join(SEPARATOR),
        })
    }

    /// Get the full path without the `function ` marker.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the unqualified name (e.g. `u`).
    pub fn short_name(&self) -> &str {
        self.path.rsplit(SEPARATOR).next().unwrap_or(&self.path)
    }

    /// Get the enclosing namespace, if any.
    pub fn namespace(&self) -> Option<NamespaceName> {
        self.path
            .rsplit_once(SEPARATOR)
            .and_then(|(namespace, _)| NamespaceName::new(namespace).ok())
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}", self.path)
    }
}

impl FromStr for FunctionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::new(s.strip_prefix("function ").unwrap_or(s))
    }
}
