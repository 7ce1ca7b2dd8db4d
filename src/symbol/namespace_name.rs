//! Namespace paths.

use std::fmt;
use std::str::FromStr;

use super::{split_path, SEPARATOR};
use crate::error::{Error, Result};

/// A `\`-separated namespace path, e.g. `App\Models`.
///
/// Empty segments (leading, trailing or doubled separators) are dropped at
/// construction, so `\App\\Models\` and `App\Models` are the same namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName {
    path: String,
}

impl NamespaceName {
    /// Create a namespace from a path that may contain separators.
    pub fn new(path: &str) -> Result<Self> {
        Self::from_parts([path])
    }

    /// Create a namespace by joining several parts, each of which may
    /// itself contain separators.
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = split_path("namespace", parts)?;
        Ok(Self {
            path: segments.join(SEPARATOR),
        })
    }

    /// Get the full path.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(SEPARATOR)
    }

    /// Get the last segment (e.g. `App\Models` -> `Models`).
    pub fn last_part(&self) -> &str {
        self.path.rsplit(SEPARATOR).next().unwrap_or(&self.path)
    }

    /// Get the enclosing namespace, if any.
    pub fn parent(&self) -> Option<NamespaceName> {
        self.path
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| NamespaceName {
                path: parent.to_string(),
            })
    }

    /// Append parts to this namespace.
    pub fn with<I, S>(&self, parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut all = vec![self.path.clone()];
        all.extend(parts.into_iter().map(|p| p.as_ref().to_string()));
        Self::from_parts(all)
    }

    /// Check if this namespace lies strictly below `parent`.
    pub fn is_sub_namespace_of(&self, parent: &NamespaceName) -> bool {
        self.path
            .strip_prefix(parent.path.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }

    /// Check if `parent` is exactly one level above this namespace.
    pub fn is_direct_child_of(&self, parent: &NamespaceName) -> bool {
        self.parent().as_ref() == Some(parent)
    }

    /// Get this path relative to `parent`, or the full path when it is not
    /// below `parent`.
    pub fn relative_path_from(&self, parent: &NamespaceName) -> &str {
        if self.is_sub_namespace_of(parent) {
            &self.path[parent.path.len() + SEPARATOR.len()..]
        } else {
            &self.path
        }
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for NamespaceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
