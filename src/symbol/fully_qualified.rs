//! Fully qualified class names.

use std::fmt;
use std::str::FromStr;

use super::{split_path, ClassName, NamespaceName, SEPARATOR};
use crate::error::{Error, Result};

/// A class name with an optional namespace, e.g. `App\Models\User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullyQualified {
    namespace: Option<NamespaceName>,
    class_name: ClassName,
}

impl FullyQualified {
    /// Parse a path; the last segment becomes the class name.
    pub fn new(path: &str) -> Result<Self> {
        Self::from_parts([path])
    }

    /// Build from several parts, each of which may contain separators.
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = split_path("fully qualified name", parts)?;
        let class_name = match segments.pop() {
            Some(last) => ClassName::new(&last)?,
            None => {
                return Err(Error::EmptyPath {
                    kind: "fully qualified name",
                })
            }
        };

        let namespace = if segments.is_empty() {
            None
        } else {
            Some(NamespaceName::from_parts(segments)?)
        };

        Ok(Self {
            namespace,
            class_name,
        })
    }

    /// Combine a namespace and a class name.
    pub fn in_namespace(namespace: NamespaceName, class_name: ClassName) -> Self {
        Self {
            namespace: Some(namespace),
            class_name,
        }
    }

    /// Get the namespace, if any.
    pub fn namespace(&self) -> Option<&NamespaceName> {
        self.namespace.as_ref()
    }

    /// Get the class name (the last segment).
    pub fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Check if this class lives directly in `namespace`.
    ///
    /// `None` stands for the global namespace.
    pub fn is_in_namespace(&self, namespace: Option<&NamespaceName>) -> bool {
        self.namespace.as_ref() == namespace
    }

    /// Get the shortest path that names this class from inside `parent`.
    pub fn relative_path_from(&self, parent: Option<&NamespaceName>) -> String {
        let (Some(parent), Some(namespace)) = (parent, self.namespace.as_ref()) else {
            return match parent {
                None => self.to_string(),
                Some(_) => self.class_name.to_string(),
            };
        };

        if namespace == parent {
            self.class_name.to_string()
        } else if namespace.is_sub_namespace_of(parent) {
            format!(
                "{}{}{}",
                namespace.relative_path_from(parent),
                SEPARATOR,
                self.class_name
            )
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for FullyQualified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}{}{}", namespace, SEPARATOR, self.class_name),
            None => write!(f, "{}", self.class_name),
        }
    }
}

impl FromStr for FullyQualified {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<ClassName> for FullyQualified {
    fn from(class_name: ClassName) -> Self {
        Self {
            namespace: None,
            class_name,
        }
    }
}

impl From<NamespaceName> for FullyQualified {
    fn from(namespace: NamespaceName) -> Self {
        Self {
            class_name: ClassName::from_segment(namespace.last_part()),
            namespace: namespace.parent(),
        }
    }
}
