//! Bare class names.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single class identifier with no namespace, e.g. `User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    name: String,
}

impl ClassName {
    /// Create a class name. Surrounding whitespace is trimmed.
    ///
    /// Fails if the name is empty or contains a `\`.
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(Error::empty_name("class name", name));
        }

        if trimmed.contains('\\') {
            return Err(Error::contains_separator("class name", name));
        }

        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Wrap a segment taken from an already validated path.
    pub(crate) fn from_segment(segment: &str) -> Self {
        Self {
            name: segment.to_string(),
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ClassName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_class_name() {
        let class = ClassName::new("MyClass").unwrap();
        assert_eq!(class.as_str(), "MyClass");
        assert_eq!(class.to_string(), "MyClass");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let class = ClassName::new("  MyClass  ").unwrap();
        assert_eq!(class.as_str(), "MyClass");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ClassName::new(""),
            Err(Error::InvalidName { kind: "class name", reason: "cannot be empty", .. })
        ));
        assert!(ClassName::new("   ").is_err());
    }

    #[test]
    fn test_rejects_separator() {
        for input in ["My\\Class", "\\MyClass", "MyClass\\"] {
            let err = ClassName::new(input).unwrap_err();
            assert!(err.to_string().contains("cannot contain namespace separator"));
        }
    }
}
