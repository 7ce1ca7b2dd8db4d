//! Explicitly aliased symbols.

use std::fmt;

use super::Symbol;
use crate::error::{Error, Result};

/// A symbol rebound to a different display name, e.g. `App\User as UserModel`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    alias: String,
    target: Box<Symbol>,
}

impl Alias {
    /// Alias `target` as `alias`.
    ///
    /// Aliasing an alias rebinds its target; aliases never nest.
    pub fn new(alias: &str, target: impl Into<Symbol>) -> Result<Self> {
        let trimmed = alias.trim();

        if trimmed.is_empty() {
            return Err(Error::empty_name("alias", alias));
        }

        if trimmed.contains('\\') {
            return Err(Error::contains_separator("alias", alias));
        }

        let target = match target.into() {
            Symbol::Alias(inner) => inner.target,
            other => Box::new(other),
        };

        Ok(Self {
            alias: trimmed.to_string(),
            target,
        })
    }

    /// Get the display name.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Get the aliased symbol.
    pub fn target(&self) -> &Symbol {
        &self.target
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} as {}", self.target, self.alias)
    }
}
