//! Symbol references that can be imported into a document.
//!
//! Every importable thing is a [`Symbol`]: a bare class, a fully qualified
//! class, a namespace, a function, or an explicit alias of one of those.
//! Symbols compare case-insensitively on their path so that rendered
//! declarations come out in a stable order.

mod alias;
mod class_name;
mod fully_qualified;
mod function_name;
mod namespace_name;

pub use alias::Alias;
pub use class_name::ClassName;
pub use fully_qualified::FullyQualified;
pub use function_name::FunctionName;
pub use namespace_name::NamespaceName;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Namespace separator.
pub(crate) const SEPARATOR: &str = "\\";

/// Split every part on the separator and keep the non-empty, trimmed segments.
pub(crate) fn split_path<I, S>(kind: &'static str, parts: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segments: Vec<String> = parts
        .into_iter()
        .flat_map(|part| {
            part.as_ref()
                .split(SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    if segments.is_empty() {
        return Err(Error::EmptyPath { kind });
    }

    Ok(segments)
}

/// Anything that can be imported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A class without a namespace
    Class(ClassName),
    /// A class with an optional namespace
    Qualified(FullyQualified),
    /// A namespace, imported as a scope prefix
    Namespace(NamespaceName),
    /// A function, declared with `use function`
    Function(FunctionName),
    /// Any of the above under an explicit name
    Alias(Alias),
}

impl Symbol {
    /// Get the name an import would like to bind this symbol to.
    pub fn preferred_alias(&self) -> &str {
        match self {
            Symbol::Class(class) => class.as_str(),
            Symbol::Qualified(qualified) => qualified.class_name().as_str(),
            Symbol::Namespace(namespace) => namespace.last_part(),
            Symbol::Function(function) => function.short_name(),
            Symbol::Alias(alias) => alias.alias(),
        }
    }

    /// Get the natural unqualified name, ignoring any explicit alias.
    pub fn leaf_name(&self) -> &str {
        match self {
            Symbol::Alias(alias) => alias.target().leaf_name(),
            other => other.preferred_alias(),
        }
    }

    /// Get the namespace the symbol lives in, if any.
    pub fn scope(&self) -> Option<NamespaceName> {
        match self {
            Symbol::Class(_) => None,
            Symbol::Qualified(qualified) => qualified.namespace().cloned(),
            Symbol::Namespace(namespace) => namespace.parent(),
            Symbol::Function(function) => function.namespace(),
            Symbol::Alias(alias) => alias.target().scope(),
        }
    }

    /// Get the full path, without any `function ` marker or alias.
    pub fn path(&self) -> String {
        match self {
            Symbol::Class(class) => class.to_string(),
            Symbol::Qualified(qualified) => qualified.to_string(),
            Symbol::Namespace(namespace) => namespace.to_string(),
            Symbol::Function(function) => function.path().to_string(),
            Symbol::Alias(alias) => alias.target().path(),
        }
    }

    /// Check if the symbol is (or aliases) a function.
    pub fn is_function(&self) -> bool {
        match self {
            Symbol::Function(_) => true,
            Symbol::Alias(alias) => alias.target().is_function(),
            _ => false,
        }
    }

    /// Get the key declarations are sorted by.
    pub fn sort_key(&self) -> String {
        self.path().replace(SEPARATOR, " ")
    }

    fn rank(&self) -> u8 {
        match self {
            Symbol::Class(_) => 0,
            Symbol::Qualified(_) => 1,
            Symbol::Namespace(_) => 2,
            Symbol::Function(_) => 3,
            Symbol::Alias(_) => 4,
        }
    }
}

fn compare_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(b.bytes().map(|b| b.to_ascii_lowercase()))
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_ascii_case(&self.sort_key(), &other.sort_key())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (Symbol::Alias(a), Symbol::Alias(b)) => a
                    .target()
                    .cmp(b.target())
                    .then_with(|| a.alias().cmp(b.alias())),
                _ => self.to_string().cmp(&other.to_string()),
            })
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Class(class) => class.fmt(f),
            Symbol::Qualified(qualified) => qualified.fmt(f),
            Symbol::Namespace(namespace) => namespace.fmt(f),
            Symbol::Function(function) => function.fmt(f),
            Symbol::Alias(alias) => alias.fmt(f),
        }
    }
}

impl FromStr for Symbol {
    type Err = Error;

    /// `function A\b` parses as a function, anything else as a qualified name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.strip_prefix("function ") {
            Some(path) => Ok(Symbol::Function(FunctionName::new(path)?)),
            None => Ok(Symbol::Qualified(FullyQualified::new(s)?)),
        }
    }
}

impl From<ClassName> for Symbol {
    fn from(class: ClassName) -> Self {
        Symbol::Class(class)
    }
}

impl From<FullyQualified> for Symbol {
    fn from(qualified: FullyQualified) -> Self {
        Symbol::Qualified(qualified)
    }
}

impl From<NamespaceName> for Symbol {
    fn from(namespace: NamespaceName) -> Self {
        Symbol::Namespace(namespace)
    }
}

impl From<FunctionName> for Symbol {
    fn from(function: FunctionName) -> Self {
        Symbol::Function(function)
    }
}

impl From<Alias> for Symbol {
    fn from(alias: Alias) -> Self {
        Symbol::Alias(alias)
    }
}

impl From<&Symbol> for Symbol {
    fn from(symbol: &Symbol) -> Self {
        symbol.clone()
    }
}

impl From<&FullyQualified> for Symbol {
    fn from(qualified: &FullyQualified) -> Self {
        Symbol::Qualified(qualified.clone())
    }
}
