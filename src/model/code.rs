//! Lazily-evaluated line sequences and their resolution.

use std::fmt;

use super::{Group, Line};

/// Input accepted wherever lines are expected.
///
/// A `Code` value is a single line, an ordered sequence of further `Code`
/// values, or a producer that is invoked once at resolution time. Producers
/// may return more producers; [`Code::resolve`] expands all of them in place
/// while treating groups as opaque.
pub enum Code<'a> {
    /// One text line or group.
    Line(Line),

    /// An ordered sequence, flattened in place on resolution.
    Seq(Vec<Code<'a>>),

    /// A deferred producer.
    Lazy(Box<dyn FnOnce() -> Code<'a> + 'a>),
}

impl<'a> Code<'a> {
    /// An empty sequence.
    pub fn empty() -> Self {
        Code::Seq(Vec::new())
    }

    /// Defer building lines until resolution.
    ///
    /// The closure may borrow from its environment, which lets it call
    /// `Document::import` while the document is rendering.
    pub fn lazy<F, C>(producer: F) -> Self
    where
        F: FnOnce() -> C + 'a,
        C: Into<Code<'a>>,
    {
        Code::Lazy(Box::new(move || producer().into()))
    }

    /// Materialize into a concrete, ordered list of lines.
    pub fn resolve(self) -> Vec<Line> {
        let mut lines = Vec::new();
        self.resolve_into(&mut lines);
        lines
    }

    fn resolve_into(self, lines: &mut Vec<Line>) {
        match self {
            Code::Line(line) => lines.push(line),
            Code::Seq(items) => {
                for item in items {
                    item.resolve_into(lines);
                }
            }
            Code::Lazy(producer) => producer().resolve_into(lines),
        }
    }
}

/// Resolve any line input into a concrete list of lines.
pub fn resolve<'a>(code: impl Into<Code<'a>>) -> Vec<Line> {
    code.into().resolve()
}

impl fmt::Debug for Code<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Line(line) => f.debug_tuple("Line").field(line).finish(),
            Code::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Code::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl Default for Code<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Line> for Code<'_> {
    fn from(line: Line) -> Self {
        Code::Line(line)
    }
}

impl From<Group> for Code<'_> {
    fn from(group: Group) -> Self {
        Code::Line(Line::Group(group))
    }
}

impl From<&str> for Code<'_> {
    fn from(text: &str) -> Self {
        Code::Line(Line::from(text))
    }
}

impl From<String> for Code<'_> {
    fn from(text: String) -> Self {
        Code::Line(Line::Text(text))
    }
}

impl From<&String> for Code<'_> {
    fn from(text: &String) -> Self {
        Code::Line(Line::from(text))
    }
}

impl<'a, T: Into<Code<'a>>> From<Vec<T>> for Code<'a> {
    fn from(items: Vec<T>) -> Self {
        Code::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Code<'a>>, const N: usize> From<[T; N]> for Code<'a> {
    fn from(items: [T; N]) -> Self {
        Code::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Code<'a>>> From<Option<T>> for Code<'a> {
    fn from(item: Option<T>) -> Self {
        item.map_or_else(Code::empty, Into::into)
    }
}

impl<'a, T: Into<Code<'a>>> FromIterator<T> for Code<'a> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Code::Seq(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Code`] sequence from heterogeneous items.
///
/// ```
/// use phpgen::{lines, Group, render};
///
/// let out = render(lines!["if ($ok) {", Group::indent(1, "return;"), "}"]);
/// assert_eq!(out, "if ($ok) {\n    return;\n}");
/// ```
#[macro_export]
macro_rules! lines {
    () => {
        $crate::Code::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Code::Seq(vec![$($crate::Code::from($item)),+])
    };
}
