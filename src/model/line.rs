//! Line-level types.

use super::Code;

/// A single unit of output: literal text, or an indented group of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Raw text. May contain embedded newlines (e.g. nowdoc bodies).
    Text(String),

    /// A nested block of lines sharing an indentation offset.
    Group(Group),
}

impl Line {
    /// Create a text line.
    pub fn text(text: impl Into<String>) -> Self {
        Line::Text(text.into())
    }

    /// Get the text of this line, if it is not a group.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Line::Text(text) => Some(text),
            Line::Group(_) => None,
        }
    }

    /// Get the group, if this line is one.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Line::Text(_) => None,
            Line::Group(group) => Some(group),
        }
    }

    /// Check if this line is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Line::Group(_))
    }

    /// Check if this line is whitespace-only text.
    ///
    /// A group is never blank, even when it holds no lines.
    pub fn is_blank(&self) -> bool {
        match self {
            Line::Text(text) => text.trim().is_empty(),
            Line::Group(_) => false,
        }
    }

    /// The single-line rendering used by `join`: groups have none.
    pub(crate) fn flat_text(&self) -> &str {
        self.as_text().unwrap_or("")
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::Text(text.to_string())
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::Text(text)
    }
}

impl From<&String> for Line {
    fn from(text: &String) -> Self {
        Line::Text(text.clone())
    }
}

impl From<Group> for Line {
    fn from(group: Group) -> Self {
        Line::Group(group)
    }
}

/// An ordered block of lines rendered with a relative indentation depth.
///
/// The content is resolved when the group is built, so a group never holds
/// an unevaluated producer. Nested groups are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    lines: Vec<Line>,
    depth: i32,
}

impl Group {
    /// Create a group with no extra indentation.
    pub fn new<'a>(lines: impl Into<Code<'a>>) -> Self {
        Self::indent(0, lines)
    }

    /// Create a group indented `depth` levels relative to its parent.
    ///
    /// The depth may be negative to outdent.
    pub fn indent<'a>(depth: i32, lines: impl Into<Code<'a>>) -> Self {
        Self {
            lines: lines.into().resolve(),
            depth,
        }
    }

    /// Get the lines in this group.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the relative indentation depth.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Check if the group has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of direct lines in the group.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Take the lines out of the group, dropping the depth.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Rebuild the group around transformed content, keeping its depth.
    pub(crate) fn map_lines(self, f: impl FnOnce(Vec<Line>) -> Vec<Line>) -> Self {
        Self {
            lines: f(self.lines),
            depth: self.depth,
        }
    }
}
