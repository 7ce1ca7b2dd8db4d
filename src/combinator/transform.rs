//! Combinators that rewrite every line or reshape a whole block.

use super::suffix_last;
use crate::model::{resolve, Code, Group, Line};

/// Comment marker; lines starting with it never get a suffix.
const COMMENT_MARKER: &str = "//";

/// Append `suffix` to every text line except comments.
///
/// A group gets the suffix on its last inner line only and keeps its depth.
pub fn all_suffix<'a>(suffix: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    resolve(data)
        .into_iter()
        .map(|line| match line {
            Line::Group(group) => Line::Group(group.map_lines(|inner| suffix_last(suffix, inner))),
            Line::Text(text) if text.starts_with(COMMENT_MARKER) => Line::Text(text),
            Line::Text(text) => Line::Text(text + suffix),
        })
        .collect()
}

/// Prepend `prefix` to every text line, including those inside groups.
///
/// Text with embedded newlines is split so each physical line is prefixed.
pub fn prefix<'a>(prefix: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    let mut lines = Vec::new();
    for line in resolve(data) {
        match line {
            Line::Text(text) => {
                lines.extend(text.split('\n').map(|part| Line::Text(format!("{prefix}{part}"))));
            }
            Line::Group(group) => {
                lines.push(Line::Group(group.map_lines(|inner| self::prefix(prefix, inner))));
            }
        }
    }
    lines
}

/// Drop blank text lines from both ends. Groups are never blank.
pub fn trim<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    let lines = resolve(data);
    let start = lines.iter().position(|line| !line.is_blank());
    let end = lines.iter().rposition(|line| !line.is_blank());

    match (start, end) {
        (Some(start), Some(end)) => lines.into_iter().skip(start).take(end - start + 1).collect(),
        _ => Vec::new(),
    }
}

/// Indent the trimmed data by one level.
pub fn indent<'a>(data: impl Into<Code<'a>>) -> Group {
    indent_with(1, true, data)
}

/// Indent the data by `depth` levels, trimming blank edges first if asked.
pub fn indent_with<'a>(depth: i32, trim_edges: bool, data: impl Into<Code<'a>>) -> Group {
    if trim_edges {
        Group::indent(depth, trim(data))
    } else {
        Group::indent(depth, data)
    }
}

/// Emit `before` and `after` around the data, but only if the data
/// resolves to at least one line.
///
/// `before` and `after` are not resolved when the data is empty.
pub fn maybe_dump<'a>(
    before: impl Into<Code<'a>>,
    data: impl Into<Code<'a>>,
    after: impl Into<Code<'a>>,
) -> Vec<Line> {
    let body = resolve(data);
    if body.is_empty() {
        return body;
    }

    let mut lines = resolve(before);
    lines.extend(body);
    lines.extend(resolve(after));
    lines
}
