//! Combinators that merge lines.

use super::prefix_first;
use crate::model::{resolve, Code, Line};

/// Join all lines into one string. Groups contribute an empty string.
pub fn join<'a>(delimiter: &str, data: impl Into<Code<'a>>) -> String {
    resolve(data)
        .iter()
        .map(Line::flat_text)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Merge the first two lines into one.
///
/// If the second line is a group, the first line's text is prefixed onto
/// the group's first inner line and the group takes both positions. An
/// empty second group therefore swallows the first line.
pub fn join_first_pair<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    let mut lines = resolve(data).into_iter();

    let Some(first) = lines.next() else {
        return Vec::new();
    };
    let Some(second) = lines.next() else {
        return vec![first];
    };

    let head = first.flat_text();
    let merged = match second {
        Line::Group(group) => Line::Group(group.map_lines(|inner| prefix_first(head, inner))),
        Line::Text(text) => Line::Text(format!("{head}{text}")),
    };

    std::iter::once(merged).chain(lines).collect()
}
