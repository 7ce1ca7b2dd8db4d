//! Combinators that edit the first or last line of a sequence.

use crate::model::{resolve, Code, Line};

/// Append `suffix` to the last line.
///
/// When the last line is a group, the suffix lands on the group's own last
/// line and the group keeps its depth. Empty input stays empty.
pub fn suffix_last<'a>(suffix: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    let mut lines = resolve(data);
    if let Some(last) = lines.pop() {
        lines.push(match last {
            Line::Text(text) => Line::Text(text + suffix),
            Line::Group(group) => Line::Group(group.map_lines(|inner| suffix_last(suffix, inner))),
        });
    }
    lines
}

/// Prepend `prefix` to the first line, recursing into a leading group.
pub fn prefix_first<'a>(prefix: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    map_first(resolve(data), &|line| match line {
        Line::Text(text) => Line::Text(format!("{prefix}{text}")),
        Line::Group(group) => Line::Group(group.map_lines(|inner| prefix_first(prefix, inner))),
    })
}

/// Append `suffix` to the first line, recursing into a leading group.
pub fn suffix_first<'a>(suffix: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    map_first(resolve(data), &|line| match line {
        Line::Text(text) => Line::Text(text + suffix),
        Line::Group(group) => Line::Group(group.map_lines(|inner| suffix_first(suffix, inner))),
    })
}

fn map_first(mut lines: Vec<Line>, f: &dyn Fn(Line) -> Line) -> Vec<Line> {
    if !lines.is_empty() {
        let first = lines.remove(0);
        lines.insert(0, f(first));
    }
    lines
}

/// Surround the data with `prefix` on the first line and, optionally,
/// `suffix` on the last.
pub fn wrap<'a>(prefix: &str, data: impl Into<Code<'a>>, suffix: Option<&str>) -> Vec<Line> {
    match suffix {
        Some(suffix) => prefix_first(prefix, suffix_last(suffix, data)),
        None => prefix_first(prefix, data),
    }
}

/// [`wrap`] when `condition` holds, otherwise the data unchanged.
pub fn maybe_wrap<'a>(
    condition: bool,
    prefix: &str,
    data: impl Into<Code<'a>>,
    suffix: Option<&str>,
) -> Vec<Line> {
    if condition {
        wrap(prefix, data, suffix)
    } else {
        resolve(data)
    }
}

/// Terminate the data with `;`.
pub fn statement<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    suffix_last(";", data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lines, render, Group};

    #[test]
    fn test_suffix_last() {
        assert_eq!(
            render(suffix_last(",", ["item1", "item2", "item3"])),
            "item1\nitem2\nitem3,"
        );
    }

    #[test]
    fn test_suffix_last_with_empty_input() {
        assert!(suffix_last(",", lines![]).is_empty());
    }

    #[test]
    fn test_suffix_last_recurses_into_group() {
        let lines = suffix_last(";", lines!["if ($condition)", Group::indent(1, "return true")]);
        assert_eq!(lines[1], Line::Group(Group::indent(1, "return true;")));
    }

    #[test]
    fn test_statement() {
        assert_eq!(render(statement("$x = 5")), "$x = 5;");
        assert_eq!(
            render(statement(lines!["if ($condition)", Group::indent(1, "return true")])),
            "if ($condition)\n    return true;"
        );
    }

    #[test]
    fn test_prefix_first() {
        assert_eq!(
            render(prefix_first("> ", ["line1", "line2", "line3"])),
            "> line1\nline2\nline3"
        );
    }

    #[test]
    fn test_prefix_first_with_group() {
        assert_eq!(
            render(prefix_first("prefix: ", Group::indent(1, "content"))),
            "    prefix: content"
        );
    }

    #[test]
    fn test_suffix_first() {
        assert_eq!(
            render(suffix_first(":", ["key", "value1", "value2"])),
            "key:\nvalue1\nvalue2"
        );
    }

    #[test]
    fn test_suffix_first_with_group_as_first_element() {
        assert_eq!(
            render(suffix_first(
                ",",
                lines![Group::indent(1, "inner content"), "second line"]
            )),
            "    inner content,\nsecond line"
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(render(wrap("[", "content", Some("]"))), "[content]");
        assert_eq!(
            render(wrap("(", ["line1", "line2"], Some(")"))),
            "(line1\nline2)"
        );
        assert_eq!(render(wrap("return ", "$x", None)), "return $x");
    }

    #[test]
    fn test_maybe_wrap() {
        assert_eq!(render(maybe_wrap(true, "(", "content", Some(")"))), "(content)");
        assert_eq!(render(maybe_wrap(false, "(", "content", Some(")"))), "content");
    }
}
