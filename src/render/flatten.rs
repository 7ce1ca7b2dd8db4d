//! Flattening of nested groups into indented text lines.

use crate::model::Line;

/// Walk the line tree depth-first and produce one indented string per line.
///
/// A line's depth is the sum of its enclosing group depths, clamped at zero.
/// Text containing newlines is indented line by line, and lines that end up
/// whitespace-only are emitted empty.
pub fn flatten(lines: &[Line], unit: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    walk(lines, 0, unit, &mut out);
    out
}

fn walk(lines: &[Line], depth: i32, unit: &str, out: &mut Vec<String>) {
    for line in lines {
        match line {
            Line::Text(text) => out.push(indent_text(text, depth, unit)),
            Line::Group(group) => walk(group.lines(), depth + group.depth(), unit, out),
        }
    }
}

fn indent_text(text: &str, depth: i32, unit: &str) -> String {
    let pad = unit.repeat(usize::try_from(depth).unwrap_or(0));
    text.split('\n')
        .map(|part| {
            if part.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{part}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
