//! String literal helpers.

use crate::error::{Error, Result};

/// Render `input` as a PHP string literal.
///
/// Single-line input becomes a single-quoted string. Anything spanning
/// several lines becomes a nowdoc closed by `tag`, with the body and the
/// closing tag indented four spaces.
pub fn maybe_nowdoc(input: &str, tag: &str) -> Result<String> {
    if !input.contains('\n') {
        let escaped = input.replace('\\', "\\\\").replace('\'', "\\'");
        return Ok(format!("'{escaped}'"));
    }

    if !is_identifier(tag) {
        return Err(Error::Usage(format!("`{tag}` is not a valid nowdoc tag")));
    }

    if input.lines().any(|line| closes_nowdoc(line, tag)) {
        return Err(Error::Usage(format!("nowdoc content contains its closing tag `{tag}`")));
    }

    let body = input
        .split('\n')
        .chain(std::iter::once(tag))
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("<<<'{tag}'\n{body}"))
}

// Since PHP 7.3 the closing marker may be indented and followed by any
// non-identifier character, as in `EOD;` or `EOD,`.
fn closes_nowdoc(line: &str, tag: &str) -> bool {
    line.trim_start()
        .strip_prefix(tag)
        .is_some_and(|rest| !rest.starts_with(is_identifier_char))
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

fn is_identifier(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
