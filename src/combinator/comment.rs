//! Comment combinators.

use super::prefix;
use crate::model::{resolve, Code, Line};

/// Turn every line into a `//` comment.
pub fn comment<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    prefix("// ", data)
}

/// Wrap the data in a `/* ... */` block.
pub fn block_comment<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    starred("/*", data)
}

/// Wrap the data in a `/** ... */` doc block.
pub fn doc_comment<'a>(data: impl Into<Code<'a>>) -> Vec<Line> {
    starred("/**", data)
}

fn starred<'a>(open: &str, data: impl Into<Code<'a>>) -> Vec<Line> {
    let body = resolve(data);
    if body.is_empty() {
        return body;
    }

    let mut lines = vec![Line::text(open)];
    lines.extend(prefix(" * ", body));
    lines.push(Line::text(" */"));
    lines
}
