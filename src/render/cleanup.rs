//! Blank-line normalization for rendered output.

use regex::{Captures, Regex};

/// Collapse runs of blank lines to at most `max` (0 = unlimited).
pub fn collapse_blank_lines(text: &str, max: u8) -> String {
    if max == 0 {
        return text.to_string();
    }

    // `max` blank lines sit between `max + 1` newlines.
    let limit = usize::from(max) + 1;
    let re = Regex::new(r"\n{2,}").expect("newline run pattern is valid");
    re.replace_all(text, |caps: &Captures| "\n".repeat(caps[0].len().min(limit)))
        .into_owned()
}

/// Strip leading and trailing newlines, keeping indentation on the first line.
pub fn trim_newlines(text: &str) -> &str {
    text.trim_matches('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_to_single_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb", 1), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb", 1), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb", 1), "a\nb");
    }

    #[test]
    fn test_collapse_with_higher_limit() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb", 2), "a\n\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb", 2), "a\n\n\nb");
    }

    #[test]
    fn test_largest_limit() {
        let text = format!("a{}b", "\n".repeat(300));
        let collapsed = collapse_blank_lines(&text, u8::MAX);
        assert_eq!(collapsed, format!("a{}b", "\n".repeat(256)));
    }

    #[test]
    fn test_unlimited() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb", 0), "a\n\n\n\nb");
    }

    #[test]
    fn test_trim_newlines_keeps_indentation() {
        assert_eq!(trim_newlines("\n\n    a\nb\n\n"), "    a\nb");
        assert_eq!(trim_newlines("\n\n"), "");
    }
}
