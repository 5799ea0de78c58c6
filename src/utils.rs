//! Small text helpers shared by the parsers

/// Marker that starts a comment in a taskrfile
pub const COMMENT_MARKER: &str = "//";

/// Strip surrounding spaces and tabs
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Case-fold a string for case-insensitive comparisons
pub fn to_lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Check whether a line is a full-line comment
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Drop everything from the first comment marker on
pub fn strip_inline_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split on a delimiter, trimming each token and dropping empty ones
pub fn split_list(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(trim_whitespace)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
