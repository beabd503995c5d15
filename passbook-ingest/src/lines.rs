//! Page text to lines, lines to tokens.

/// Split page text into trimmed, non-empty lines, top to bottom.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Whitespace-delimited tokens of a single line
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
