//! Whitespace cleanup and case-insensitive matching helpers
//!
//! Every matcher here works on byte offsets of the original text so that
//! anything sliced out (contexts, titles) stays a verbatim substring.

/// Normalize raw extracted text.
///
/// Line breaks survive (the segmenter works line by line); runs of spaces and
/// tabs inside a line collapse to one space, lines are trimmed and blank lines
/// dropped.
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse every whitespace run (including newlines) to a single space and trim
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte offset of the first ASCII case-insensitive occurrence of `term`
///
/// The returned offset is always a char boundary: `term` is valid UTF-8, so a
/// match can only start where its first byte starts a character.
pub fn find_term(haystack: &str, term: &str) -> Option<usize> {
    let needle = term.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// ASCII case-insensitive substring test
pub fn contains_term(haystack: &str, term: &str) -> bool {
    find_term(haystack, term).is_some()
}

/// True if `haystack` contains any of `terms`
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(haystack, term))
}

/// Number of distinct `terms` present in `haystack`
pub fn count_matches(haystack: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| contains_term(haystack, term))
        .count()
}

/// Slice `window` characters either side of the first occurrence of `term`, trimmed.
///
/// Returns `None` when the term does not occur.
pub fn extract_context<'a>(text: &'a str, term: &str, window: usize) -> Option<&'a str> {
    let pos = find_term(text, term)?;
    let term_end = pos + term.len();

    let start = if window == 0 {
        pos
    } else {
        text[..pos]
            .char_indices()
            .rev()
            .nth(window - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let end = text[term_end..]
        .char_indices()
        .nth(window)
        .map(|(i, _)| term_end + i)
        .unwrap_or(text.len());

    Some(text[start..end].trim())
}

/// Split on runs of sentence terminators (`.`, `!`, `?`), trimming each piece
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip leading and trailing non-letters and collapse whitespace
pub fn clean_fragment(s: &str) -> String {
    let trimmed = s.trim_matches(|c: char| !c.is_alphabetic());
    collapse_whitespace(trimmed)
}

/// Upper-case the first character
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
