//! Numbered header detection (phase 1 of segmentation)

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::collapse_whitespace;

/// Highest section number accepted; larger numbers are usually page numbers or amounts
pub const MAX_SECTION_NUMBER: u32 = 20;
/// Maximum body lines gathered under one header
pub const MAX_CONTINUATION_LINES: usize = 15;
const MIN_TITLE_LEN: usize = 10;
const MAX_TITLE_LEN: usize = 200;
const MIN_CONTINUATION_LEN: usize = 10;

lazy_static! {
    /// Header shapes in priority order. Group 1 is the section number, the last group the title.
    static ref HEADER_PATTERNS: Vec<Regex> = vec![
        // "1. Title" / "1 Title"
        Regex::new(r"^(\d+)[.\s]+([^\d].*)$").unwrap(),
        // "Section 1: Title", "Article 1. Title", "Clause 1 Title", also after a prefix ("See Section 5: ...")
        Regex::new(r"(?i)(?:section|article|clause)\s*(\d+)[:.\-\s]+(.+)$").unwrap(),
        // "1.2 Title" belongs to section 1
        Regex::new(r"^(\d+)\.\d+[.\s]+(.+)$").unwrap(),
        // "Part 1: Title" / "Chapter 1: Title"
        Regex::new(r"(?i)(?:part|chapter)\s*(\d+)[:.\-\s]+(.+)$").unwrap(),
    ];

    /// Any line that looks like the start of another section ends the current body
    static ref HEADER_START: Regex =
        Regex::new(r"(?i)^(?:\d+[.\s]|(?:section|article|clause|part|chapter)\s*\d+)").unwrap();

    /// A numbered clause starting mid-line right after a sentence end, e.g. "... monthly. 2. Deposit"
    static ref INLINE_HEADER: Regex = Regex::new(r"[.!?;]\s+(\d{1,2}\.\s+[A-Z])").unwrap();
}

/// A header line with its collected body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub number: u32,
    pub content: String,
}

/// Split text into trimmed, non-empty lines, breaking lines at inline numbered clauses
pub fn header_lines(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(split_inline_headers)
        .map(|line| collapse_whitespace(&line))
        .filter(|line| !line.is_empty())
        .collect()
}

fn split_inline_headers(line: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for caps in INLINE_HEADER.captures_iter(line) {
        if let Some(header) = caps.get(1) {
            pieces.push(line[start..header.start()].to_string());
            start = header.start();
        }
    }
    pieces.push(line[start..].to_string());
    pieces
}

/// Parse a line as a section header, applying the false-positive guards
pub fn parse_header(line: &str) -> Option<(u32, &str)> {
    HEADER_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(line)?;
        let number: u32 = caps.get(1)?.as_str().parse().ok()?;
        let title = caps.get(caps.len() - 1)?.as_str().trim();
        is_valid_header(number, title).then_some((number, title))
    })
}

fn is_valid_header(number: u32, title: &str) -> bool {
    let len = title.chars().count();
    len > MIN_TITLE_LEN
        && len < MAX_TITLE_LEN
        && !title.to_ascii_lowercase().contains("http")
        && !title.chars().all(|c| c.is_ascii_digit())
        && (1..=MAX_SECTION_NUMBER).contains(&number)
}

/// Detect numbered sections. Numbers are unique (first occurrence wins) and ascending.
pub fn detect_sections(text: &str) -> Vec<RawSection> {
    let lines = header_lines(text);
    let mut sections: Vec<RawSection> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some((number, title)) = parse_header(line) else {
            continue;
        };
        if sections.iter().any(|s| s.number == number) {
            continue;
        }

        let mut content = title.to_string();
        let mut added = 0;
        for next in &lines[index + 1..] {
            if added >= MAX_CONTINUATION_LINES
                || HEADER_START.is_match(next)
                || parse_header(next).is_some()
            {
                break;
            }
            if next.chars().count() > MIN_CONTINUATION_LEN {
                content.push(' ');
                content.push_str(next);
                added += 1;
            }
        }

        sections.push(RawSection { number, content });
    }

    sections.sort_by_key(|s| s.number);
    sections
}
