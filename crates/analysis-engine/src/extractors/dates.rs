// Deadline date extraction for key points
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Due date, deadline and expiration cues, each followed by a numeric date in the same sentence
    static ref DEADLINE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)due[^.]*?date[^.]*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        Regex::new(r"(?i)deadline[^.]*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        Regex::new(r"(?i)expir[^.]*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
    ];
}

/// First date found per cue, in cue order. The same date may be returned by several cues.
pub fn extract_deadline_dates(text: &str) -> Vec<String> {
    DEADLINE_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let caps = pattern.captures(text)?;
            let date = caps.get(1).or_else(|| caps.get(0))?;
            Some(date.as_str().to_string())
        })
        .collect()
}
