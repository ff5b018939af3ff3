//! Consent checklist synthesis

use std::collections::HashSet;

use shared_types::{ConsentItem, RedFlag, Severity};

use crate::dictionary::CONSENT_STATEMENTS;
use crate::normalize::contains_term;

/// Leading key points turned into checklist items
pub const MAX_KEY_POINT_ITEMS: usize = 3;
/// Words kept from each key point
pub const KEY_POINT_WORDS: usize = 8;

/// Build the checklist: acknowledgements for high and medium red flags (in
/// their given order, one per term), then up to three key points.
pub fn synthesize(key_points: &[String], red_flags: &[RedFlag]) -> Vec<ConsentItem> {
    let mut used_terms = HashSet::new();

    let flag_items = red_flags
        .iter()
        .filter(|flag| matches!(flag.severity, Severity::High | Severity::Medium))
        .filter(|flag| used_terms.insert(flag.term.to_lowercase()))
        .map(|flag| {
            ConsentItem::red_flag(consent_statement(&flag.term), flag.severity, flag.context.clone())
        });

    let point_items = key_points
        .iter()
        .take(MAX_KEY_POINT_ITEMS)
        .map(|point| ConsentItem::key_point(concise_key_point(point)));

    flag_items.chain(point_items).collect()
}

/// First-person acknowledgement for a flagged term
pub fn consent_statement(term: &str) -> String {
    CONSENT_STATEMENTS
        .iter()
        .find(|(key, _)| contains_term(term, key))
        .map(|(_, statement)| statement.to_string())
        .unwrap_or_else(|| format!("I understand the {} terms and their implications", term))
}

/// "I understand: " followed by the first eight words of the point
pub fn concise_key_point(point: &str) -> String {
    let words: Vec<&str> = point.split(' ').collect();
    if words.len() > KEY_POINT_WORDS {
        format!("I understand: {}", words[..KEY_POINT_WORDS].join(" "))
    } else {
        format!("I understand: {}", point)
    }
}
