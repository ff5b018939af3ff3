//! Dictionary-driven red-flag detection

use std::collections::HashSet;

use shared_types::{RedFlag, Severity};

use crate::dictionary::{
    DEFAULT_FLAG_DESCRIPTION, DEFAULT_FLAG_SUGGESTION, FLAG_DESCRIPTIONS, FLAG_SUGGESTIONS,
    HIGH_SEVERITY_TERMS, MEDIUM_SEVERITY_TERMS, RED_FLAG_TERMS,
};
use crate::normalize::{contains_any, contains_term, extract_context};

/// Characters of context kept on each side of a matched term
pub const CONTEXT_WINDOW: usize = 100;

/// Scan text for every dictionary term.
///
/// Result is unique by term (case-insensitive, first occurrence kept) and
/// stable-sorted from high to low severity.
pub fn detect(text: &str) -> Vec<RedFlag> {
    detect_terms(text, RED_FLAG_TERMS)
}

/// [`detect`] against an arbitrary ordered term list
pub fn detect_terms(text: &str, terms: &[&str]) -> Vec<RedFlag> {
    let mut seen = HashSet::new();
    let mut flags: Vec<RedFlag> = terms
        .iter()
        .filter_map(|term| {
            let context = extract_context(text, term, CONTEXT_WINDOW)?;
            Some(RedFlag::new(*term, context, severity_for(term)))
        })
        .filter(|flag| seen.insert(flag.term.to_lowercase()))
        .collect();

    flags.sort_by(|a, b| b.severity.cmp(&a.severity));
    flags
}

/// Severity tier of a term: high if it contains a high key, else medium if it
/// contains a medium key, else low
pub fn severity_for(term: &str) -> Severity {
    if contains_any(term, HIGH_SEVERITY_TERMS) {
        Severity::High
    } else if contains_any(term, MEDIUM_SEVERITY_TERMS) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Human readable description of a term
pub fn describe(term: &str) -> &'static str {
    let term = term.to_lowercase();
    FLAG_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, description)| *description)
        .unwrap_or(DEFAULT_FLAG_DESCRIPTION)
}

/// Remediation advice for a term; first table key contained in the term wins
pub fn suggest(term: &str) -> &'static str {
    FLAG_SUGGESTIONS
        .iter()
        .find(|(key, _)| contains_term(term, key))
        .map(|(_, suggestion)| *suggestion)
        .unwrap_or(DEFAULT_FLAG_SUGGESTION)
}

/// Fill in description and suggestion
pub fn enrich(mut flag: RedFlag) -> RedFlag {
    flag.description = describe(&flag.term).to_string();
    flag.suggestion = suggest(&flag.term).to_string();
    flag
}

/// [`detect`] followed by [`enrich`]
pub fn detect_enriched(text: &str) -> Vec<RedFlag> {
    detect(text).into_iter().map(enrich).collect()
}
