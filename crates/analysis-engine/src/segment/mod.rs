//! Section segmentation
//!
//! Two phases: numbered header detection over the document's lines and, only
//! when no header is found, synthetic sections built from the highest-scoring
//! sentences. Either way each section's body is condensed by
//! [`crate::synopsis::summarize`] before it is published.

pub mod fallback;
pub mod headers;

use shared_types::{DocumentType, Section};
use tracing::debug;

use crate::synopsis::summarize;

pub use fallback::fallback_sections;
pub use headers::{detect_sections, RawSection};

/// Section numbers withheld from the published summary.
///
/// These are the document's own section numbers, not positions in the detected list.
///
/// Compatibility rule with no documented rationale; do not build on it.
pub const HIDDEN_SECTION_NUMBERS: [u32; 2] = [8, 9];

/// Segment a document into summarized sections, ascending by number
pub fn segment(text: &str, document_type: DocumentType) -> Vec<Section> {
    let mut raw = detect_sections(text);
    if raw.is_empty() {
        raw = fallback_sections(text, document_type);
        debug!(sections = raw.len(), "no section headers found, using sentence fallback");
    } else {
        debug!(sections = raw.len(), "detected numbered sections");
    }

    publish(
        raw.into_iter()
            .map(|section| Section {
                number: section.number,
                content: summarize(&section.content, document_type),
            })
            .collect(),
    )
}

/// Drop sections that must not reach the presentation layer
pub fn publish(sections: Vec<Section>) -> Vec<Section> {
    sections
        .into_iter()
        .filter(|section| !HIDDEN_SECTION_NUMBERS.contains(&section.number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line_numbered_lease() {
        let text = "1. Rent. Tenant shall pay rent of $1000 monthly. 2. Deposit. A security deposit of $500 is required.";
        let sections = segment(text, DocumentType::Lease);
        let numbers: Vec<u32> = sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(sections[0].content.starts_with("Tenant shall pay rent of $1000 monthly."));
    }

    #[test]
    fn test_sections_eight_and_nine_are_hidden() {
        let text = (1..=10)
            .map(|n| format!("{}. Heading number {} with enough length", n, n))
            .collect::<Vec<_>>()
            .join("\n");
        let numbers: Vec<u32> = segment(&text, DocumentType::General)
            .iter()
            .map(|s| s.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 10]);
    }

    #[test]
    fn test_fallback_used_without_headers() {
        let text = "The tenant shall pay a penalty fee for late payment. \
                    Termination of this agreement requires written notice.";
        let sections = segment(text, DocumentType::Lease);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].number, 1);
    }

    #[test]
    fn test_nothing_usable_yields_empty_summary() {
        assert!(segment("Hi. Bye. Ok then.", DocumentType::General).is_empty());
        assert!(segment("", DocumentType::General).is_empty());
    }
}
