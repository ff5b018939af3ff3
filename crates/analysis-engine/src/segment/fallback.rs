//! Sentence-clustering fallback (phase 2 of segmentation)

use shared_types::DocumentType;

use super::headers::RawSection;
use crate::normalize::split_sentences;
use crate::scoring::score;

const MIN_SENTENCE_LEN: usize = 20;
const MIN_SELECTED: usize = 12;
const MAX_SELECTED: usize = 18;
const SELECTED_FRACTION: f64 = 0.2;
const SENTENCES_PER_SECTION: usize = 2;

/// How many top-scoring sentences feed the synthetic sections
pub fn selection_size(sentence_count: usize) -> usize {
    let target = (sentence_count as f64 * SELECTED_FRACTION).round() as usize;
    target.clamp(MIN_SELECTED, MAX_SELECTED)
}

/// Build synthetic sections from the highest-scoring sentences, two per section.
///
/// Ties keep document order. Sections are numbered 1, 2, ... in score order.
pub fn fallback_sections(text: &str, document_type: DocumentType) -> Vec<RawSection> {
    let sentences: Vec<&str> = split_sentences(text)
        .into_iter()
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .collect();

    let mut scored: Vec<(u32, &str)> = sentences
        .iter()
        .map(|s| (score(s, document_type), *s))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let top: Vec<&str> = scored
        .into_iter()
        .take(selection_size(sentences.len()))
        .map(|(_, s)| s)
        .collect();

    top.chunks(SENTENCES_PER_SECTION)
        .enumerate()
        .map(|(i, chunk)| RawSection {
            number: i as u32 + 1,
            content: chunk.join(". "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selection_size_is_clamped() {
        assert_eq!(selection_size(0), 12);
        assert_eq!(selection_size(10), 12);
        assert_eq!(selection_size(70), 14);
        assert_eq!(selection_size(500), 18);
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        assert!(fallback_sections("Too short. Also short. Nope.", DocumentType::General).is_empty());
    }

    #[test]
    fn test_pairs_highest_scores_first() {
        let text = "The weather was pleasant all through the week. \
                    The tenant shall pay a penalty fee for late payment. \
                    Birds were singing in the garden this morning. \
                    Termination of this agreement requires written notice.";
        let sections = fallback_sections(text, DocumentType::Lease);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].number, 1);
        assert_eq!(
            sections[0].content,
            "The tenant shall pay a penalty fee for late payment. \
             Termination of this agreement requires written notice"
        );
        assert_eq!(
            sections[1].content,
            "The weather was pleasant all through the week. \
             Birds were singing in the garden this morning"
        );
    }
}
