//! Weighted keyword scoring of individual sentences

use shared_types::DocumentType;

use crate::dictionary::{
    type_boost_terms, MODAL_PHRASES, SCORE_HIGH_KEYWORDS, SCORE_LOW_KEYWORDS,
    SCORE_MEDIUM_KEYWORDS,
};
use crate::normalize::count_matches;

/// Importance score of a sentence.
///
/// High/medium/low legal keywords add 3/2/1 each, document-type terms add 2
/// each, any digit adds 1 and each modal phrase ("shall be", ...) adds 1.
pub fn score(sentence: &str, document_type: DocumentType) -> u32 {
    let keywords = 3 * count_matches(sentence, SCORE_HIGH_KEYWORDS)
        + 2 * count_matches(sentence, SCORE_MEDIUM_KEYWORDS)
        + count_matches(sentence, SCORE_LOW_KEYWORDS);
    let type_specific = 2 * count_matches(sentence, type_boost_terms(document_type));
    let numeric = usize::from(sentence.chars().any(|c| c.is_ascii_digit()));
    let modal = count_matches(sentence, MODAL_PHRASES);

    (keywords + type_specific + numeric + modal) as u32
}
