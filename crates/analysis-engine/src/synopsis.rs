//! Two-sentence synopsis of a section's raw content

use shared_types::DocumentType;

use crate::dictionary::{SYNOPSIS_FALLBACK, SYNOPSIS_KEYWORDS, SYNOPSIS_PADDING};
use crate::normalize::{
    capitalize_first, clean_fragment, collapse_whitespace, contains_any, split_sentences,
};

const MIN_SENTENCE_LEN: usize = 20;
const MAX_SENTENCE_LEN: usize = 300;
const MAX_CANDIDATES: usize = 8;
const MIN_KEYWORD_SENTENCE_LEN: usize = 30;
const FALLBACK_SENTENCES: usize = 3;

/// Render `content` as exactly two capitalized, period-terminated sentences.
///
/// Sentences mentioning a synopsis keyword are preferred; otherwise the first
/// three candidates are used. Missing sentences are padded with a generic
/// reminder so the output shape never varies.
pub fn summarize(content: &str, _document_type: DocumentType) -> String {
    let clean_text = collapse_whitespace(content);

    let candidates: Vec<&str> = split_sentences(&clean_text)
        .into_iter()
        .filter(|s| {
            let len = s.chars().count();
            len > MIN_SENTENCE_LEN && len < MAX_SENTENCE_LEN
        })
        .take(MAX_CANDIDATES)
        .collect();

    if candidates.is_empty() {
        return compose("", "");
    }

    let mut important: Vec<String> = candidates
        .iter()
        .filter(|s| s.chars().count() > MIN_KEYWORD_SENTENCE_LEN && contains_any(s, SYNOPSIS_KEYWORDS))
        .map(|s| clean_fragment(s))
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .collect();

    if important.is_empty() {
        important = candidates
            .iter()
            .take(FALLBACK_SENTENCES)
            .map(|s| clean_fragment(s))
            .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
            .collect();
    }

    match important.as_slice() {
        [] => compose("", ""),
        [only] => compose(only, SYNOPSIS_PADDING),
        [first, second, ..] => compose(first, second),
    }
}

fn compose(first: &str, second: &str) -> String {
    if first.is_empty() {
        return format!("{} {}", SYNOPSIS_FALLBACK[0], SYNOPSIS_FALLBACK[1]);
    }
    format!("{} {}", finish_sentence(first), finish_sentence(second))
}

fn finish_sentence(s: &str) -> String {
    let mut sentence = capitalize_first(s.trim());
    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentence_count(s: &str) -> usize {
        s.matches(". ").count() + usize::from(s.ends_with('.'))
    }

    #[test]
    fn test_prefers_keyword_sentences() {
        let content = "The building has a lovely garden out back. \
                       A late payment fee of fifty dollars applies each month. \
                       The landlord may inspect the property with notice. \
                       Termination requires sixty days written notice from either side.";
        assert_eq!(
            summarize(content, DocumentType::Lease),
            "A late payment fee of fifty dollars applies each month. \
             Termination requires sixty days written notice from either side."
        );
    }

    #[test]
    fn test_falls_back_to_leading_sentences() {
        let content = "the garden is shared by everyone here. pets are welcome in the courtyard";
        assert_eq!(
            summarize(content, DocumentType::General),
            "The garden is shared by everyone here. Pets are welcome in the courtyard."
        );
    }

    #[test]
    fn test_pads_single_sentence() {
        let content = "Rent. Tenant shall pay rent of $1000 monthly.";
        assert_eq!(
            summarize(content, DocumentType::Lease),
            format!("Tenant shall pay rent of $1000 monthly. {}", SYNOPSIS_PADDING)
        );
    }

    #[test]
    fn test_generic_disclaimer_when_nothing_usable() {
        assert_eq!(
            summarize("Short. Tiny.", DocumentType::General),
            "This section outlines key terms and conditions. Please review all details carefully before proceeding."
        );
    }

    #[test]
    fn test_always_two_sentences() {
        for content in [
            "",
            "Rent. Tenant shall pay rent of $1000 monthly.",
            "A late payment fee of fifty dollars applies. Another service fee applies to all users. A third payment obligation exists too.",
        ] {
            assert_eq!(sentence_count(&summarize(content, DocumentType::General)), 2);
        }
    }
}
