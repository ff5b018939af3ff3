//! Property tests for the local analysis pipeline

use analysis_engine::dictionary::RED_FLAG_TERMS;
use analysis_engine::rules::red_flags::CONTEXT_WINDOW;
use analysis_engine::AnalysisEngine;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shared_types::{DocumentType, Severity};

const FILLER: &[&str] = &[
    "the", "tenant", "landlord", "shall", "pay", "within", "days", "of", "notice", "user",
    "service", "account", "may", "be", "required", "to", "provide", "written", "property",
    "$500", "12", "monthly", "rent", "agreement", "policy", "and", "or", "each", "party",
];

/// Sentences mixing filler words with dictionary terms, optionally numbered as clauses
fn legal_text() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        3 => prop::sample::select(FILLER),
        1 => prop::sample::select(RED_FLAG_TERMS),
    ];
    let sentence = (prop::collection::vec(word, 3..18), any::<bool>(), 1u32..25).prop_map(
        |(words, numbered, n)| {
            let body = words.join(" ");
            if numbered {
                format!("{}. {}.", n, body)
            } else {
                format!("{}.", body)
            }
        },
    );
    (prop::collection::vec(sentence, 0..40), any::<bool>())
        .prop_map(|(sentences, one_line)| sentences.join(if one_line { " " } else { "\n" }))
}

proptest! {
    /// Property: the pipeline never panics on arbitrary input
    #[test]
    fn analysis_no_panic(text in "\\PC*") {
        let _ = AnalysisEngine::new().analyze_text(&text);
    }

    /// Property: identical input gives identical output
    #[test]
    fn analysis_is_deterministic(text in legal_text()) {
        let engine = AnalysisEngine::new();
        prop_assert_eq!(engine.analyze_text(&text), engine.analyze_text(&text));
    }

    /// Property: red flags are ordered high to low
    #[test]
    fn red_flags_sorted_by_severity(text in legal_text()) {
        let result = AnalysisEngine::new().analyze_text(&text);
        for pair in result.red_flags.windows(2) {
            prop_assert!(pair[0].severity.rank() >= pair[1].severity.rank());
        }
    }

    /// Property: no term is reported twice, whatever its case
    #[test]
    fn red_flag_terms_unique(text in legal_text()) {
        let result = AnalysisEngine::new().analyze_text(&text);
        let mut terms: Vec<String> = result.red_flags.iter().map(|f| f.term.to_lowercase()).collect();
        let before = terms.len();
        terms.sort();
        terms.dedup();
        prop_assert_eq!(before, terms.len());
    }

    /// Property: every context is a bounded verbatim slice of the analyzed text containing its term
    #[test]
    fn red_flag_contexts_are_verbatim(text in "\\PC{0,600}") {
        let engine = AnalysisEngine::new();
        let document = engine.document(&text, "prop");
        let result = engine.analyze(&document);
        for flag in &result.red_flags {
            prop_assert!(document.text().contains(&flag.context));
            prop_assert!(flag.context.to_ascii_lowercase().contains(&flag.term.to_ascii_lowercase()));
            prop_assert!(flag.context.chars().count() <= 2 * CONTEXT_WINDOW + flag.term.chars().count());
            prop_assert!(!flag.description.is_empty());
            prop_assert!(!flag.suggestion.is_empty());
        }
    }

    /// Property: sections are strictly ascending, positive and never 8 or 9
    #[test]
    fn sections_ordered_and_filtered(text in legal_text()) {
        let result = AnalysisEngine::new().analyze_text(&text);
        for pair in result.summary.windows(2) {
            prop_assert!(pair[0].number < pair[1].number);
        }
        for section in &result.summary {
            prop_assert!(section.number > 0);
            prop_assert!(section.number != 8 && section.number != 9);
            prop_assert!(section.content.ends_with('.'));
        }
    }

    /// Property: rating stays in [1, 10] on a half-point grid
    #[test]
    fn rating_bounded_and_stepped(text in legal_text()) {
        let score = AnalysisEngine::new().analyze_text(&text).rating.score;
        prop_assert!((1.0..=10.0).contains(&score));
        prop_assert_eq!((score * 2.0).fract(), 0.0);
    }

    /// Property: checklist = one item per high/medium flag, then at most three key points
    #[test]
    fn checklist_composition(text in legal_text()) {
        let result = AnalysisEngine::new().analyze_text(&text);
        let serious = result
            .red_flags
            .iter()
            .filter(|f| f.severity >= Severity::Medium)
            .count();
        let expected_points = result.key_points.len().min(3);

        prop_assert_eq!(result.consent_checklist.len(), serious + expected_points);
        for (i, item) in result.consent_checklist.iter().enumerate() {
            prop_assert_eq!(item.is_red_flag, i < serious);
            if item.is_red_flag {
                prop_assert!(item.severity.is_some() && item.context.is_some());
            } else {
                prop_assert!(item.text.starts_with("I understand: "));
            }
        }
    }
}

#[test]
fn test_rating_counts_each_term_once() {
    let text = "Service renews by automatic renewal. A penalty applies for late payment. \
                The penalty doubles after thirty days. Your subscription is billed monthly.";
    let result = AnalysisEngine::new().analyze_text(text);

    // -2 automatic renewal, -2 penalty (once), -0.5 subscription
    assert_eq!(result.rating.score, 5.5);
    assert_eq!(result.rating.color_tag, "#ff6348");
}

#[test]
fn test_classification_feeds_pipeline() {
    let result = AnalysisEngine::new().analyze_text(
        "Privacy Policy. Personal information we collect includes your email address.",
    );
    assert_eq!(result.document_type, DocumentType::Privacy);
    assert_eq!(result.key_points[0], "Personal information collection");
}
