pub mod classify;
pub mod dictionary;
pub mod extractors;
pub mod normalize;
pub mod rules;
pub mod scoring;
pub mod segment;
pub mod synopsis;

use shared_types::{AnalysisResult, AnalysisSource, Document, DocumentType};
use tracing::debug;

/// Label given to documents that arrive without a title or URL
pub const UNTITLED_DOCUMENT: &str = "Untitled document";

/// AnalysisEngine entry point
///
/// Stateless; every stage reads only the static dictionaries, so one engine
/// can be shared freely across threads.
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw text and classify it
    pub fn document(&self, raw: &str, source_label: &str) -> Document {
        self.prepare(raw, None, source_label)
    }

    /// Normalize raw text, keeping a caller-declared type when there is one
    pub fn prepare(
        &self,
        raw: &str,
        declared_type: Option<DocumentType>,
        source_label: &str,
    ) -> Document {
        let text = normalize::normalize(raw);
        let document_type = declared_type.unwrap_or_else(|| classify::classify(&text));
        debug!(%document_type, chars = text.len(), "prepared document");
        Document::new(text, document_type, source_label)
    }

    /// Run the full local pipeline
    pub fn analyze(&self, document: &Document) -> AnalysisResult {
        let text = document.text();
        let document_type = document.document_type();

        let raw_flags = rules::red_flags::detect(text);
        debug!(count = raw_flags.len(), "detected red flags");

        let summary = segment::segment(text, document_type);
        debug!(count = summary.len(), "published sections");

        let key_points = rules::key_points::extract(text, document_type);
        debug!(count = key_points.len(), "extracted key points");

        let rating = rules::rating::rate(text, &raw_flags, document_type);
        debug!(score = rating.score, "rated document");

        let red_flags: Vec<_> = raw_flags
            .into_iter()
            .map(rules::red_flags::enrich)
            .collect();

        let consent_checklist = rules::checklist::synthesize(&key_points, &red_flags);
        debug!(count = consent_checklist.len(), "built consent checklist");

        AnalysisResult {
            summary,
            key_points,
            red_flags,
            consent_checklist,
            document_type,
            rating,
            source: AnalysisSource::Local,
        }
    }

    /// Analyze raw text (for testing)
    pub fn analyze_text(&self, raw: &str) -> AnalysisResult {
        self.analyze(&self.document(raw, UNTITLED_DOCUMENT))
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    #[test]
    fn test_numbered_lease() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze_text(
            "1. Rent. Tenant shall pay rent of $1000 monthly. 2. Deposit. A security deposit of $500 is required.",
        );

        assert_eq!(result.document_type, DocumentType::Lease);
        assert_eq!(result.source, AnalysisSource::Local);

        let numbers: Vec<u32> = result.summary.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);

        let security = result
            .red_flags
            .iter()
            .find(|f| f.term == "security")
            .expect("deposit clause should be flagged");
        assert_eq!(security.severity, Severity::Low);
        assert!(!security.suggestion.is_empty());

        assert_eq!(
            result.key_points,
            vec![
                "Monthly rent amount and payment terms".to_string(),
                "Security deposit requirements".to_string(),
            ]
        );
        assert_eq!(result.rating.score, 10.0);
    }

    #[test]
    fn test_nothing_to_report() {
        let result = AnalysisEngine::new().analyze_text("Hi there. See you soon.");
        assert!(result.summary.is_empty());
        assert!(result.key_points.is_empty());
        assert!(result.red_flags.is_empty());
        assert!(result.consent_checklist.is_empty());
        assert_eq!(result.document_type, DocumentType::General);
        assert_eq!(result.rating.score, 10.0);
        assert!(result.rating.description.starts_with("Excellent"));
    }

    #[test]
    fn test_declared_type_is_kept() {
        let engine = AnalysisEngine::new();
        let document = engine.prepare("A rental lease.", Some(DocumentType::Privacy), "t");
        assert_eq!(document.document_type(), DocumentType::Privacy);
        assert_eq!(engine.document("A rental lease.", "t").document_type(), DocumentType::Lease);
    }

    #[test]
    fn test_checklist_follows_enriched_flags() {
        let result = AnalysisEngine::new()
            .analyze_text("A penalty applies. Venue is New York. We may share your data.");
        let flagged: Vec<&str> = result
            .consent_checklist
            .iter()
            .filter(|item| item.is_red_flag)
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(
            flagged,
            vec![
                "I acknowledge potential penalties and financial consequences for non-compliance",
                "I understand data handling practices and how my information is processed",
            ]
        );
        assert!(result.red_flags.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = AnalysisEngine::default();
        let text = "Terms of Service. Automatic renewal applies. A late fee of $25 is charged.";
        assert_eq!(engine.analyze_text(text), engine.analyze_text(text));
    }
}
