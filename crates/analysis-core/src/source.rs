//! Input records from text-extraction collaborators

use analysis_engine::{AnalysisEngine, UNTITLED_DOCUMENT};
use shared_types::{Document, SourceRecord};

/// First candidate that is non-empty after trimming
pub fn first_non_empty<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .map(str::trim)
        .find(|c| !c.is_empty())
}

/// Display label of a record: its title, else its URL, else a fixed placeholder
pub fn source_label(record: &SourceRecord) -> &str {
    first_non_empty(&[record.title.as_str(), record.url.as_str()]).unwrap_or(UNTITLED_DOCUMENT)
}

/// Normalize and classify a record. A type declared by the collaborator is kept as is.
pub fn to_document(engine: &AnalysisEngine, record: &SourceRecord) -> Document {
    engine.prepare(&record.text, record.document_type, source_label(record))
}
