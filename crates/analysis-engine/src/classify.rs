//! Document type classification

use shared_types::DocumentType;

use crate::dictionary::{
    AGREEMENT_INDICATORS, LEASE_INDICATORS, PRIVACY_INDICATORS, TERMS_INDICATORS,
};
use crate::normalize::contains_any;

/// Classify text by indicator phrases. First matching tier wins; `General` otherwise.
pub fn classify(text: &str) -> DocumentType {
    let tiers: [(&[&str], DocumentType); 4] = [
        (LEASE_INDICATORS, DocumentType::Lease),
        (TERMS_INDICATORS, DocumentType::Terms),
        (PRIVACY_INDICATORS, DocumentType::Privacy),
        (AGREEMENT_INDICATORS, DocumentType::Agreement),
    ];

    tiers
        .iter()
        .find(|(indicators, _)| contains_any(text, indicators))
        .map(|(_, document_type)| *document_type)
        .unwrap_or_default()
}
