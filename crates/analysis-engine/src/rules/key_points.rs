//! Key-point extraction
//!
//! Three passes in discovery order: the pattern bank of the document's type,
//! the generic bank, then deadline dates.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::DocumentType;

use crate::extractors::extract_deadline_dates;

/// A clause pattern and the plain-language point it stands for
pub struct KeyPointPattern {
    pub pattern: Regex,
    pub description: &'static str,
}

fn bank(entries: &[(&str, &'static str)]) -> Vec<KeyPointPattern> {
    entries
        .iter()
        .map(|&(pattern, description)| KeyPointPattern {
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            description,
        })
        .collect()
}

lazy_static! {
    static ref LEASE_PATTERNS: Vec<KeyPointPattern> = bank(&[
        (r"rent[^.]*?(\$[\d,]+|\d+[^.]*dollars?)", "Monthly rent amount and payment terms"),
        (r"deposit[^.]*?(\$[\d,]+|\d+[^.]*dollars?)", "Security deposit requirements"),
        (r"lease[^.]*?term[^.]*?(\d+[^.]*months?|\d+[^.]*years?)", "Lease duration and renewal terms"),
        (r"maintenance[^.]*?(responsibilit|obligation|duty)", "Maintenance responsibilities"),
        (r"utilities[^.]*?(included|excluded|separate)", "Utility payment responsibilities"),
        (r"pet[^.]*?(allowed|prohibited|deposit|fee)", "Pet policy and restrictions"),
        (r"sublet[^.]*?(allowed|prohibited|permission)", "Subletting and assignment rights"),
    ]);

    static ref TERMS_PATTERNS: Vec<KeyPointPattern> = bank(&[
        (r"service[^.]*?(description|scope|provided)", "Service description and scope"),
        (r"user[^.]*?(obligation|responsibilit|restriction)", "User obligations and restrictions"),
        (r"liability[^.]*?(limit|exclusion|disclaimer)", "Limitation of liability"),
        (r"termination[^.]*?(account|service|agreement)", "Account termination conditions"),
        (r"intellectual[^.]*?(property|copyright|trademark)", "Intellectual property rights"),
        (r"acceptable[^.]*?(use|behavior|conduct)", "Acceptable use policy"),
    ]);

    static ref PRIVACY_PATTERNS: Vec<KeyPointPattern> = bank(&[
        (r"personal[^.]*?(information|data)[^.]*?(collect|gather|obtain)", "Personal information collection"),
        (r"data[^.]*?(sharing|disclosure|third[^.]*party)", "Data sharing and disclosure"),
        (r"cookies[^.]*?(use|track|store)", "Cookie usage and tracking"),
        (r"privacy[^.]*?(rights|control|access)", "Privacy rights and controls"),
        (r"data[^.]*?(retention|storage|deletion)", "Data retention and deletion"),
    ]);

    static ref AGREEMENT_PATTERNS: Vec<KeyPointPattern> = bank(&[
        (r"parties[^.]*?(agreement|contract)", "Contracting parties and their roles"),
        (r"consideration[^.]*?(\$[\d,]+|\d+[^.]*dollars?)", "Payment and consideration terms"),
        (r"performance[^.]*?(obligation|requirement|deliverable)", "Performance obligations"),
        (r"breach[^.]*?(remedy|damage|penalty)", "Breach and remedies"),
        (r"governing[^.]*?(law|jurisdiction|venue)", "Governing law and jurisdiction"),
    ]);

    static ref GENERIC_PATTERNS: Vec<KeyPointPattern> = bank(&[
        (r"payment[^.]*?(\$[\d,]+|\d+[^.]*dollars?)[^.]*?(due|monthly|annual)", "Payment terms and methods"),
        (r"refund[^.]*?(policy|condition|eligibility)", "Refund and cancellation policy"),
        (r"privacy[^.]*?(policy|protection|data)", "Privacy and data handling"),
        (r"dispute[^.]*?(resolution|arbitration|mediation)", "Dispute resolution process"),
        (r"automatic[^.]*?(renewal|extension|continuation)", "Automatic renewal terms"),
        (r"modification[^.]*?(amendment|change|update)", "Modification and amendment rights"),
        (r"force[^.]*?(majeure|circumstance|event)", "Force majeure and unforeseen circumstances"),
        (r"severability[^.]*?(clause|provision|invalidity)", "Severability and invalidity provisions"),
    ]);
}

/// Pattern bank run for a document type; `General` has none
pub fn type_patterns(document_type: DocumentType) -> &'static [KeyPointPattern] {
    match document_type {
        DocumentType::Lease => LEASE_PATTERNS.as_slice(),
        DocumentType::Terms => TERMS_PATTERNS.as_slice(),
        DocumentType::Privacy => PRIVACY_PATTERNS.as_slice(),
        DocumentType::Agreement => AGREEMENT_PATTERNS.as_slice(),
        DocumentType::General => &[],
    }
}

/// Prefix of the key points built from extracted dates
pub const DEADLINE_PREFIX: &str = "Important deadline: ";

/// Extract plain-language key points in discovery order
pub fn extract(text: &str, document_type: DocumentType) -> Vec<String> {
    let mut points: Vec<String> = type_patterns(document_type)
        .iter()
        .filter(|p| p.pattern.is_match(text))
        .map(|p| p.description.to_string())
        .collect();

    for generic in GENERIC_PATTERNS.iter() {
        if generic.pattern.is_match(text) && !points.iter().any(|p| p == generic.description) {
            points.push(generic.description.to_string());
        }
    }

    points.extend(
        extract_deadline_dates(text)
            .into_iter()
            .map(|date| format!("{}{}", DEADLINE_PREFIX, date)),
    );

    points
}
