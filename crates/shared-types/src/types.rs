use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kind of legal document being analyzed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Lease,
    Terms,
    Privacy,
    Agreement,
    #[default]
    General,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Lease,
        DocumentType::Terms,
        DocumentType::Privacy,
        DocumentType::Agreement,
        DocumentType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Lease => "lease",
            DocumentType::Terms => "terms",
            DocumentType::Privacy => "privacy",
            DocumentType::Agreement => "agreement",
            DocumentType::General => "general",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lease" => Ok(DocumentType::Lease),
            "terms" => Ok(DocumentType::Terms),
            "privacy" => Ok(DocumentType::Privacy),
            "agreement" => Ok(DocumentType::Agreement),
            "general" => Ok(DocumentType::General),
            other => Err(UnknownDocumentType(other.to_string())),
        }
    }
}

/// Risk tier of a red flag. Ordered so that `High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Lenient parse used for externally produced labels; anything unknown is `Low`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, normalized document. Built once; the type never changes afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    text: String,
    #[serde(rename = "type")]
    document_type: DocumentType,
    source_label: String,
}

impl Document {
    pub fn new(
        text: impl Into<String>,
        document_type: DocumentType,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            document_type,
            source_label: source_label.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}

/// Raw input handed over by a text-extraction collaborator (page, selection, clipboard, file)
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceRecord {
    pub text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// A risky term found in the document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RedFlag {
    pub term: String,
    pub context: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suggestion: String,
}

impl RedFlag {
    pub fn new(term: impl Into<String>, context: impl Into<String>, severity: Severity) -> Self {
        Self {
            term: term.into(),
            context: context.into(),
            severity,
            description: String::new(),
            suggestion: String::new(),
        }
    }
}

/// A numbered, summarized slice of the document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub number: u32,
    pub content: String,
}

/// One acknowledgement statement in the consent checklist
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentItem {
    pub text: String,
    #[serde(default)]
    pub is_red_flag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ConsentItem {
    pub fn red_flag(text: impl Into<String>, severity: Severity, context: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_red_flag: true,
            severity: Some(severity),
            context: Some(context.into()),
        }
    }

    pub fn key_point(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_red_flag: false,
            severity: None,
            context: None,
        }
    }
}

/// Overall fairness score, 1.0 to 10.0 in steps of 0.5
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRating {
    pub score: f64,
    pub description: String,
    pub color_tag: String,
}

/// Which strategy produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Local,
    Remote,
}

/// The complete analysis handed to the presentation layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: Vec<Section>,
    pub key_points: Vec<String>,
    pub red_flags: Vec<RedFlag>,
    pub consent_checklist: Vec<ConsentItem>,
    pub document_type: DocumentType,
    pub rating: ContractRating,
    pub source: AnalysisSource,
}
