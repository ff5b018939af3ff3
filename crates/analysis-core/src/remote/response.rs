//! Chat-completion wire types and conversion of the model's JSON into an [`AnalysisResult`]

use std::collections::HashSet;

use analysis_engine::rules::red_flags::{describe, suggest};
use analysis_engine::segment::publish;
use serde::{Deserialize, Serialize};
use shared_types::{
    AnalysisResult, AnalysisSource, ConsentItem, ContractRating, Document, RedFlag, Section,
    Severity,
};

use crate::config::AnalyzerConfig;
use crate::error::RemoteError;

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(config: &AnalyzerConfig, system: &str, prompt: String) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice
    pub fn into_content(self) -> Result<String, RemoteError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(RemoteError::MissingContent)
    }
}

// ============================================================================
// Analysis payload
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteAnalysis {
    pub summary: Vec<RemoteSection>,
    pub key_points: Vec<String>,
    pub red_flags: Vec<RemoteRedFlag>,
    pub consent_checklist: Vec<RemoteConsentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteSection {
    pub number: u32,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteRedFlag {
    pub term: String,
    pub description: String,
    pub severity: String,
    pub context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteConsentItem {
    pub text: String,
    pub is_red_flag: bool,
}

/// Strip a surrounding ``` or ```json fence, if any
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse the model's message content
pub fn parse_content(content: &str) -> Result<RemoteAnalysis, RemoteError> {
    Ok(serde_json::from_str(strip_code_fence(content))?)
}

impl RemoteAnalysis {
    /// Shape the payload like a local result. Rating and type come from the caller.
    pub fn into_result(self, document: &Document, rating: ContractRating) -> AnalysisResult {
        let mut summary: Vec<Section> = self
            .summary
            .into_iter()
            .filter(|s| s.number > 0 && !s.content.trim().is_empty())
            .map(|s| Section {
                number: s.number,
                content: s.content.trim().to_string(),
            })
            .collect();
        summary.sort_by_key(|s| s.number);
        summary.dedup_by_key(|s| s.number);

        let mut seen = HashSet::new();
        let mut red_flags: Vec<RedFlag> = self
            .red_flags
            .into_iter()
            .filter(|f| !f.term.trim().is_empty())
            .filter(|f| seen.insert(f.term.trim().to_lowercase()))
            .map(into_red_flag)
            .collect();
        red_flags.sort_by(|a, b| b.severity.cmp(&a.severity));

        let consent_checklist = self
            .consent_checklist
            .into_iter()
            .filter(|item| !item.text.trim().is_empty())
            .map(|item| ConsentItem {
                text: item.text,
                is_red_flag: item.is_red_flag,
                severity: None,
                context: None,
            })
            .collect();

        AnalysisResult {
            summary: publish(summary),
            key_points: self.key_points,
            red_flags,
            consent_checklist,
            document_type: document.document_type(),
            rating,
            source: AnalysisSource::Remote,
        }
    }
}

fn into_red_flag(remote: RemoteRedFlag) -> RedFlag {
    let term = remote.term.trim().to_string();
    let description = if remote.description.trim().is_empty() {
        describe(&term).to_string()
    } else {
        remote.description
    };
    RedFlag {
        suggestion: suggest(&term).to_string(),
        severity: Severity::from_label(&remote.severity),
        context: remote.context,
        description,
        term,
    }
}
