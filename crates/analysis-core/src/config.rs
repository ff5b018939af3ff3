//! Analyzer configuration
//!
//! Loaded from a TOML file, from `CLAUSE_SCAN_*` environment variables, or
//! both (environment wins). Every field has a default, so an empty file is a
//! valid configuration.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
/// Key shipped in sample configs; treated as "no key"
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";
const MAX_TEMPERATURE: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Characters of document text sent to the remote service
    pub max_text_length: usize,
    /// Shortest document (in characters) worth analyzing
    pub min_text_length: usize,
    pub enable_remote_analysis: bool,
    /// Fall back to the local engine when the remote call fails
    pub fallback_to_local: bool,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub endpoint: String,
    /// Remote request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_text_length: 8000,
            min_text_length: 50,
            enable_remote_analysis: false,
            fallback_to_local: true,
            model: "gpt-4".to_string(),
            temperature: 0.3,
            max_tokens: 2000,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, AnalysisError> {
        toml::from_str(s)
            .map_err(|e| AnalysisError::Config(format!("Failed to parse TOML configuration: {}", e)))
    }

    /// Defaults overridden by environment variables
    ///
    /// Expected variables:
    /// - CLAUSE_SCAN_MAX_TEXT_LENGTH, CLAUSE_SCAN_MIN_TEXT_LENGTH
    /// - CLAUSE_SCAN_ENABLE_REMOTE, CLAUSE_SCAN_FALLBACK_TO_LOCAL: "true"/"1" or "false"/"0"
    /// - CLAUSE_SCAN_MODEL, CLAUSE_SCAN_TEMPERATURE, CLAUSE_SCAN_MAX_TOKENS
    /// - CLAUSE_SCAN_ENDPOINT, CLAUSE_SCAN_TIMEOUT_MS
    /// - OPENAI_API_KEY
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source. Unparseable values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).and_then(|v| match v.trim().to_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            })
        };

        if let Some(v) = parse_var(&lookup, "CLAUSE_SCAN_MAX_TEXT_LENGTH") {
            self.max_text_length = v;
        }
        if let Some(v) = parse_var(&lookup, "CLAUSE_SCAN_MIN_TEXT_LENGTH") {
            self.min_text_length = v;
        }
        if let Some(v) = flag("CLAUSE_SCAN_ENABLE_REMOTE") {
            self.enable_remote_analysis = v;
        }
        if let Some(v) = flag("CLAUSE_SCAN_FALLBACK_TO_LOCAL") {
            self.fallback_to_local = v;
        }
        if let Some(v) = lookup("CLAUSE_SCAN_MODEL") {
            self.model = v;
        }
        if let Some(v) = parse_var(&lookup, "CLAUSE_SCAN_TEMPERATURE") {
            self.temperature = v;
        }
        if let Some(v) = parse_var(&lookup, "CLAUSE_SCAN_MAX_TOKENS") {
            self.max_tokens = v;
        }
        if let Some(v) = lookup("OPENAI_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("CLAUSE_SCAN_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = parse_var(&lookup, "CLAUSE_SCAN_TIMEOUT_MS") {
            self.timeout_ms = v;
        }
        self
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_text_length == 0 {
            return Err(AnalysisError::Config("max_text_length must be greater than 0".into()));
        }
        if self.min_text_length == 0 {
            return Err(AnalysisError::Config("min_text_length must be greater than 0".into()));
        }
        if self.max_tokens == 0 {
            return Err(AnalysisError::Config("max_tokens must be greater than 0".into()));
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(AnalysisError::Config(format!(
                "temperature must be between 0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            )));
        }
        Ok(())
    }

    /// The API key, unless it is missing, blank or the placeholder
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }

    /// Remote analysis is attempted only when enabled and a real key is present
    pub fn remote_enabled(&self) -> bool {
        self.enable_remote_analysis && self.usable_api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}
