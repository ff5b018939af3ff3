//! Caller-facing entry point: input validation and the remote-then-local chain

use analysis_engine::AnalysisEngine;
use shared_types::{AnalysisResult, Document, SourceRecord};
use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::remote::RemoteStrategy;
use crate::source::to_document;
use crate::strategy::{AnalysisStrategy, LocalStrategy};

pub struct Analyzer {
    config: AnalyzerConfig,
    engine: AnalysisEngine,
    local: LocalStrategy,
    remote: Option<RemoteStrategy>,
}

impl Analyzer {
    /// Validate the configuration and set up the strategies it enables
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        let remote = if config.remote_enabled() {
            info!(model = %config.model, "remote analysis enabled");
            Some(RemoteStrategy::new(config.clone())?)
        } else {
            info!("API key not configured, using local analysis only");
            None
        };

        Ok(Self {
            config,
            engine: AnalysisEngine::new(),
            local: LocalStrategy::new(),
            remote,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Names of the strategies tried, in order
    pub fn strategy_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        if let Some(remote) = &self.remote {
            names.push(remote.name());
        }
        if self.remote.is_none() || self.config.fallback_to_local {
            names.push(self.local.name());
        }
        names
    }

    /// Normalize, classify and length-check an input record. Text must be longer than `min_text_length`.
    pub fn document(&self, record: &SourceRecord) -> Result<Document, AnalysisError> {
        let document = to_document(&self.engine, record);
        let actual = document.text().chars().count();
        if actual <= self.config.min_text_length {
            return Err(AnalysisError::EmptyInput {
                min: self.config.min_text_length,
                actual,
            });
        }
        Ok(document)
    }

    pub async fn analyze_record(&self, record: &SourceRecord) -> Result<AnalysisResult, AnalysisError> {
        let document = self.document(record)?;
        self.analyze(&document).await
    }

    /// Run the strategy chain on a prepared document.
    ///
    /// Remote failures fall through to the local engine when `fallback_to_local`
    /// is set; otherwise they are returned to the caller.
    pub async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError> {
        if let Some(remote) = &self.remote {
            match remote.analyze(document).await {
                Ok(result) => return Ok(result),
                Err(AnalysisError::Remote(err)) if self.config.fallback_to_local => {
                    warn!(error = %err, "remote analysis failed, falling back to local analysis");
                }
                Err(err) => return Err(err),
            }
        }

        self.local.analyze(document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AnalysisSource, DocumentType};

    fn record(text: &str) -> SourceRecord {
        SourceRecord {
            text: text.to_string(),
            ..SourceRecord::default()
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalyzerConfig {
            temperature: -1.0,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(Analyzer::new(config), Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_short_input_is_rejected() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let err = analyzer.document(&record("   too short   ")).unwrap_err();
        match err {
            AnalysisError::EmptyInput { min, actual } => {
                assert_eq!(min, 50);
                assert_eq!(actual, 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_length_must_exceed_minimum() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();

        let err = analyzer.document(&record(&"a".repeat(50))).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput { min: 50, actual: 50 }));

        let document = analyzer.document(&record(&"a".repeat(51))).unwrap();
        assert_eq!(document.text().chars().count(), 51);
    }

    #[test]
    fn test_local_only_without_key() {
        let config = AnalyzerConfig {
            enable_remote_analysis: true,
            api_key: None,
            ..AnalyzerConfig::default()
        };
        let analyzer = Analyzer::new(config).unwrap();
        assert_eq!(analyzer.strategy_names(), vec!["local"]);
    }

    #[test]
    fn test_chain_order_with_key() {
        let config = AnalyzerConfig {
            enable_remote_analysis: true,
            api_key: Some("sk-test".to_string()),
            ..AnalyzerConfig::default()
        };
        assert_eq!(Analyzer::new(config.clone()).unwrap().strategy_names(), vec!["remote", "local"]);

        let config = AnalyzerConfig {
            fallback_to_local: false,
            ..config
        };
        assert_eq!(Analyzer::new(config).unwrap().strategy_names(), vec!["remote"]);
    }

    #[tokio::test]
    async fn test_analyze_record_locally() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let result = analyzer
            .analyze_record(&record(
                "1. Rent. Tenant shall pay rent of $1000 monthly. 2. Deposit. A security deposit of $500 is required.",
            ))
            .await
            .unwrap();
        assert_eq!(result.source, AnalysisSource::Local);
        assert_eq!(result.document_type, DocumentType::Lease);
    }
}
