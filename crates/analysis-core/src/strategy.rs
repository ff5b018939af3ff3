//! The analysis capability shared by the local and remote implementations

use analysis_engine::AnalysisEngine;
use async_trait::async_trait;
use shared_types::{AnalysisResult, Document};

use crate::error::AnalysisError;

/// Something that can turn a [`Document`] into an [`AnalysisResult`]
#[async_trait]
pub trait AnalysisStrategy: Send + Sync {
    async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError>;

    /// Get the name of this strategy
    fn name(&self) -> &str;
}

/// Rule-based analysis with the in-process engine. Never fails.
#[derive(Default)]
pub struct LocalStrategy {
    engine: AnalysisEngine,
}

impl LocalStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStrategy for LocalStrategy {
    async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.engine.analyze(document))
    }

    fn name(&self) -> &str {
        "local"
    }
}
