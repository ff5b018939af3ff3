//! Remote analysis over an OpenAI-compatible chat-completions endpoint
//!
//! One POST per document, no retries and no streaming. The request is bounded
//! by the configured timeout. The rating is always computed locally.

pub mod prompt;
pub mod response;

use analysis_engine::rules::{rating, red_flags};
use async_trait::async_trait;
use reqwest::Client;
use shared_types::{AnalysisResult, Document};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, RemoteError};
use crate::strategy::AnalysisStrategy;

pub use response::{parse_content, ChatRequest, ChatResponse, RemoteAnalysis};

pub struct RemoteStrategy {
    client: Client,
    config: AnalyzerConfig,
}

impl RemoteStrategy {
    pub fn new(config: AnalyzerConfig) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Send the document and parse the model's answer
    pub async fn request_analysis(&self, document: &Document) -> Result<RemoteAnalysis, RemoteError> {
        let api_key = self
            .config
            .usable_api_key()
            .ok_or(RemoteError::NotConfigured)?;

        let request = ChatRequest::new(
            &self.config,
            prompt::SYSTEM_PROMPT,
            prompt::build_prompt(document, self.config.max_text_length),
        );

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "sending remote analysis request");
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&body)?;
        parse_content(&chat.into_content()?)
    }
}

#[async_trait]
impl AnalysisStrategy for RemoteStrategy {
    async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError> {
        let remote = self.request_analysis(document).await?;

        let local_flags = red_flags::detect(document.text());
        let contract_rating =
            rating::rate(document.text(), &local_flags, document.document_type());

        let result = remote.into_result(document, contract_rating);
        debug!(
            sections = result.summary.len(),
            red_flags = result.red_flags.len(),
            "remote analysis complete"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
