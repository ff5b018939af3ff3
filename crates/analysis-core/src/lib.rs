//! Legal-document analysis service layer
//!
//! Wraps the local [`analysis_engine::AnalysisEngine`] and an optional remote
//! chat-completion strategy behind one [`Analyzer`]:
//!
//! - [`config`]: TOML and environment configuration
//! - [`source`]: input records to classified documents
//! - [`strategy`]: the `AnalysisStrategy` capability and the local strategy
//! - [`remote`]: prompt, request and response handling for the remote strategy
//! - [`analyzer`]: length validation and the remote-then-local fallback chain

pub mod analyzer;
pub mod config;
pub mod error;
pub mod remote;
pub mod source;
pub mod strategy;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, RemoteError};
pub use remote::RemoteStrategy;
pub use strategy::{AnalysisStrategy, LocalStrategy};
