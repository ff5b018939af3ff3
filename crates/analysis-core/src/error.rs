//! Error types for the analyzer

use thiserror::Error;

/// Caller-facing analysis errors
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Not enough text to analyze: {actual} characters, more than {min} required")]
    EmptyInput { min: usize, actual: usize },

    #[error("Remote analysis failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures of the remote strategy. All of them are recoverable by falling back to local analysis.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote service returned status {0}")]
    Status(u16),

    #[error("Failed to parse remote analysis: {0}")]
    Parse(String),

    #[error("Remote response has no message content")]
    MissingContent,

    #[error("Remote analysis is not configured")]
    NotConfigured,
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::EmptyInput { min: 50, actual: 3 };
        assert_eq!(
            err.to_string(),
            "Not enough text to analyze: 3 characters, more than 50 required"
        );

        let err: AnalysisError = RemoteError::Status(500).into();
        assert_eq!(
            err.to_string(),
            "Remote analysis failed: Remote service returned status 500"
        );
    }

    #[test]
    fn test_json_errors_become_parse_errors() {
        let err: RemoteError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, RemoteError::Parse(_)));
    }
}
