//! Analysis errors and display outcomes

use thiserror::Error;

/// Shown when no credential is configured or the key was rejected
pub const UNAVAILABLE_MESSAGE: &str = "AI analysis is unavailable. Please ensure your API_KEY environment variable is correctly configured and valid.";

/// Credential help appended to [`UNAVAILABLE_MESSAGE`]
pub const API_KEY_HELP: &str = "For AI-powered insights, ensure the Gemini API key is configured in your environment variables as API_KEY (GEMINI_API_KEY is also accepted). If the key is not set or is invalid, analysis will be unavailable. This dashboard uses the Gemini API to provide explanations and suggestions for selected security alerts.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key configured")]
    Unavailable,

    #[error("the Gemini API key is not valid ({0})")]
    InvalidApiKey(String),

    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("No text content received from Gemini API")]
    NoContent,

    #[error("no response within {0}s")]
    TimedOut(u64),

    #[error("request cancelled")]
    Cancelled,
}

/// Result of one analysis request, classified for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// No usable credential; `message` includes the configuration help
    Unavailable { message: String },
    Failure { message: String },
    /// Raw model text, rendered through the formatter
    Success(String),
}

impl AnalysisOutcome {
    pub fn from_result(result: Result<String, AnalysisError>) -> Self {
        match result {
            Ok(text) if text.trim().is_empty() => Self::failure(&AnalysisError::NoContent),
            Ok(text) => Self::Success(text),
            Err(AnalysisError::Unavailable) => Self::Unavailable {
                message: format!("{}\n\n{}", UNAVAILABLE_MESSAGE, API_KEY_HELP),
            },
            Err(AnalysisError::InvalidApiKey(details)) => Self::Failure {
                message: format!(
                    "Error: The Gemini API key is not valid. Please check your configuration. (Details: {})",
                    details
                ),
            },
            Err(e) => Self::failure(&e),
        }
    }

    fn failure(error: &AnalysisError) -> Self {
        Self::Failure {
            message: format!(
                "Error generating AI analysis: {}. Please try again later.",
                error
            ),
        }
    }

    /// Text handed to the formatter
    pub fn text(&self) -> &str {
        match self {
            Self::Unavailable { message } | Self::Failure { message } => message,
            Self::Success(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_carries_help() {
        let outcome = AnalysisOutcome::from_result(Err(AnalysisError::Unavailable));
        match outcome {
            AnalysisOutcome::Unavailable { message } => {
                assert!(message.starts_with(UNAVAILABLE_MESSAGE));
                assert!(message.contains("GEMINI_API_KEY"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_empty_reply_is_no_content_failure() {
        let outcome = AnalysisOutcome::from_result(Ok("  \n".to_string()));
        assert!(matches!(
            &outcome,
            AnalysisOutcome::Failure { message } if message.contains("No text content received")
        ));
    }

    #[test]
    fn test_http_error_is_readable() {
        let outcome = AnalysisOutcome::from_result(Err(AnalysisError::Http {
            status: 503,
            message: "overloaded".to_string(),
        }));
        assert_eq!(
            outcome.text(),
            "Error generating AI analysis: API error 503: overloaded. Please try again later."
        );
    }

    #[test]
    fn test_rejected_key_is_failure() {
        let outcome =
            AnalysisOutcome::from_result(Err(AnalysisError::InvalidApiKey("API key not valid".to_string())));
        match outcome {
            AnalysisOutcome::Failure { message } => {
                assert!(message.starts_with("Error: The Gemini API key is not valid."));
                assert!(message.contains("(Details: API key not valid)"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_success_passes_text_through() {
        let outcome = AnalysisOutcome::from_result(Ok("### Meaning\n- step".to_string()));
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), "### Meaning\n- step");
    }
}
