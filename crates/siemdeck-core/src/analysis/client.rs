//! Analysis client
//!
//! The dashboard talks to [`AnalysisClient`]; which backend (if any) sits
//! behind it is decided once at startup from the configuration.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::gemini::GeminiBackend;
use super::prompt::alert_prompt;
use super::types::AnalysisError;
use crate::config::Config;

/// A text-generation endpoint
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Generate a free-text reply for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;

    /// Name shown in the status bar
    fn name(&self) -> &str;
}

/// Entry point for alert analysis
#[derive(Clone)]
pub enum AnalysisClient {
    /// No credential configured; every call reports `Unavailable`
    Disabled,
    Enabled(Arc<dyn AnalysisBackend>),
}

impl AnalysisClient {
    /// Gemini client when a key is present in the environment, otherwise disabled
    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        match config.api_key() {
            Some(key) => {
                info!(model = %config.ai.model, "AI analysis enabled");
                let backend = GeminiBackend::new(&config.ai, key)?;
                Ok(Self::Enabled(Arc::new(backend)))
            }
            None => {
                info!(
                    env = %config.ai.api_key_env,
                    "No API key in environment, AI analysis disabled"
                );
                Ok(Self::Disabled)
            }
        }
    }

    pub fn with_backend(backend: impl AnalysisBackend + 'static) -> Self {
        Self::Enabled(Arc::new(backend))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    pub fn backend_name(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Enabled(backend) => Some(backend.name()),
        }
    }

    /// Analyze one alert. Trims the reply; an empty reply is `NoContent`.
    pub async fn analyze(&self, title: &str, description: &str) -> Result<String, AnalysisError> {
        let backend = match self {
            Self::Disabled => return Err(AnalysisError::Unavailable),
            Self::Enabled(backend) => backend,
        };

        debug!(title, "Requesting alert analysis");
        let text = backend.generate(&alert_prompt(title, description)).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::NoContent);
        }
        Ok(text.to_string())
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => f.write_str("AnalysisClient::Disabled"),
            Self::Enabled(backend) => write!(f, "AnalysisClient::Enabled({})", backend.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AnalysisBackend for Recording {
        async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_disabled_is_unavailable() {
        let result = AnalysisClient::Disabled.analyze("t", "d").await;
        assert!(matches!(result, Err(AnalysisError::Unavailable)));
    }

    #[tokio::test]
    async fn test_enabled_sends_prompt_and_trims() {
        let backend = Arc::new(Recording {
            reply: "\n  analysis text  \n".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let client = AnalysisClient::Enabled(backend.clone());

        let text = client.analyze("Title", "Desc").await.unwrap();
        assert_eq!(text, "analysis text");

        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Alert Title: \"Title\""));
    }

    #[tokio::test]
    async fn test_blank_reply_is_no_content() {
        let client = AnalysisClient::with_backend(Recording {
            reply: "   ".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        assert!(matches!(
            client.analyze("t", "d").await,
            Err(AnalysisError::NoContent)
        ));
    }

    #[test]
    fn test_from_config_without_key_is_disabled() {
        let mut config = Config::default();
        config.ai.api_key_env = "SIEMDECK_TEST_UNSET_KEY_VAR".to_string();
        // The fallback variable may be set on the machine running the tests
        if std::env::var(crate::config::FALLBACK_API_KEY_ENV).is_ok() {
            return;
        }
        let client = AnalysisClient::from_config(&config).unwrap();
        assert!(!client.is_enabled());
        assert_eq!(client.backend_name(), None);
    }
}
