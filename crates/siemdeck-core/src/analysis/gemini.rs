//! Gemini `generateContent` backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::client::AnalysisBackend;
use super::types::AnalysisError;
use crate::config::AiConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Non-streaming calls to the Google generative language API
pub struct GeminiBackend {
    http: Client,
    url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self, AnalysisError> {
        let http = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: generate_url(&config.endpoint, &config.model),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl AnalysisBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        });

        debug!("Gemini call to model: {}", self.model);
        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request failed");
            return Err(parse_error(status.as_u16(), &text));
        }

        let json: Value = response.json().await?;
        extract_text(&json)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

/// Concatenate the text parts of the first candidate
fn extract_text(json: &Value) -> Result<String, AnalysisError> {
    let parts = json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .ok_or(AnalysisError::NoContent)?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(AnalysisError::NoContent);
    }
    Ok(text)
}

/// Map an error response body (`{"error": {"message": ...}}`) to an error
fn parse_error(status: u16, body: &str) -> AnalysisError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    if message.contains("API key not valid") {
        return AnalysisError::InvalidApiKey(message);
    }
    AnalysisError::Http { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_url() {
        assert_eq!(
            generate_url("https://example.test/v1beta/", "gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let reply = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "### Meaning\n"}, {"text": "- check logs"}]
                }
            }]
        });
        assert_eq!(extract_text(&reply).unwrap(), "### Meaning\n- check logs");
    }

    #[test]
    fn test_extract_text_missing_is_no_content() {
        assert!(matches!(
            extract_text(&json!({"candidates": []})),
            Err(AnalysisError::NoContent)
        ));
        let blocked = json!({"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]});
        assert!(matches!(
            extract_text(&blocked),
            Err(AnalysisError::NoContent)
        ));
    }

    #[test]
    fn test_parse_error_invalid_key() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            parse_error(400, body),
            AnalysisError::InvalidApiKey(m) if m.starts_with("API key not valid")
        ));
    }

    #[test]
    fn test_parse_error_falls_back_to_body() {
        match parse_error(502, "Bad Gateway\n") {
            AnalysisError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
