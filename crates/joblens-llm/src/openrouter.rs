//! OpenRouter chat-completions client for PDF extraction
//!
//! # Features
//!
//! - Async HTTP communication with the OpenRouter API
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! The PDF is attached to the chat request as a
//! `data:application/pdf;base64,…` URL alongside the extraction prompt;
//! the model's reply is the JSON text describing the postings.

use crate::prompt;
use crate::LlmError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default OpenRouter chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default extraction model
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Default timeout for extraction requests (scanned PDFs are slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// OpenRouter API provider for job-posting extraction
pub struct OpenRouterProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentPart<'a> {
    Text { text: &'a str },
    File { file: FilePart<'a> },
}

#[derive(Serialize)]
struct FilePart<'a> {
    filename: &'a str,
    file_data: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Create a new provider with an explicit API key.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider reading the API key from [`API_KEY_ENV`].
    pub fn from_env(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| LlmError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(endpoint, model, api_key))
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Extract job postings from a scanned PDF.
    ///
    /// Returns the model's JSON text (one array of posting objects),
    /// with any markdown code fences already stripped. Writing it to
    /// disk is the caller's business.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be read, the API rejects the
    /// key, communication fails past the retry budget, or the response
    /// carries no content.
    pub async fn extract_postings(&self, pdf_path: &Path) -> Result<String, LlmError> {
        let bytes = fs::read(pdf_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LlmError::FileNotFound(pdf_path.display().to_string()),
            _ => LlmError::Io(e.to_string()),
        })?;

        let data_url = format!("data:application/pdf;base64,{}", STANDARD.encode(&bytes));
        let filename = pdf_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf");

        info!(
            "Requesting extraction of {} ({} bytes) with model '{}'",
            filename,
            bytes.len(),
            self.model
        );

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: prompt::extraction_prompt(),
                    },
                    ContentPart::File {
                        file: FilePart {
                            filename,
                            file_data: &data_url,
                        },
                    },
                ],
            }],
        };

        let content = self.send_with_retries(&request_body).await?;

        debug!("Extraction response length: {} chars", content.len());

        let cleaned = strip_code_fences(&content);
        if serde_json::from_str::<serde_json::Value>(&cleaned).is_err() {
            warn!("Model did not return clean JSON; passing raw text through");
        }

        Ok(cleaned)
    }

    async fn send_with_retries(&self, request_body: &ChatRequest<'_>) -> Result<String, LlmError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(request_body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        let parsed = response.json::<ChatResponse>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;

                        return parsed
                            .choices
                            .into_iter()
                            .next()
                            .and_then(|choice| choice.message.content)
                            .filter(|content| !content.is_empty())
                            .ok_or(LlmError::MissingContent);
                    } else if response.status() == reqwest::StatusCode::UNAUTHORIZED {
                        return Err(LlmError::Unauthorized(API_KEY_ENV.to_string()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

/// Strip a markdown code fence wrapper, if present.
///
/// Models sometimes wrap the JSON array in ```` ```json … ``` ````
/// blocks; the evaluation pipeline wants the bare text.
pub fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }

        // Skip the opening line (```json or ```) and the closing ```.
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        lines[1..end].join("\n").trim().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_creation() {
        let provider = OpenRouterProvider::new(DEFAULT_ENDPOINT, "deepseek/deepseek-chat", "key");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "deepseek/deepseek-chat");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_with_max_retries() {
        let provider =
            OpenRouterProvider::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, "key").with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatRequest {
            model: "deepseek/deepseek-chat",
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: "extract" },
                    ContentPart::File {
                        file: FilePart {
                            filename: "PDF7.pdf",
                            file_data: "data:application/pdf;base64,AAAA",
                        },
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "deepseek/deepseek-chat");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"][0]["type"], "text");
        assert_eq!(value["messages"][0]["content"][1]["type"], "file");
        assert_eq!(
            value["messages"][0]["content"][1]["file"]["filename"],
            "PDF7.pdf"
        );
    }

    #[test]
    fn test_response_content_extraction() {
        let body = json!({
            "choices": [{"message": {"content": "[{\"Company name\": \"Acme\"}]"}}]
        });
        let parsed: ChatResponse = serde_json::from_value(body).unwrap();
        let content = parsed.choices[0].message.content.as_deref().unwrap();
        assert!(content.contains("Acme"));
    }

    #[test]
    fn test_response_without_choices() {
        let parsed: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_strip_fences_plain_json() {
        let text = r#"[{"a": 1}]"#;
        assert_eq!(strip_code_fences(text), text);
    }

    #[test]
    fn test_strip_fences_json_block() {
        let response = "```json\n[{\"a\": 1}]\n```";
        assert_eq!(strip_code_fences(response), r#"[{"a": 1}]"#);
    }

    #[test]
    fn test_strip_fences_without_language() {
        let response = "```\n[{\"a\": 1}]\n```";
        assert_eq!(strip_code_fences(response), r#"[{"a": 1}]"#);
    }

    #[test]
    fn test_strip_fences_unterminated_block() {
        let response = "```json\n[{\"a\": 1}]";
        assert_eq!(strip_code_fences(response), r#"[{"a": 1}]"#);
    }

    #[tokio::test]
    async fn test_missing_pdf_is_file_not_found() {
        let provider = OpenRouterProvider::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, "key");
        let result = provider
            .extract_postings(Path::new("/nonexistent/input.pdf"))
            .await;
        assert!(matches!(result, Err(LlmError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        // Invalid port forces a request failure without network access.
        let provider = OpenRouterProvider::new("http://localhost:99999", DEFAULT_MODEL, "key")
            .with_max_retries(1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"%PDF-1.4 stub").unwrap();

        let result = provider.extract_postings(file.path()).await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }
}
