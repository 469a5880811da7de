//! joblens Extraction Layer
//!
//! Client for the LLM API that turns scanned job-posting PDFs into
//! structured JSON.
//!
//! # Architecture
//!
//! The evaluation core never calls this crate; it only consumes the
//! JSON files the extraction writes. [`OpenRouterProvider`] sends a PDF
//! (as a base64 data URL) plus the extraction prompt to OpenRouter's
//! chat-completions API and hands back the model's raw JSON text with
//! markdown code fences stripped.
//!
//! # Examples
//!
//! ```no_run
//! use joblens_llm::OpenRouterProvider;
//!
//! # async fn run() -> Result<(), joblens_llm::LlmError> {
//! let provider = OpenRouterProvider::from_env(
//!     joblens_llm::openrouter::DEFAULT_ENDPOINT,
//!     "deepseek/deepseek-chat",
//! )?;
//! let json_text = provider.extract_postings("input/PDF7.pdf".as_ref()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod openrouter;
pub mod prompt;

use thiserror::Error;

pub use openrouter::OpenRouterProvider;

/// Errors that can occur while talking to the extraction API
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The API rejected the key
    #[error("API key rejected (HTTP 401): check {0}")]
    Unauthorized(String),

    /// Response body did not parse as the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response parsed but carried no message content
    #[error("Response carried no content")]
    MissingContent,

    /// PDF file does not exist
    #[error("PDF file not found: {0}")]
    FileNotFound(String),

    /// API key environment variable is unset
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    /// Other I/O failure while reading the PDF
    #[error("I/O error: {0}")]
    Io(String),
}
