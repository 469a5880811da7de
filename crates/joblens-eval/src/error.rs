//! Error types for the evaluation pipeline

use crate::embedding::EmbeddingError;
use thiserror::Error;

/// Errors that can occur while loading or scoring extraction output
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed JSON in an input file
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// Top-level value has the wrong shape for the pipeline
    #[error("Unexpected input shape: {0}")]
    Shape(String),

    /// The similarity scorer was given nothing to score
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Embedding computation failed
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// I/O failure other than a missing file
    #[error("I/O error: {0}")]
    Io(String),
}
