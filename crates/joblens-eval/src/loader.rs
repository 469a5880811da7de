//! Load JSON extraction output from disk

use crate::error::EvalError;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Load a file's entries for the similarity pipeline.
///
/// A top-level array yields its elements; a single object (or any other
/// top-level value) wraps into a one-element list.
pub fn load_entries(path: &Path) -> Result<Vec<Value>, EvalError> {
    let value = read_json(path)?;
    match value {
        Value::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

/// Load a file's records for the consolidation pipeline, which requires
/// a top-level JSON array.
///
/// Anything else is an [`EvalError::Shape`]; callers at the pipeline
/// boundary convert it (and decode/not-found errors) into a "no data"
/// diagnostic instead of a fault.
pub fn load_records(path: &Path) -> Result<Vec<Value>, EvalError> {
    let value = read_json(path)?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(EvalError::Shape(format!(
            "expected a top-level JSON array in {}, found {}",
            path.display(),
            value_kind(&other)
        ))),
    }
}

fn read_json(path: &Path) -> Result<Value, EvalError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EvalError::FileNotFound(path.display().to_string()),
        _ => EvalError::Io(e.to_string()),
    })?;

    serde_json::from_str(&contents)
        .map_err(|e| EvalError::Decode(format!("{}: {}", path.display(), e)))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
