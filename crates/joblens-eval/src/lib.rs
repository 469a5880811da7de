//! joblens Evaluation Core
//!
//! This crate contains the comparison pipeline used to evaluate
//! LLM-extracted job-posting data against reference values.
//!
//! ## Key Concepts
//!
//! - **Record**: one decoded JSON document (nested maps/sequences/scalars)
//! - **Flattening**: recursive reduction of a record to a path→value map,
//!   or to a value-only string for embedding
//! - **Consolidation**: aggregation of one field's values across many
//!   records into a single normalized string
//! - **Field matching**: token-set fuzzy comparison of consolidated
//!   values against expected strings, with a pass/fail threshold
//! - **Similarity scoring**: best-match cosine similarity between two
//!   sets of flattened entries, aggregated to a percentage
//!
//! ## Architecture
//!
//! The embedding model and the fuzzy-ratio function sit behind narrow
//! traits ([`EmbeddingModel`], [`FuzzyRatio`]) so they can be swapped or
//! mocked in tests without touching pipeline logic. Everything else is
//! pure functions over `serde_json::Value`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consolidate;
pub mod embedding;
pub mod error;
pub mod expectations;
pub mod fields;
pub mod flatten;
pub mod fuzzy;
pub mod loader;
pub mod matcher;
pub mod normalize;
pub mod similarity;

// Re-exports for convenience
pub use consolidate::consolidate;
pub use embedding::{cosine_similarity, EmbeddingModel, HashEmbeddingModel, DEFAULT_DIMENSION};
pub use error::EvalError;
pub use expectations::Expectations;
pub use fields::{FieldSet, DEFAULT_JOB_FIELDS};
pub use flatten::{entry_to_string, flatten};
pub use fuzzy::{token_set_ratio, FuzzyRatio, TokenSetRatio};
pub use loader::{load_entries, load_records};
pub use matcher::{
    compare_fields, field_match, FieldComparison, FieldOutcome, FieldReport, DEFAULT_THRESHOLD,
};
pub use normalize::{normalize, normalize_text};
pub use similarity::compute_max_pairwise_similarity;
