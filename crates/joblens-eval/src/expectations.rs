//! Expected field values, loaded from structured data
//!
//! Expectations live in a TOML file keyed by source identity:
//!
//! ```toml
//! [sources.PDF7]
//! "Company name" = "acme heavy industries"
//! "Job title" = "welder fitter"
//! ```
//!
//! Loading never fails hard: a missing file, a parse error, or a wrong
//! shape degrades to an empty expectation set with a diagnostic, so an
//! evaluation run always proceeds (every comparison simply skips).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Expected field values per source file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expectations {
    /// source id → (field name → expected string)
    #[serde(default)]
    sources: BTreeMap<String, BTreeMap<String, String>>,
}

impl Expectations {
    /// Load expectations from a TOML file, degrading to an empty set
    /// with a diagnostic on any failure.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "Could not read expectations file {}: {}; continuing with no expectations",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&contents) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    "Could not parse expectations file {}: {}; continuing with no expectations",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// The field→expected table for one source, if defined.
    pub fn for_source(&self, source_id: &str) -> Option<&BTreeMap<String, String>> {
        self.sources.get(source_id)
    }

    /// Whether no source has any expectations.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Number of sources with expectation tables.
    pub fn len(&self) -> usize {
        self.sources.len()
    }
}
