//! Compare consolidated field values against expected strings

use crate::fields::FieldSet;
use crate::fuzzy::FuzzyRatio;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Default pass/fail threshold for the fuzzy score (inclusive).
pub const DEFAULT_THRESHOLD: u32 = 50;

/// How a single field comparison turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    /// Score reached the threshold
    Passed,
    /// Score fell below the threshold
    Failed,
    /// No expectation was defined for the field — distinct from a pass
    Skipped,
}

/// Result of comparing one field.
///
/// `expected` and `actual` are the full, untruncated strings the
/// comparison used; display layers may shorten them, the comparison
/// never does.
#[derive(Debug, Clone, Serialize)]
pub struct FieldComparison {
    /// Field name
    pub field: String,
    /// Expected reference string, when one was defined
    pub expected: Option<String>,
    /// Consolidated value from the extraction output
    pub actual: String,
    /// Fuzzy score, absent when the comparison was skipped
    pub score: Option<u32>,
    /// Threshold the score was held against
    pub threshold: u32,
    /// Pass/fail/skip outcome
    pub outcome: FieldOutcome,
}

/// Per-field comparison results for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    /// One comparison per field in the field set, in set order
    pub comparisons: Vec<FieldComparison>,
}

impl FieldReport {
    /// Number of fields that passed.
    pub fn passed(&self) -> usize {
        self.count(FieldOutcome::Passed)
    }

    /// Number of fields that failed.
    pub fn failed(&self) -> usize {
        self.count(FieldOutcome::Failed)
    }

    /// Number of fields with no expectation defined.
    pub fn skipped(&self) -> usize {
        self.count(FieldOutcome::Skipped)
    }

    /// Whether any field comparison failed. Skips never count.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, outcome: FieldOutcome) -> usize {
        self.comparisons
            .iter()
            .filter(|c| c.outcome == outcome)
            .count()
    }
}

/// Compare one consolidated field value against its expected string.
///
/// An absent or empty expectation yields [`FieldOutcome::Skipped`];
/// otherwise the fuzzy score is computed and held against `threshold`
/// (inclusive: `score >= threshold` passes).
pub fn field_match(
    ratio: &dyn FuzzyRatio,
    field: &str,
    actual: &str,
    expected: Option<&str>,
    threshold: u32,
) -> FieldComparison {
    match expected {
        None => skipped(field, actual, threshold),
        Some(expected) if expected.is_empty() => skipped(field, actual, threshold),
        Some(expected) => {
            let score = ratio.ratio(actual, expected);
            let outcome = if score >= threshold {
                FieldOutcome::Passed
            } else {
                FieldOutcome::Failed
            };
            debug!("field '{}' scored {} against threshold {}", field, score, threshold);

            FieldComparison {
                field: field.to_string(),
                expected: Some(expected.to_string()),
                actual: actual.to_string(),
                score: Some(score),
                threshold,
                outcome,
            }
        }
    }
}

fn skipped(field: &str, actual: &str, threshold: u32) -> FieldComparison {
    FieldComparison {
        field: field.to_string(),
        expected: None,
        actual: actual.to_string(),
        score: None,
        threshold,
        outcome: FieldOutcome::Skipped,
    }
}

/// Evaluate every field in the set independently.
///
/// A field missing from the consolidated map compares as the empty
/// string; a failure on one field never stops the rest.
pub fn compare_fields(
    ratio: &dyn FuzzyRatio,
    consolidated: &IndexMap<String, String>,
    expected: &BTreeMap<String, String>,
    fields: &FieldSet,
    threshold: u32,
) -> FieldReport {
    let comparisons = fields
        .iter()
        .map(|field| {
            let actual = consolidated.get(field).map(String::as_str).unwrap_or("");
            let reference = expected.get(field).map(String::as_str);
            field_match(ratio, field, actual, reference, threshold)
        })
        .collect();

    FieldReport { comparisons }
}
