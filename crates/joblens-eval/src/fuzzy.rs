//! Token-set fuzzy string similarity

use std::collections::BTreeSet;

/// A fuzzy string-similarity function returning an integer percentage.
///
/// The field matcher takes this as a narrow collaborator so tests can
/// inject a stub with fixed scores.
pub trait FuzzyRatio {
    /// Similarity between two strings, 0..=100.
    fn ratio(&self, a: &str, b: &str) -> u32;
}

/// Order-independent token-overlap similarity.
///
/// Both strings tokenize on whitespace into sets. The sorted
/// intersection string is compared against each of the two sorted
/// intersection-plus-difference strings, and the pair of those against
/// each other, with a normalized Levenshtein ratio; the best of the
/// three scores wins. A string whose tokens are a subset of the other's
/// therefore scores 100 regardless of token order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetRatio;

impl FuzzyRatio for TokenSetRatio {
    fn ratio(&self, a: &str, b: &str) -> u32 {
        token_set_ratio(a, b)
    }
}

fn base_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

fn join_nonempty(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head} {tail}")
    }
}

/// Token-set ratio between two strings, 0..=100.
///
/// Two token-less strings are identical (100); one token-less string
/// against a tokenful one shares nothing (0).
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100
        } else {
            0
        };
    }

    // BTreeSet iteration is sorted, so the joined strings are canonical.
    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let common_joined = common.join(" ");
    let with_a = join_nonempty(&common_joined, &only_a.join(" "));
    let with_b = join_nonempty(&common_joined, &only_b.join(" "));

    let score = base_ratio(&common_joined, &with_a)
        .max(base_ratio(&common_joined, &with_b))
        .max(base_ratio(&with_a, &with_b));

    score.round().clamp(0.0, 100.0) as u32
}
