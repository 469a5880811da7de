//! Best-match cosine similarity between two sets of entries

use crate::embedding::{cosine_similarity, EmbeddingModel};
use crate::error::EvalError;
use crate::flatten::entry_to_string;
use serde_json::Value;
use tracing::debug;

/// Compare two lists of records and return an aggregate similarity
/// percentage in [0, 100].
///
/// Each record is flattened to its value-only entry string and embedded.
/// The full `len(a) × len(b)` cosine matrix is computed; for each entry
/// of `list_a` the best match in `list_b` is taken, and the row maxima
/// are averaged and scaled to a percentage.
///
/// Either list being empty is an [`EvalError::EmptyInput`] — the mean of
/// an empty sequence is undefined, and silently returning 0 or NaN
/// would read as "nothing matched" instead of "nothing to match."
pub fn compute_max_pairwise_similarity<M>(
    model: &M,
    list_a: &[Value],
    list_b: &[Value],
) -> Result<f64, EvalError>
where
    M: EmbeddingModel + ?Sized,
{
    if list_a.is_empty() {
        return Err(EvalError::EmptyInput(
            "no entries in the first list".to_string(),
        ));
    }
    if list_b.is_empty() {
        return Err(EvalError::EmptyInput(
            "no entries in the second list".to_string(),
        ));
    }

    let strings_a: Vec<String> = list_a.iter().map(entry_to_string).collect();
    let strings_b: Vec<String> = list_b.iter().map(entry_to_string).collect();

    debug!(
        "Scoring {} entries against {} ({}-dim embeddings)",
        strings_a.len(),
        strings_b.len(),
        model.dimension()
    );

    let embeddings_a = strings_a
        .iter()
        .map(|s| model.embed(s))
        .collect::<Result<Vec<_>, _>>()?;
    let embeddings_b = strings_b
        .iter()
        .map(|s| model.embed(s))
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0.0f64;
    for row in &embeddings_a {
        let best = embeddings_b
            .iter()
            .map(|col| cosine_similarity(row, col))
            .fold(f32::NEG_INFINITY, f32::max);
        total += f64::from(best);
    }

    Ok(total / embeddings_a.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbeddingModel;
    use serde_json::json;

    #[test]
    fn test_identical_single_entries_score_100() {
        let model = HashEmbeddingModel::new(64);
        let a = vec![json!({"Company name": "Acme", "Job title": "Welder"})];
        let b = a.clone();

        let score = compute_max_pairwise_similarity(&model, &a, &b).unwrap();
        assert!((score - 100.0).abs() < 0.01, "expected ~100, got {score}");
    }

    #[test]
    fn test_best_match_per_row() {
        let model = HashEmbeddingModel::new(64);
        let a = vec![json!({"t": "alpha"})];
        // list_b holds an exact match plus noise; the row max must find it.
        let b = vec![json!({"t": "noise entry"}), json!({"t": "alpha"})];

        let score = compute_max_pairwise_similarity(&model, &a, &b).unwrap();
        assert!((score - 100.0).abs() < 0.01, "expected ~100, got {score}");
    }

    #[test]
    fn test_empty_first_list_is_an_error() {
        let model = HashEmbeddingModel::new(64);
        let b = vec![json!({"t": "x"})];
        let result = compute_max_pairwise_similarity(&model, &[], &b);
        assert!(matches!(result, Err(EvalError::EmptyInput(_))));
    }

    #[test]
    fn test_empty_second_list_is_an_error() {
        let model = HashEmbeddingModel::new(64);
        let a = vec![json!({"t": "x"})];
        let result = compute_max_pairwise_similarity(&model, &a, &[]);
        assert!(matches!(result, Err(EvalError::EmptyInput(_))));
    }

    #[test]
    fn test_single_entry_lists_need_no_special_case() {
        let model = HashEmbeddingModel::new(64);
        let a = vec![json!({"t": "one thing"})];
        let b = vec![json!({"t": "another thing"})];

        let score = compute_max_pairwise_similarity(&model, &a, &b).unwrap();
        assert!(score.is_finite());
        assert!(score <= 100.0);
    }
}
