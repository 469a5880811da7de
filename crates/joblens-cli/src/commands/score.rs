//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use joblens_eval::{compute_max_pairwise_similarity, load_entries, HashEmbeddingModel};

/// Execute the score command: compare two extraction outputs by
/// best-match embedding similarity.
pub fn execute_score(args: ScoreArgs, formatter: &Formatter) -> Result<()> {
    let entries_a = load_entries(&args.file_a)?;
    let entries_b = load_entries(&args.file_b)?;

    let model = HashEmbeddingModel::default();
    let score = compute_max_pairwise_similarity(&model, &entries_a, &entries_b)?;

    println!("{}", formatter.format_similarity(score));

    Ok(())
}
