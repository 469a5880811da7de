//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use joblens_llm::OpenRouterProvider;
use std::fs;

/// Execute the extract command: call the extraction API for one PDF and
/// write the returned JSON next to other outputs.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let model = args
        .model
        .unwrap_or_else(|| config.settings.model.clone());

    let provider = OpenRouterProvider::from_env(&config.settings.endpoint, &model)?;

    let raw_json = provider.extract_postings(&args.pdf).await?;

    let stem = args
        .pdf
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CliError::InvalidInput(format!("Cannot derive a name from {}", args.pdf.display()))
        })?;

    fs::create_dir_all(&args.output_dir)?;
    let output_path = args.output_dir.join(format!("{stem}.json"));
    fs::write(&output_path, &raw_json)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Extracted job details saved to {}",
            output_path.display()
        ))
    );

    Ok(())
}
