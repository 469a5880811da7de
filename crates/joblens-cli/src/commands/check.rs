//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use joblens_eval::{
    compare_fields, consolidate, load_records, Expectations, FieldSet, TokenSetRatio,
};

/// Execute the check command: consolidate an extraction output's fields
/// and compare them against the expected values for that source.
///
/// Returns `true` when no field comparison failed. Load errors are
/// converted here at the boundary into a diagnostic plus an empty
/// result; with nothing compared, nothing failed.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let threshold = args.threshold.unwrap_or(config.settings.threshold);

    let records = match load_records(&args.file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "{}",
                formatter.warning(&format!("No usable records: {}", e))
            );
            return Ok(true);
        }
    };

    let source_id = args.source_id.clone().unwrap_or_else(|| {
        args.file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()
    });
    tracing::debug!("checking {} records as source '{}'", records.len(), source_id);

    let expectations = Expectations::load(&args.expected);
    let expected = match expectations.for_source(&source_id) {
        Some(expected) => expected.clone(),
        None => {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "No expectations defined for source '{}'",
                    source_id
                ))
            );
            Default::default()
        }
    };

    let fields = FieldSet::job_posting_fields();
    let consolidated = consolidate(&records, &fields);

    let report = compare_fields(&TokenSetRatio, &consolidated, &expected, &fields, threshold);

    println!("{}", formatter.format_report(&report)?);

    Ok(!report.has_failures())
}
