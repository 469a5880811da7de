//! joblens CLI - extract job postings from scanned PDFs and evaluate
//! the extraction quality.

use clap::Parser;
use joblens_cli::commands;
use joblens_cli::{Cli, Command, Config, Formatter};
use tracing::Level;

#[tokio::main]
async fn main() {
    // Log to stderr so piped stdout stays clean JSON/tables.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    match run().await {
        Ok(true) => {}
        // At least one field comparison failed; skips never land here.
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> joblens_cli::Result<bool> {
    let cli = Cli::parse();

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format and color setting
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter).await?;
            Ok(true)
        }
        Command::Score(args) => {
            commands::execute_score(args, &formatter)?;
            Ok(true)
        }
        Command::Check(args) => commands::execute_check(args, &config, &formatter),
    }
}
