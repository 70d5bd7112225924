mod clean;
mod db;
mod error;
mod output;
mod report;
mod settings;
mod sources;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use report::Summary;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "questions_extract",
    version,
    about = "Collect unique question strings into docs/questions.json",
    after_help = "Environment:\n  QUESTIONS_OUTPUT  output path (default: docs/questions.json)\n  RUST_LOG          log filter for stderr (default: warn)"
)]
struct Cli {
    /// Source file: SQLite database, `.cards` deck archive or `.tsv` export
    source: PathBuf,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let settings = Settings::load().context("Failed to load settings")?;
    info!(?settings, "starting extraction");

    let extraction = sources::extract(&cli.source)
        .with_context(|| format!("Failed to read {:?}", cli.source))?;
    output::write_questions(&settings.output, &extraction.questions)?;

    println!("{}", Summary::of(&extraction));
    Ok(())
}
