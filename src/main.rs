//! Main entry point for the JSONL ingester
use anyhow::Context;
use clap::Parser;
use log::info;

use jsonl_ingest::cli::args::Cli;
use jsonl_ingest::formats::text::TextFormatter;
use jsonl_ingest::formats::traits::{OutputDestination, OutputWriter};
use jsonl_ingest::ingest::JsonlIngester;
use jsonl_ingest::source::{LineSource, ReadMode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags when set
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mode: ReadMode = cli.mode.into();
    info!("Opening input file: {} ({:?})", cli.input.display(), mode);
    let source = LineSource::open(&cli.input, mode)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;

    let output_dest = match &cli.output {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };
    let sink = output_dest
        .open()
        .with_context(|| format!("failed to open output {:?}", output_dest))?;

    let writer = OutputWriter::new(Box::new(TextFormatter), sink);
    let (summary, _) = JsonlIngester::new(writer)
        .ingest(source)
        .with_context(|| format!("ingestion of {} aborted", cli.input.display()))?;

    if let Ok(json) = serde_json::to_string(&summary) {
        log::debug!("Run summary: {}", json);
    }

    Ok(())
}
