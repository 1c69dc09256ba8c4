//! Command-line argument parsing for the JSONL ingester
use clap::{Parser, ValueEnum};

use crate::source::ReadMode;

#[derive(Parser)]
#[command(name = "jsonl-ingest")]
#[command(about = "Print the fields of every record in a JSON Lines file", long_about = None)]
pub struct Cli {
    /// Path to the JSONL input file
    #[arg(value_name = "INPUT")]
    pub input: std::path::PathBuf,

    /// How to read the input
    #[arg(short, long, value_enum, default_value = "stream")]
    pub mode: ReadModeArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output (status messages)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReadModeArg {
    /// Read the whole file into memory first
    Whole,
    /// Read lines one at a time
    Stream,
}

impl From<ReadModeArg> for ReadMode {
    fn from(arg: ReadModeArg) -> Self {
        match arg {
            ReadModeArg::Whole => ReadMode::WholeFile,
            ReadModeArg::Stream => ReadMode::Streaming,
        }
    }
}

impl Cli {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else if self.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }
}
