//! Error types for the JSONL ingester
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The input could not be opened or read before processing began
    #[error("cannot read input file {}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the next line from a streaming source failed
    #[error("read error at line {line}: {source}")]
    SourceRead {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object, found {kind}")]
    NotAnObject { line: usize, kind: &'static str },

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl IngestError {
    /// Per-record errors are reported inline and do not stop a run.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            IngestError::Decode { .. } | IngestError::NotAnObject { .. }
        )
    }

    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            IngestError::SourceRead { line, .. }
            | IngestError::Decode { line, .. }
            | IngestError::NotAnObject { line, .. } => Some(*line),
            IngestError::SourceOpen { .. } | IngestError::Output(_) => None,
        }
    }
}
