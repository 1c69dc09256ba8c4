//! Output format traits for the JSONL ingester
use crate::error::IngestError;
use crate::ingest::{FieldMap, RunSummary};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Trait for report formatters
pub trait RecordFormatter: Send + Sync {
    fn format_fields(&self, fields: &FieldMap) -> String;
    fn format_failure(&self, error: &IngestError) -> String;
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// Enum for output destination
#[derive(Debug, Clone, Default)]
pub enum OutputDestination {
    #[default]
    Stdout,
    File(std::path::PathBuf),
}

impl OutputDestination {
    /// Open the destination for writing. Files are created or truncated.
    pub fn open(&self) -> Result<Box<dyn Write>, IngestError> {
        let sink: Box<dyn Write> = match self {
            OutputDestination::Stdout => Box::new(BufWriter::new(std::io::stdout().lock())),
            OutputDestination::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        };
        Ok(sink)
    }
}

/// Output writer that combines a formatter and a sink
pub struct OutputWriter<W: Write> {
    formatter: Box<dyn RecordFormatter>,
    sink: W,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(formatter: Box<dyn RecordFormatter>, sink: W) -> Self {
        Self { formatter, sink }
    }

    /// Write one decoded record followed by its separator
    pub fn write_fields(&mut self, fields: &FieldMap) -> Result<(), IngestError> {
        let content = self.formatter.format_fields(fields);
        self.sink.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write the diagnostic for a record that failed to decode
    pub fn write_failure(&mut self, error: &IngestError) -> Result<(), IngestError> {
        let content = self.formatter.format_failure(error);
        self.sink.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn write_summary(&mut self, summary: &RunSummary) -> Result<(), IngestError> {
        let content = self.formatter.format_summary(summary);
        self.sink.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Flush the sink and hand it back
    pub fn finish(mut self) -> Result<W, IngestError> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
