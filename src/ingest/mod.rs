//! JSONL ingestion: decode each line and report its fields
use crate::error::IngestError;
use crate::formats::traits::OutputWriter;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Top-level fields of one decoded record, in source order.
pub type FieldMap = serde_json::Map<String, Value>;

/// Result of one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Every line consumed, whether it decoded or not
    pub lines: usize,
    pub records: usize,
    pub failures: usize,
}

/// Decode a single line into a field map.
///
/// `line` is the 1-based position used in error messages. Valid JSON that
/// is not an object is still a decode failure.
pub fn decode_record(text: &str, line: usize) -> Result<FieldMap, IngestError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| IngestError::Decode { line, source })?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(IngestError::NotAnObject {
            line,
            kind: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Single forward pass over a line source.
///
/// Decode failures are written inline and the run continues. Source and
/// output errors end the run immediately, without a summary.
pub struct JsonlIngester<W: Write> {
    writer: OutputWriter<W>,
    summary: RunSummary,
}

impl<W: Write> JsonlIngester<W> {
    pub fn new(writer: OutputWriter<W>) -> Self {
        Self {
            writer,
            summary: RunSummary::default(),
        }
    }

    /// Process every line, write the summary line and return the counts.
    pub fn ingest<I>(mut self, lines: I) -> Result<(RunSummary, W), IngestError>
    where
        I: IntoIterator<Item = Result<String, IngestError>>,
    {
        for line in lines {
            let line = line?;
            self.summary.lines += 1;
            self.process_line(&line)?;
        }

        self.writer.write_summary(&self.summary)?;
        let sink = self.writer.finish()?;

        info!(
            "Ingested {} lines ({} records, {} failures)",
            self.summary.lines, self.summary.records, self.summary.failures
        );
        Ok((self.summary, sink))
    }

    fn process_line(&mut self, line: &str) -> Result<(), IngestError> {
        let line_no = self.summary.lines;
        let text = line.strip_suffix('\r').unwrap_or(line);

        if text.is_empty() {
            debug!("Line {} is empty, skipping", line_no);
            return Ok(());
        }

        match decode_record(text, line_no) {
            Ok(fields) => {
                self.summary.records += 1;
                self.writer.write_fields(&fields)
            }
            Err(err) if err.is_record_error() => {
                debug!("Skipping undecodable record: {}", err);
                self.summary.failures += 1;
                self.writer.write_failure(&err)
            }
            Err(err) => Err(err),
        }
    }
}
