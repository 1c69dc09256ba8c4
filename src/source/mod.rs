//! Line source module for reading JSONL input from disk
use crate::error::IngestError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How the input file is pulled into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Read the whole file up front, then iterate its lines
    WholeFile,
    /// Pull lines lazily through a buffered reader
    #[default]
    Streaming,
}

enum Lines {
    Buffered(std::vec::IntoIter<String>),
    Reader(std::io::Lines<Box<dyn BufRead>>),
}

/// Sequence of text lines from an input file.
///
/// Yields `Err` only for read failures, which end the run. The iterator is
/// fused after the first error.
pub struct LineSource {
    lines: Lines,
    line: usize,
    failed: bool,
}

impl LineSource {
    /// Open `path` using the given read mode
    pub fn open(path: &Path, mode: ReadMode) -> Result<Self, IngestError> {
        let open_err = |source| IngestError::SourceOpen {
            path: path.to_path_buf(),
            source,
        };

        match mode {
            ReadMode::WholeFile => {
                let content = std::fs::read_to_string(path).map_err(open_err)?;
                let lines: Vec<String> = content.lines().map(str::to_owned).collect();
                Ok(Self::from_lines(lines))
            }
            ReadMode::Streaming => {
                let file = File::open(path).map_err(open_err)?;
                Ok(Self::from_reader(BufReader::new(file)))
            }
        }
    }

    /// Stream lines from any buffered reader
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        let reader: Box<dyn BufRead> = Box::new(reader);
        LineSource {
            lines: Lines::Reader(reader.lines()),
            line: 0,
            failed: false,
        }
    }

    /// Iterate over lines already held in memory
    pub fn from_lines(lines: Vec<String>) -> Self {
        LineSource {
            lines: Lines::Buffered(lines.into_iter()),
            line: 0,
            failed: false,
        }
    }
}

impl Iterator for LineSource {
    type Item = Result<String, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let next = match &mut self.lines {
            Lines::Buffered(iter) => iter.next().map(Ok),
            Lines::Reader(iter) => iter.next(),
        }?;
        self.line += 1;

        match next {
            Ok(line) => Some(Ok(line)),
            Err(source) => {
                self.failed = true;
                Some(Err(IngestError::SourceRead {
                    line: self.line,
                    source,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn collect(source: LineSource) -> Vec<String> {
        source.map(|line| line.unwrap()).collect()
    }

    #[test]
    fn test_modes_yield_same_lines() {
        let file = write_temp(b"{\"a\":1}\r\n{\"b\":2}\n\n{\"c\":3}");

        let whole = collect(LineSource::open(file.path(), ReadMode::WholeFile).unwrap());
        let stream = collect(LineSource::open(file.path(), ReadMode::Streaming).unwrap());

        assert_eq!(whole, vec!["{\"a\":1}", "{\"b\":2}", "", "{\"c\":3}"]);
        assert_eq!(whole, stream);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let file = write_temp(b"");
        for mode in [ReadMode::WholeFile, ReadMode::Streaming] {
            let source = LineSource::open(file.path(), mode).unwrap();
            assert_eq!(source.count(), 0);
        }
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jsonl");

        for mode in [ReadMode::WholeFile, ReadMode::Streaming] {
            let err = LineSource::open(&path, mode).err().unwrap();
            assert!(matches!(err, IngestError::SourceOpen { .. }));
        }
    }

    #[test]
    fn test_invalid_utf8_whole_file_fails_up_front() {
        let file = write_temp(b"{\"a\":1}\n\xff\xfe\n");
        let err = LineSource::open(file.path(), ReadMode::WholeFile).err().unwrap();
        assert!(matches!(err, IngestError::SourceOpen { .. }));
    }

    #[test]
    fn test_invalid_utf8_streaming_fails_at_line() {
        let input = b"{\"a\":1}\n\xff\xfe\n{}\n".to_vec();
        let mut source = LineSource::from_reader(Cursor::new(input));

        assert_eq!(source.next().unwrap().unwrap(), "{\"a\":1}");
        match source.next() {
            Some(Err(IngestError::SourceRead { line, .. })) => assert_eq!(line, 2),
            _ => panic!("expected a read error on line 2"),
        }
        assert!(source.next().is_none());
    }
}
