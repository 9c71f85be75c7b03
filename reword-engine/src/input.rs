//! Input abstraction for rule and text sources
//!
//! Provides one way to read lines from a string, a file or any reader, so
//! the loader and the rewriter do not care where their bytes come from.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

/// Unified input source
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, in-memory buffers, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Name used in error messages and logs
    pub fn label(&self) -> String {
        match self {
            Input::Text(_) => "<text>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Reader(_) => "<reader>".to_string(),
        }
    }

    /// Open the source for buffered line reading.
    ///
    /// Files are opened here and closed when the returned reader is dropped.
    pub fn open(self) -> Result<LineSource> {
        let label = self.label();
        let reader: Box<dyn BufRead + Send> = match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::File(path) => {
                let file = File::open(&path).map_err(|source| EngineError::Io {
                    path: label.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
            Input::Reader(reader) => Box::new(BufReader::new(reader)),
        };

        Ok(LineSource {
            label,
            reader,
            line_number: 0,
            bytes_read: 0,
        })
    }
}

/// Buffered line reader over an opened [`Input`]
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub struct LineSource {
    label: String,
    reader: Box<dyn BufRead + Send>,
    line_number: usize,
    bytes_read: usize,
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("label", &self.label)
            .field("line_number", &self.line_number)
            .field("bytes_read", &self.bytes_read)
            .finish()
    }
}

impl LineSource {
    /// Read the next line into `buf` without its terminator.
    ///
    /// Returns `false` at end of input. Invalid UTF-8 is reported as an I/O
    /// error against this source.
    pub fn read_line(&mut self, buf: &mut String) -> Result<bool> {
        buf.clear();
        let mut bytes = Vec::new();
        let mut consumed = 0;
        let mut terminator = None;

        while terminator.is_none() {
            let available = self
                .reader
                .fill_buf()
                .map_err(|source| io_error(&self.label, source))?;
            if available.is_empty() {
                break;
            }
            let used = match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    bytes.extend_from_slice(&available[..end]);
                    terminator = Some(available[end]);
                    end + 1
                }
                None => {
                    bytes.extend_from_slice(available);
                    available.len()
                }
            };
            self.reader.consume(used);
            consumed += used;
        }

        if terminator == Some(b'\r') {
            let available = self
                .reader
                .fill_buf()
                .map_err(|source| io_error(&self.label, source))?;
            if available.first() == Some(&b'\n') {
                self.reader.consume(1);
                consumed += 1;
            }
        }

        if consumed == 0 {
            return Ok(false);
        }

        self.bytes_read += consumed;
        self.line_number += 1;
        let line = String::from_utf8(bytes).map_err(|err| {
            io_error(&self.label, io::Error::new(io::ErrorKind::InvalidData, err))
        })?;
        buf.push_str(&line);
        Ok(true)
    }

    /// 1-based number of the line last returned by [`read_line`](Self::read_line)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Bytes consumed so far, terminators included
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    /// Name of the underlying source
    pub fn label(&self) -> &str {
        &self.label
    }
}

fn io_error(label: &str, source: io::Error) -> EngineError {
    EngineError::Io {
        path: label.to_string(),
        source,
    }
}
