//! Plain text output formatter

use super::{OutputFormatter, RunResult};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes the rewritten text and one extra newline
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_output(&mut self, run: &RunResult<'_>) -> Result<()> {
        writeln!(self.writer, "{}", run.output.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
