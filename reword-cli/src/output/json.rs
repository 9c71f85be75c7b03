//! JSON output formatter

use super::{OutputFormatter, RunResult};
use anyhow::Result;
use reword_engine::{LoadReport, RewriteMetadata};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonRun<'a> {
    text: &'a str,
    backend: &'static str,
    rules: LoadReport,
    stats: &'a RewriteMetadata,
}

/// JSON formatter - one object per run
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_output(&mut self, run: &RunResult<'_>) -> Result<()> {
        let json = JsonRun {
            text: &run.output.text,
            backend: run.backend.name(),
            rules: run.rules,
            stats: &run.output.metadata,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &json)?;
        } else {
            serde_json::to_writer(&mut self.writer, &json)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
