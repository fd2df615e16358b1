//! JSON output formatter

use std::io::Write;

use anyhow::Result;

use super::{DocumentReport, OutputFormatter};

/// JSON formatter - outputs one object per document in a top-level array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<DocumentReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, report: &DocumentReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
