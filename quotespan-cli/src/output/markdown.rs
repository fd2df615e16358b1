//! Markdown output formatter

use std::io::Write;

use anyhow::Result;

use quotespan_core::QuoteSpan;

use super::{DocumentReport, OutputFormatter};

/// Markdown formatter - one section per document with a nested span list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_span(&mut self, span: &QuoteSpan, depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        writeln!(
            self.writer,
            "{indent}- `{}..{}` ({}): {}",
            span.begin, span.end, span.family, span.text
        )?;
        for child in &span.children {
            self.write_span(child, depth + 1)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, report: &DocumentReport) -> Result<()> {
        writeln!(self.writer, "## {}", report.source)?;
        writeln!(self.writer)?;
        for span in &report.quotes {
            self.write_span(span, 0)?;
        }
        if !report.unclosed.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Unclosed:")?;
            for span in &report.unclosed {
                self.write_span(span, 0)?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total quotes: {}*", report.stats.quote_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
