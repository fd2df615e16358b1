//! Plain text output formatter

use std::io::Write;

use anyhow::Result;

use quotespan_core::QuoteSpan;

use super::{DocumentReport, OutputFormatter};

/// Text formatter - one span per line, nesting shown by indentation
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_span(&mut self, span: &QuoteSpan, depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        let index = span
            .index
            .map(|i| format!("[{i}] "))
            .unwrap_or_default();
        writeln!(
            self.writer,
            "{indent}{index}{}..{} {}: {}",
            span.begin, span.end, span.family, span.text
        )?;
        for child in &span.children {
            self.write_span(child, depth + 1)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, report: &DocumentReport) -> Result<()> {
        writeln!(self.writer, "== {}", report.source)?;
        for span in &report.quotes {
            self.write_span(span, 0)?;
        }
        for span in &report.unclosed {
            let indent = "  ";
            writeln!(
                self.writer,
                "unclosed {}..{} {}: {}",
                span.begin, span.end, span.family, span.text
            )?;
            let mut child = span.children.first();
            let mut depth = 1;
            while let Some(current) = child {
                writeln!(
                    self.writer,
                    "{}unclosed {}..{} {}: {}",
                    indent.repeat(depth),
                    current.begin,
                    current.end,
                    current.family,
                    current.text
                )?;
                child = current.children.first();
                depth += 1;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
