//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_sources: bool,
    sources_seen: usize,
    source_segments: usize,
    segment_count: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, show_sources: bool) -> Self {
        Self {
            writer,
            show_sources,
            sources_seen: 0,
            source_segments: 0,
            segment_count: 0,
            token_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.show_sources {
            if self.sources_seen > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }
        self.sources_seen += 1;
        self.source_segments = 0;
        Ok(())
    }

    fn format_segment(&mut self, segment: &str, token_count: usize) -> Result<()> {
        self.source_segments += 1;
        self.segment_count += 1;
        self.token_count += token_count;
        writeln!(self.writer, "{}. {}", self.source_segments, segment.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total segments: {}, tokens: {}*",
            self.segment_count, self.token_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
