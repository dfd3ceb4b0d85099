//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one segment per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_sources: bool,
    sources_seen: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    ///
    /// With `show_sources`, each input source is introduced by a
    /// `==> name <==` header line.
    pub fn new(writer: W, show_sources: bool) -> Self {
        Self {
            writer,
            show_sources,
            sources_seen: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.show_sources {
            if self.sources_seen > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.sources_seen += 1;
        Ok(())
    }

    fn format_segment(&mut self, segment: &str, _token_count: usize) -> Result<()> {
        writeln!(self.writer, "{}", segment.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
