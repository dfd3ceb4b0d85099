//! Output formatting module

use anyhow::Result;
use std::io::Write;

use crate::config::{OutputConfig, OutputFormat};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the segments of a new input source
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &str, token_count: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Build the formatter selected by the output configuration
pub fn create_formatter<W>(
    output: &OutputConfig,
    writer: W,
    multiple_sources: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match output.format {
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            output.pretty_json,
            output.with_counts,
            multiple_sources,
        )),
        OutputFormat::Text => Box::new(TextFormatter::new(writer, multiple_sources)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, multiple_sources)),
    }
}
