//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array
///
/// A single source becomes a bare array of segments. With several sources
/// the output is an array of `{source, segments}` objects instead.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    with_counts: bool,
    multiple_sources: bool,
    documents: Vec<DocumentData>,
}

/// Segment with its token count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    /// The segment text
    pub text: String,
    /// Token count under the configured tokenizer
    pub tokens: usize,
}

/// One output entry: the bare text, or the text with its count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentEntry {
    /// Segment text only
    Plain(String),
    /// Segment text and token count
    Counted(SegmentData),
}

/// Segments of one input source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input source name
    pub source: String,
    /// Segments in order
    pub segments: Vec<SegmentEntry>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, with_counts: bool, multiple_sources: bool) -> Self {
        Self {
            writer,
            pretty,
            with_counts,
            multiple_sources,
            documents: Vec::new(),
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            segments: Vec::new(),
        });
        Ok(())
    }

    fn format_segment(&mut self, segment: &str, token_count: usize) -> Result<()> {
        let entry = if self.with_counts {
            SegmentEntry::Counted(SegmentData {
                text: segment.to_string(),
                tokens: token_count,
            })
        } else {
            SegmentEntry::Plain(segment.to_string())
        };

        match self.documents.last_mut() {
            Some(document) => document.segments.push(entry),
            None => self.documents.push(DocumentData {
                source: String::new(),
                segments: vec![entry],
            }),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let documents = std::mem::take(&mut self.documents);

        if self.multiple_sources {
            self.write_json(&documents)?;
        } else {
            let segments: Vec<SegmentEntry> = documents
                .into_iter()
                .flat_map(|document| document.segments)
                .collect();
            self.write_json(&segments)?;
        }

        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn output_of(formatter: JsonFormatter<Vec<u8>>) -> Value {
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_plain_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true, false, false);
        formatter.begin_source("a.txt").unwrap();
        formatter.format_segment("One.", 2).unwrap();
        formatter.format_segment("Two.", 2).unwrap();
        formatter.finish().unwrap();

        assert_eq!(output_of(formatter), json!(["One.", "Two."]));
    }

    #[test]
    fn test_with_counts() {
        let mut formatter = JsonFormatter::new(Vec::new(), false, true, false);
        formatter.begin_source("a.txt").unwrap();
        formatter.format_segment("One two.", 3).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            output_of(formatter),
            json!([{ "text": "One two.", "tokens": 3 }])
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false, false, false);
        formatter.begin_source("empty.txt").unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }

    #[test]
    fn test_multiple_sources() {
        let mut formatter = JsonFormatter::new(Vec::new(), true, false, true);
        formatter.begin_source("a.txt").unwrap();
        formatter.format_segment("A.", 2).unwrap();
        formatter.begin_source("b.txt").unwrap();
        formatter.format_segment("B.", 2).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            output_of(formatter),
            json!([
                { "source": "a.txt", "segments": ["A."] },
                { "source": "b.txt", "segments": ["B."] }
            ])
        );
    }
}
