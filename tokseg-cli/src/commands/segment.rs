//! Segment command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tokseg_core::budget_from_signed;

use super::{build_segmenter, load_config, open_output};
use crate::config::{CliConfig, OutputFormat, TokenizerChoice};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::create_formatter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum tokens per segment
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub max_tokens: Option<i64>,

    /// Drop alphabetic words no longer than the minimum word length
    #[arg(long)]
    pub remove_short_words: bool,

    /// Length at or below which words count as short
    #[arg(long, value_name = "N")]
    pub min_word_length: Option<usize>,

    /// Strip formatting characters before segmenting
    #[arg(long)]
    pub remove_extraneous: bool,

    /// Tokenizer used for counting and splitting
    #[arg(short, long, value_enum)]
    pub tokenizer: Option<TokenizerChoice>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set a segmenter option (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Include token counts in the output
    #[arg(long)]
    pub with_counts: bool,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting text segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        config
            .segmenter
            .validate()
            .map_err(CliError::from)?;

        let sources = resolve_patterns(&self.input)?;
        log::info!("Found {} input source(s)", sources.len());

        let segmenter = build_segmenter(&config);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(&config.output, writer, sources.len() > 1);

        let mut total_segments = 0;
        for source in &sources {
            log::info!("Segmenting {source}");
            let text = FileReader::read_source(source)?;
            let segments = segmenter.segment(&text).map_err(CliError::from)?;
            log::debug!("{source}: {} segment(s)", segments.len());

            formatter.begin_source(&source.to_string())?;
            for segment in &segments {
                formatter.format_segment(segment, segmenter.count_tokens(segment))?;
            }
            total_segments += segments.len();
        }

        formatter.finish()?;
        log::info!("Wrote {total_segments} segment(s)");

        Ok(())
    }

    /// Merge defaults, the config file, `--set` assignments and flags, in that order
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = load_config(self.config.as_deref(), &self.set)?;

        if let Some(max_tokens) = self.max_tokens {
            config.segmenter.max_tokens =
                budget_from_signed(max_tokens).map_err(CliError::from)?;
        }
        if self.remove_short_words {
            config.segmenter.remove_short_words = true;
        }
        if let Some(len) = self.min_word_length {
            config.segmenter.min_word_length = len;
        }
        if self.remove_extraneous {
            config.segmenter.remove_extraneous = true;
        }
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer = tokenizer;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.with_counts {
            config.output.with_counts = true;
        }
        if self.compact {
            config.output.pretty_json = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args() -> SegmentArgs {
        SegmentArgs {
            input: vec!["input.txt".into()],
            output: None,
            format: None,
            max_tokens: None,
            remove_short_words: false,
            min_word_length: None,
            remove_extraneous: false,
            tokenizer: None,
            config: None,
            set: Vec::new(),
            with_counts: false,
            compact: false,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "tokenizer = \"whitespace\"\n[segmenter]\nmaxTokens = 100\nminWordLength = 4\n"
        )
        .unwrap();

        let mut args = args();
        args.config = Some(file.path().to_path_buf());
        args.set = vec!["maxTokens=50".into()];
        args.max_tokens = Some(20);
        args.compact = true;

        let config = args.resolve_config().unwrap();
        assert_eq!(config.segmenter.max_tokens, 20);
        assert_eq!(config.segmenter.min_word_length, 4);
        assert_eq!(config.tokenizer, TokenizerChoice::Whitespace);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_set_overrides_config_file() {
        let mut args = args();
        args.set = vec!["removeShortWords=true".into(), "maxTokens=7".into()];

        let config = args.resolve_config().unwrap();
        assert!(config.segmenter.remove_short_words);
        assert_eq!(config.segmenter.max_tokens, 7);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut args = args();
        args.max_tokens = Some(-3);

        let err = args.resolve_config().unwrap_err();
        assert!(err.to_string().contains("max_tokens must be greater than 0"));
    }

    #[test]
    fn test_negative_budget_through_set_rejected() {
        let mut args = args();
        args.set = vec!["maxTokens=-1".into()];

        let err = args.resolve_config().unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_zero_budget_fails_before_reading_input() {
        let mut args = args();
        args.input = vec!["/nonexistent/never-read.txt".into()];
        args.max_tokens = Some(0);

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
