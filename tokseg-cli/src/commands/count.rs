//! Count command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tokseg_core::{apply_filters, TokenizerKind};

use super::load_config;
use crate::config::TokenizerChoice;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Tokenizer used for counting
    #[arg(short, long, value_enum)]
    pub tokenizer: Option<TokenizerChoice>,

    /// Apply the configured filters before counting
    #[arg(long)]
    pub filtered: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_counts(&mut stdout)
    }

    fn write_counts(&self, writer: &mut impl Write) -> Result<()> {
        let config = load_config(self.config.as_deref(), &[])?;
        let tokenizer = TokenizerKind::from(self.tokenizer.unwrap_or(config.tokenizer)).build();
        let sources = resolve_patterns(&self.input)?;

        if let [source] = sources.as_slice() {
            let text = FileReader::read_source(source)?;
            let text = self.prepare(&text, &config.segmenter);
            writeln!(writer, "{}", tokenizer.count_tokens(&text))?;
            return Ok(());
        }

        let mut total = 0;
        for source in &sources {
            let text = FileReader::read_source(source)?;
            let count = tokenizer.count_tokens(&self.prepare(&text, &config.segmenter));
            log::debug!("{source}: {count} token(s)");
            writeln!(writer, "{count}\t{source}")?;
            total += count;
        }
        writeln!(writer, "{total}\ttotal")?;

        Ok(())
    }

    fn prepare(&self, text: &str, config: &tokseg_core::Config) -> String {
        if self.filtered {
            apply_filters(text, config)
        } else {
            text.to_string()
        }
    }
}
