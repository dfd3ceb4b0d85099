//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tokseg_core::{OptionName, Segmenter, TokenizerKind};

use crate::config::CliConfig;

pub mod count;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into token-budgeted segments
    Segment(segment::SegmentArgs),

    /// Count tokens in text files
    Count(count::CountArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available tokenizers
    Tokenizers,

    /// List available output formats
    Formats,

    /// List recognized configuration options and their defaults
    Options,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = io::stdout().lock();
                subcommand.write_to(&mut stdout)
            }
        }
    }
}

impl ListCommands {
    /// Write the listing to `writer`
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Tokenizers => {
                writeln!(writer, "Available tokenizers:")?;
                writeln!(
                    writer,
                    "  {:<12} Words and punctuation runs (default)",
                    TokenizerKind::WordBoundary.name()
                )?;
                writeln!(
                    writer,
                    "  {:<12} Pieces separated by whitespace",
                    TokenizerKind::Whitespace.name()
                )?;
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                writeln!(writer, "  json         JSON array of segments (default)")?;
                writeln!(writer, "  text         One segment per line")?;
                writeln!(writer, "  markdown     Numbered markdown list")?;
            }
            ListCommands::Options => {
                let defaults = tokseg_core::Config::default();
                writeln!(writer, "Configuration options:")?;
                for option in OptionName::ALL {
                    writeln!(
                        writer,
                        "  {:<18} default: {}",
                        option.name(),
                        defaults.get_option(option)
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Load the configuration file if given, then apply `NAME=VALUE` overrides
pub(crate) fn load_config(path: Option<&Path>, assignments: &[String]) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            CliConfig::from_file(path)?
        }
        None => CliConfig::default(),
    };

    config.apply_assignments(assignments)?;
    Ok(config)
}

/// Build a segmenter from a resolved configuration
pub(crate) fn build_segmenter(config: &CliConfig) -> Segmenter {
    let tokenizer = TokenizerKind::from(config.tokenizer).build();
    Segmenter::with_shared_tokenizer(config.segmenter.clone(), tokenizer.into())
}

/// Open the output destination, defaulting to stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
