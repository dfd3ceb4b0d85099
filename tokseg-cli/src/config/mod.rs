//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tokseg_core::{Config, TokenizerKind};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Tokenizer used for counting and splitting
    pub tokenizer: TokenizerChoice,

    /// Filter and segmentation options
    pub segmenter: Config,

    /// Output configuration
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Apply `NAME=VALUE` option assignments to the segmenter options
    pub fn apply_assignments(&mut self, assignments: &[String]) -> Result<()> {
        for assignment in assignments {
            let (name, value) = assignment.split_once('=').ok_or_else(|| {
                CliError::ConfigError(format!("expected NAME=VALUE, got '{assignment}'"))
            })?;

            self.segmenter
                .set(name.trim(), value)
                .map_err(CliError::from)?;
        }

        Ok(())
    }
}

/// Tokenizer selection, shared by the config file and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerChoice {
    /// Words and punctuation runs
    #[default]
    Word,
    /// Single-space separated pieces
    Whitespace,
}

impl From<TokenizerChoice> for TokenizerKind {
    fn from(choice: TokenizerChoice) -> Self {
        match choice {
            TokenizerChoice::Word => TokenizerKind::WordBoundary,
            TokenizerChoice::Whitespace => TokenizerKind::Whitespace,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of segments
    #[default]
    Json,
    /// Plain text with one segment per line
    Text,
    /// Markdown numbered list
    Markdown,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include each segment's token count
    pub with_counts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty_json: true,
            with_counts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.tokenizer, TokenizerChoice::Word);
        assert_eq!(config.segmenter, Config::default());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_toml(
            r#"
tokenizer = "whitespace"

[segmenter]
removeShortWords = true
minWordLength = 3
removeExtraneous = true
maxTokens = 256

[output]
format = "markdown"
prettyJson = false
withCounts = true
"#,
        )
        .unwrap();

        assert_eq!(config.tokenizer, TokenizerChoice::Whitespace);
        assert!(config.segmenter.remove_short_words);
        assert_eq!(config.segmenter.min_word_length, 3);
        assert!(config.segmenter.remove_extraneous);
        assert_eq!(config.segmenter.max_tokens, 256);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(!config.output.pretty_json);
        assert!(config.output.with_counts);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = CliConfig::from_toml("[segmenter]\nmaxTokens = 32\n").unwrap();
        assert_eq!(config.segmenter.max_tokens, 32);
        assert_eq!(config.segmenter.min_word_length, 2);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = CliConfig::from_toml("[segmenter]\nchunkOverlap = 4\n").unwrap_err();
        assert!(err.to_string().contains("chunkOverlap"));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[segmenter]\nmaxTokens = 10\n").unwrap();

        let config = CliConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.segmenter.max_tokens, 10);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/tokseg.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_apply_assignments() {
        let mut config = CliConfig::default();
        config
            .apply_assignments(&["maxTokens=12".into(), "removeExtraneous = yes".into()])
            .unwrap();

        assert_eq!(config.segmenter.max_tokens, 12);
        assert!(config.segmenter.remove_extraneous);
    }

    #[test]
    fn test_apply_assignments_errors() {
        let mut config = CliConfig::default();

        let err = config.apply_assignments(&["maxTokens".into()]).unwrap_err();
        assert!(err.to_string().contains("expected NAME=VALUE"));

        let err = config.apply_assignments(&["overlap=3".into()]).unwrap_err();
        assert!(err.to_string().contains("Unknown option: overlap"));
    }
}
