//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::from_file(&self.config).and_then(|config| {
            config.segmenter.validate()?;
            Ok(config)
        });

        match result {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Tokenizer: {:?}", config.tokenizer);
                println!("  Max tokens: {}", config.segmenter.max_tokens);
                println!("  Output format: {:?}", config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
