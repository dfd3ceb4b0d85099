//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Budget written into new templates
const TEMPLATE_MAX_TOKENS: usize = 512;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Token budget to put in the template
    #[arg(short, long, value_name = "N", default_value_t = TEMPLATE_MAX_TOKENS)]
    pub max_tokens: usize,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust the budget and filters");
        println!("2. Validate your configuration:");
        println!("   tokseg validate -c {}", self.output.display());
        println!("3. Use it when segmenting:");
        println!(
            "   tokseg segment -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    fn generate_template(&self) -> String {
        format!(
            r#"# tokseg configuration

# Tokenizer used to count and split: "word" or "whitespace"
tokenizer = "word"

[segmenter]
# Drop purely alphabetic words of at most minWordLength characters
removeShortWords = false
minWordLength = 2

# Strip [ ] ( ) {{ }} < > * before segmenting
removeExtraneous = false

# Maximum tokens per segment, must be greater than 0
maxTokens = {max_tokens}

[output]
# "json", "text" or "markdown"
format = "json"
prettyJson = true
withCounts = false
"#,
            max_tokens = self.max_tokens
        )
    }
}
