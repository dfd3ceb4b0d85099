//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::PathBuf;

use crate::error::CliError;

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input, requested with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve file patterns to input sources
///
/// `-` stands for standard input, which always comes before any file no
/// matter where `-` appears. File matches are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut stdin = false;
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources = Vec::with_capacity(files.len() + usize::from(stdin));
    if stdin {
        sources.push(InputSource::Stdin);
    }
    sources.extend(files.into_iter().map(InputSource::File));

    Ok(sources)
}
