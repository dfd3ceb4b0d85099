//! Segmentation configuration
//!
//! [`Config`] is a plain record of the four recognized options. It can be
//! built with [`ConfigBuilder`], deserialized from a configuration file, or
//! edited by option name through [`Config::set`] and [`Config::get`]; the
//! latter accept only names from the closed [`OptionName`] set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Short-word removal is off unless requested
    pub const REMOVE_SHORT_WORDS: bool = false;

    /// Words of this many letters or fewer are removed
    pub const MIN_WORD_LENGTH: usize = 2;

    /// Extraneous-character removal is off unless requested
    pub const REMOVE_EXTRANEOUS: bool = false;

    /// Token budget; zero is rejected at segmentation time
    pub const MAX_TOKENS: usize = 0;
}

/// Options controlling filtering and segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    /// Drop short, purely alphabetic words before segmenting
    pub remove_short_words: bool,
    /// Threshold for short-word removal (inclusive)
    pub min_word_length: usize,
    /// Strip brackets, braces, angle brackets and asterisks
    pub remove_extraneous: bool,
    /// Token budget per segment
    pub max_tokens: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove_short_words: defaults::REMOVE_SHORT_WORDS,
            min_word_length: defaults::MIN_WORD_LENGTH,
            remove_extraneous: defaults::REMOVE_EXTRANEOUS,
            max_tokens: defaults::MAX_TOKENS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default configuration with the given token budget
    pub fn with_max_tokens(max_tokens: usize) -> Self {
        Self {
            max_tokens,
            ..Self::default()
        }
    }

    /// Check that the configuration can drive a segmentation call
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(Error::InvalidConfiguration(
                "max_tokens must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Read an option by name
    pub fn get(&self, name: &str) -> Result<OptionValue> {
        let option: OptionName = name.parse()?;
        Ok(self.get_option(option))
    }

    /// Read an option
    pub fn get_option(&self, option: OptionName) -> OptionValue {
        match option {
            OptionName::RemoveShortWords => OptionValue::Bool(self.remove_short_words),
            OptionName::MinWordLength => OptionValue::Int(self.min_word_length),
            OptionName::RemoveExtraneous => OptionValue::Bool(self.remove_extraneous),
            OptionName::MaxTokens => OptionValue::Int(self.max_tokens),
        }
    }

    /// Set an option by name from its textual value
    ///
    /// The name and value are both checked before anything is written, so
    /// a failed call leaves the configuration untouched.
    pub fn set(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        let option: OptionName = name.parse()?;
        let value = option.parse_value(value)?;
        self.set_option(option, value)
    }

    /// Set an option to a typed value
    pub fn set_option(&mut self, option: OptionName, value: OptionValue) -> Result<&mut Self> {
        match (option, value) {
            (OptionName::RemoveShortWords, OptionValue::Bool(v)) => self.remove_short_words = v,
            (OptionName::MinWordLength, OptionValue::Int(v)) => self.min_word_length = v,
            (OptionName::RemoveExtraneous, OptionValue::Bool(v)) => self.remove_extraneous = v,
            (OptionName::MaxTokens, OptionValue::Int(v)) => self.max_tokens = v,
            (option, value) => {
                return Err(Error::InvalidOptionValue {
                    option: option.name(),
                    value: value.to_string(),
                })
            }
        }
        Ok(self)
    }
}

/// Convert a budget that may be negative into a token count
///
/// A negative budget is an invalid configuration. Zero passes through and is
/// rejected by [`Config::validate`] when segmentation starts.
pub fn budget_from_signed(max_tokens: i64) -> Result<usize> {
    usize::try_from(max_tokens).map_err(|_| {
        Error::InvalidConfiguration(format!(
            "max_tokens must be greater than 0, got {max_tokens}"
        ))
    })
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    remove_short_words: Option<bool>,
    min_word_length: Option<usize>,
    remove_extraneous: Option<bool>,
    max_tokens: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable short-word removal
    pub fn remove_short_words(mut self, enabled: bool) -> Self {
        self.remove_short_words = Some(enabled);
        self
    }

    /// Set the short-word threshold
    pub fn min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = Some(len);
        self
    }

    /// Enable or disable extraneous-character removal
    pub fn remove_extraneous(mut self, enabled: bool) -> Self {
        self.remove_extraneous = Some(enabled);
        self
    }

    /// Set the token budget
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validating, leaving the check to segmentation time
    pub fn build_unchecked(self) -> Config {
        let mut config = Config::default();

        if let Some(enabled) = self.remove_short_words {
            config.remove_short_words = enabled;
        }

        if let Some(len) = self.min_word_length {
            config.min_word_length = len;
        }

        if let Some(enabled) = self.remove_extraneous {
            config.remove_extraneous = enabled;
        }

        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }

        config
    }
}

/// The recognized option names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// `removeShortWords` (boolean)
    RemoveShortWords,
    /// `minWordLength` (integer)
    MinWordLength,
    /// `removeExtraneous` (boolean)
    RemoveExtraneous,
    /// `maxTokens` (integer)
    MaxTokens,
}

impl OptionName {
    /// Every recognized option, in table order
    pub const ALL: [OptionName; 4] = [
        OptionName::RemoveShortWords,
        OptionName::MinWordLength,
        OptionName::RemoveExtraneous,
        OptionName::MaxTokens,
    ];

    /// Canonical (camelCase) name
    pub fn name(&self) -> &'static str {
        match self {
            OptionName::RemoveShortWords => "removeShortWords",
            OptionName::MinWordLength => "minWordLength",
            OptionName::RemoveExtraneous => "removeExtraneous",
            OptionName::MaxTokens => "maxTokens",
        }
    }

    /// Parse a textual value into this option's type
    pub fn parse_value(&self, value: &str) -> Result<OptionValue> {
        let value = value.trim();
        let invalid = || Error::InvalidOptionValue {
            option: self.name(),
            value: value.to_string(),
        };

        match self {
            OptionName::RemoveShortWords | OptionName::RemoveExtraneous => {
                match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => Ok(OptionValue::Bool(true)),
                    "false" | "no" | "off" | "0" => Ok(OptionValue::Bool(false)),
                    _ => Err(invalid()),
                }
            }
            OptionName::MinWordLength => value
                .parse::<usize>()
                .map(OptionValue::Int)
                .map_err(|_| invalid()),
            OptionName::MaxTokens => {
                let budget = value.parse::<i64>().map_err(|_| invalid())?;
                budget_from_signed(budget).map(OptionValue::Int)
            }
        }
    }
}

impl FromStr for OptionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "removeShortWords" | "remove_short_words" => Ok(OptionName::RemoveShortWords),
            "minWordLength" | "min_word_length" => Ok(OptionName::MinWordLength),
            "removeExtraneous" | "remove_extraneous" => Ok(OptionName::RemoveExtraneous),
            "maxTokens" | "max_tokens" => Ok(OptionName::MaxTokens),
            other => Err(Error::UnknownOption(other.to_string())),
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Value of a single option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    /// Boolean option value
    Bool(bool),
    /// Integer option value
    Int(usize),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{v}"),
            OptionValue::Int(v) => write!(f, "{v}"),
        }
    }
}
