//! Tokenizer contract and built-in tokenizers
//!
//! The segmenter only ever asks a tokenizer two things: which tokens a piece
//! of text contains, and how many. Any vocabulary can be plugged in by
//! implementing [`Tokenizer`], or by passing a closure of type
//! `Fn(&str) -> Vec<String>`.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::Error;

/// Runs of word characters, or runs of characters that are neither word
/// characters nor whitespace.
static WORD_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn word_boundary_regex() -> &'static Regex {
    WORD_BOUNDARY.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("token pattern is valid"))
}

/// Splits text into an ordered sequence of tokens
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` left to right.
    ///
    /// Implementations should return non-empty tokens only; whitespace-only
    /// input should produce an empty vector.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Number of tokens in `text`
    fn count_tokens(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Default tokenizer: splits at word/non-word transitions and whitespace
///
/// `"Hello, world."` yields `["Hello", ",", "world", "."]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordBoundaryTokenizer;

impl WordBoundaryTokenizer {
    /// Create a new word boundary tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        word_boundary_regex()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn count_tokens(&self, text: &str) -> usize {
        word_boundary_regex().find_iter(text).count()
    }
}

/// Splits on whitespace, dropping empty pieces
///
/// Every whitespace character separates tokens, so on cleaned text this is
/// a split on single spaces, and raw text with newlines or tabs never yields
/// tokens that contain whitespace. Punctuation stays attached to its word:
/// `"Hello, world."` yields `["Hello,", "world."]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// Built-in tokenizer selector, used where a tokenizer is chosen by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    /// [`WordBoundaryTokenizer`]
    #[default]
    WordBoundary,
    /// [`WhitespaceTokenizer`]
    Whitespace,
}

impl TokenizerKind {
    /// Short name of the tokenizer
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::WordBoundary => "word",
            TokenizerKind::Whitespace => "whitespace",
        }
    }

    /// Instantiate the tokenizer
    pub fn build(&self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::WordBoundary => Box::new(WordBoundaryTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" | "word_boundary" | "default" => Ok(TokenizerKind::WordBoundary),
            "whitespace" | "space" => Ok(TokenizerKind::Whitespace),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown tokenizer '{other}'"
            ))),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Count tokens with the default tokenizer
pub fn count_tokens(text: &str) -> usize {
    WordBoundaryTokenizer.count_tokens(text)
}
