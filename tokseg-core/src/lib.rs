//! Tokenizer-agnostic text segmentation under a token budget
//!
//! This crate cleans raw text and splits it into ordered segments whose
//! token counts stay within a configured budget. Sentence boundaries are
//! kept intact wherever a sentence fits the budget; a sentence that does not
//! fit is emitted one token per segment. Tokens are whatever the supplied
//! [`Tokenizer`] says they are.
//!
//! # Architecture
//!
//! - [`tokenizer`]: the tokenizer contract and the built-in tokenizers
//! - [`filters`]: pure text-cleaning transforms run before segmentation
//! - [`sentence`]: sentence boundary detection
//! - [`segmenter`]: greedy sentence packing with per-token degradation
//! - [`config`]: the closed set of options driving filters and segmenter
//!
//! # Example
//!
//! ```rust
//! use tokseg_core::{Config, Segmenter};
//!
//! let config = Config::builder()
//!     .remove_extraneous(true)
//!     .max_tokens(5)
//!     .build()
//!     .unwrap();
//!
//! let segmenter = Segmenter::new(config);
//! let segments = segmenter
//!     .segment("First [draft] line. Second line here.")
//!     .unwrap();
//!
//! assert_eq!(segments, vec!["First draft line.", "Second line here."]);
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod segmenter;
pub mod sentence;
pub mod tokenizer;

pub use config::{budget_from_signed, Config, ConfigBuilder, OptionName, OptionValue};
pub use error::{Error, Result};
pub use filters::{apply_filters, compress_whitespace, remove_extraneous, remove_short_words};
pub use segmenter::{segment_text, Segmenter};
pub use sentence::split_sentences;
pub use tokenizer::{
    count_tokens, Tokenizer, TokenizerKind, WhitespaceTokenizer, WordBoundaryTokenizer,
};
