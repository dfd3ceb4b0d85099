//! Budgeted, sentence-respecting segmentation

use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

use crate::config::{Config, OptionValue};
use crate::error::Result;
use crate::filters::apply_filters;
use crate::sentence::split_sentences;
use crate::tokenizer::{Tokenizer, WordBoundaryTokenizer};

/// Splits text into segments of at most `max_tokens` tokens
///
/// The segmenter cleans its input with the configured filters, then packs
/// whole sentences greedily into segments. A sentence that does not fit the
/// budget on its own is emitted one token per segment.
///
/// ```rust
/// use tokseg_core::{Config, Segmenter};
///
/// let segmenter = Segmenter::new(Config::with_max_tokens(8));
/// let segments = segmenter
///     .segment("The cat sat. The dog ran. The end.")
///     .unwrap();
///
/// assert_eq!(segments, vec!["The cat sat. The dog ran.", "The end."]);
/// ```
#[derive(Clone)]
pub struct Segmenter {
    config: Config,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Segmenter {
    /// Create a segmenter using the default tokenizer
    pub fn new(config: Config) -> Self {
        Self::with_tokenizer(config, WordBoundaryTokenizer)
    }

    /// Create a segmenter with a custom tokenizer
    pub fn with_tokenizer(config: Config, tokenizer: impl Tokenizer + 'static) -> Self {
        Self::with_shared_tokenizer(config, Arc::new(tokenizer))
    }

    /// Create a segmenter around an already shared tokenizer
    pub fn with_shared_tokenizer(config: Config, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { config, tokenizer }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration
    ///
    /// Changes apply from the next call to [`Segmenter::segment`].
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Set an option by name, returning the segmenter for chaining
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.config.set(name, value)?;
        Ok(self)
    }

    /// Read an option by name
    pub fn option(&self, name: &str) -> Result<OptionValue> {
        self.config.get(name)
    }

    /// Count tokens in `text` with the configured tokenizer
    pub fn count_tokens(&self, text: &str) -> usize {
        self.tokenizer.count_tokens(text)
    }

    /// Split `text` into ordered segments within the token budget
    ///
    /// Fails only when the configuration is invalid, and then before the
    /// input is looked at. Empty input yields no segments.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        self.config.validate()?;

        if text.is_empty() {
            return Ok(Vec::new());
        }

        let cleaned = apply_filters(text, &self.config);
        debug!(
            "filtered {} bytes of input down to {} bytes",
            text.len(),
            cleaned.len()
        );

        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.segment_cleaned(&cleaned))
    }

    /// Segment text that has already been through the filters
    pub fn segment_cleaned(&self, cleaned: &str) -> Vec<String> {
        let budget = self.config.max_tokens;

        if budget == 1 {
            debug!("budget of one token, emitting every token on its own");
            return self.split_into_tokens(cleaned);
        }

        let total = self.count_tokens(cleaned);
        if total <= budget {
            debug!("{total} tokens fit the budget of {budget}, returning a single segment");
            return vec![cleaned.to_string()];
        }

        let sentences = split_sentences(cleaned);
        debug!(
            "packing {} sentences ({total} tokens) into segments of at most {budget} tokens",
            sentences.len()
        );

        let segments = self.pack_sentences(&sentences, budget);
        debug!("produced {} segments", segments.len());
        segments
    }

    /// Greedy first-fit packing of sentences in order
    fn pack_sentences(&self, sentences: &[&str], budget: usize) -> Vec<String> {
        let mut segments = Vec::new();
        let mut buffer = SegmentBuffer::default();

        for sentence in sentences {
            let sentence_tokens = self.count_tokens(sentence);

            if sentence_tokens > budget {
                trace!("sentence of {sentence_tokens} tokens exceeds the budget, splitting per token");
                buffer.flush_into(&mut segments);
                segments.extend(self.split_into_tokens(sentence));
                continue;
            }

            if buffer.tokens + sentence_tokens > budget {
                buffer.flush_into(&mut segments);
            }

            buffer.push(sentence, sentence_tokens);
        }

        buffer.flush_into(&mut segments);
        segments
    }

    /// Every non-empty trimmed token as its own segment
    fn split_into_tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter_map(|token| {
                let token = token.trim();
                (!token.is_empty()).then(|| token.to_string())
            })
            .collect()
    }
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Running segment under construction
#[derive(Debug, Default)]
struct SegmentBuffer {
    text: String,
    tokens: usize,
}

impl SegmentBuffer {
    fn push(&mut self, sentence: &str, tokens: usize) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(sentence);
        self.tokens += tokens;
    }

    fn flush_into(&mut self, segments: &mut Vec<String>) {
        if !self.text.is_empty() {
            trace!("flushing segment of {} tokens", self.tokens);
            segments.push(std::mem::take(&mut self.text));
        }
        self.tokens = 0;
    }
}

/// Segment `text` with the default tokenizer and filters under `max_tokens`
pub fn segment_text(text: &str, max_tokens: usize) -> Result<Vec<String>> {
    Segmenter::new(Config::with_max_tokens(max_tokens)).segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tokenizer::WhitespaceTokenizer;

    fn segmenter(max_tokens: usize) -> Segmenter {
        Segmenter::new(Config::with_max_tokens(max_tokens))
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let result = segmenter(0).segment("Some text.");
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_budget_rejected_even_for_empty_input() {
        assert!(segmenter(0).segment("").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(segmenter(5).segment("").unwrap().is_empty());
        assert!(segmenter(5).segment(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_budget_of_one_emits_tokens() {
        let segments = segmenter(1).segment("This is a test").unwrap();
        assert_eq!(segments, vec!["This", "is", "a", "test"]);
    }

    #[test]
    fn test_single_segment_shortcut_normalizes_whitespace() {
        let segments = segmenter(50).segment("  Hello\n\nworld.  Bye!  ").unwrap();
        assert_eq!(segments, vec!["Hello world. Bye!"]);
    }

    #[test]
    fn test_sentences_packed_greedily() {
        // 4, 4 and 3 tokens under the default tokenizer
        let text = "The cat sat. The dog ran. The end.";
        let segments = segmenter(6).segment(text).unwrap();
        assert_eq!(segments, vec!["The cat sat.", "The dog ran.", "The end."]);

        let segments = segmenter(8).segment(text).unwrap();
        assert_eq!(segments, vec!["The cat sat. The dog ran.", "The end."]);
    }

    #[test]
    fn test_oversized_sentence_degrades_to_tokens() {
        let text = "Hi. one two three four five six. Bye.";
        let segments = segmenter(3).segment(text).unwrap();
        assert_eq!(
            segments,
            vec!["Hi.", "one", "two", "three", "four", "five", "six", ".", "Bye."]
        );
    }

    #[test]
    fn test_no_punctuation_treated_as_one_sentence() {
        let segments = segmenter(3)
            .segment("Line 1\nLine 2\nLine 3\nLine 4\nLine 5")
            .unwrap();
        assert_eq!(segments.len(), 10);
        assert!(segments.join(" ").contains("Line"));
    }

    #[test]
    fn test_custom_tokenizer_changes_boundaries() {
        let text = "The cat sat. The dog ran. The end.";
        let segmenter =
            Segmenter::with_tokenizer(Config::with_max_tokens(6), WhitespaceTokenizer);
        let segments = segmenter.segment(text).unwrap();
        assert_eq!(segments, vec!["The cat sat. The dog ran.", "The end."]);
    }

    #[test]
    fn test_zero_count_tokenizer_keeps_text_whole() {
        let nothing = |_: &str| Vec::<String>::new();
        let segmenter = Segmenter::with_tokenizer(Config::with_max_tokens(2), nothing);
        let segments = segmenter.segment("Many words here. And more.").unwrap();
        assert_eq!(segments, vec!["Many words here. And more."]);
    }

    #[test]
    fn test_set_option_applies_on_next_call() {
        let mut segmenter = Segmenter::default();
        assert!(segmenter.segment("a b").is_err());

        segmenter
            .set_option("maxTokens", "1")
            .unwrap()
            .set_option("removeExtraneous", "true")
            .unwrap();
        assert_eq!(segmenter.segment("(a) b").unwrap(), vec!["a", "b"]);
        assert_eq!(segmenter.option("maxTokens").unwrap(), OptionValue::Int(1));
    }

    #[test]
    fn test_segment_text_convenience() {
        let segments = segment_text("One. Two. Three.", 2).unwrap();
        assert_eq!(segments, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_count_tokens_uses_configured_tokenizer() {
        let default = segmenter(4);
        let spaces = Segmenter::with_tokenizer(Config::with_max_tokens(4), WhitespaceTokenizer);
        assert_eq!(default.count_tokens("Hello, world."), 4);
        assert_eq!(spaces.count_tokens("Hello, world."), 2);
    }
}
