//! Text cleaning filters applied before segmentation
//!
//! Each filter is a pure `&str -> String` transform. [`apply_filters`] runs
//! them in their fixed order: short-word removal, extraneous-character
//! removal, then whitespace compression.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::config::Config;

/// Characters dropped by [`remove_extraneous`]
pub const EXTRANEOUS_CHARS: &[char] = &['[', ']', '(', ')', '{', '}', '<', '>', '*'];

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Remove purely alphabetic words of at most `min_len` characters
///
/// Words are maximal runs of word characters. A word is removed only when
/// every character is a letter, so numbers and mixed tokens such as `a1`
/// survive regardless of length. Spacing is compressed afterwards.
pub fn remove_short_words(text: &str, min_len: usize) -> String {
    if min_len == 0 {
        return compress_whitespace(text);
    }

    let stripped = word_regex().replace_all(text, |caps: &Captures<'_>| {
        let word = &caps[0];
        if word.chars().all(char::is_alphabetic) && word.chars().count() <= min_len {
            String::new()
        } else {
            word.to_string()
        }
    });

    compress_whitespace(&stripped)
}

/// Strip brackets, parentheses, braces, angle brackets and asterisks
pub fn remove_extraneous(text: &str) -> String {
    text.chars().filter(|c| !EXTRANEOUS_CHARS.contains(c)).collect()
}

/// Collapse every whitespace run into a single space and trim the ends
pub fn compress_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Run the filter pipeline selected by `config`
pub fn apply_filters(text: &str, config: &Config) -> String {
    let mut cleaned = if config.remove_short_words {
        remove_short_words(text, config.min_word_length)
    } else {
        text.to_string()
    };

    if config.remove_extraneous {
        cleaned = remove_extraneous(&cleaned);
    }

    compress_whitespace(&cleaned)
}
