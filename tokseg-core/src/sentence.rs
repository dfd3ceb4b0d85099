//! Sentence boundary detection over cleaned text

use regex::Regex;
use std::sync::OnceLock;

/// A `.`, `!` or `?` followed by whitespace
static BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn boundary_regex() -> &'static Regex {
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"))
}

/// Split text into sentences
///
/// A boundary is a terminator immediately followed by one or more whitespace
/// characters. The terminator stays with its sentence, the whitespace is
/// consumed, and sentences that are empty after trimming are dropped. Text
/// without any boundary comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in boundary_regex().find_iter(text) {
        // Terminators are ASCII, so `m.start() + 1` is a char boundary
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}
