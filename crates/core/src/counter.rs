// crates/core/src/counter.rs
use core::num::NonZeroUsize;

use crate::config::AnalysisConfig;
use crate::patterns::{is_whitespace, paragraph_breaks, sentence_terminators, trim};
use crate::stats::TextMetrics;

/// Compute every metric for `text` with the default reading speed.
///
/// This is the core entry point for the library. It is total: any string,
/// including the empty one, yields well-defined metrics.
#[must_use]
pub fn compute(text: &str) -> TextMetrics {
    compute_with(text, &AnalysisConfig::default())
}

/// Compute every metric for `text` using `config`.
#[must_use]
pub fn compute_with(text: &str, config: &AnalysisConfig) -> TextMetrics {
    let words = count_words(text);
    let characters_without_spaces = count_characters_without_spaces(text);

    TextMetrics {
        words,
        characters: count_characters(text),
        characters_without_spaces,
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        reading_time: reading_time_minutes(words, config.words_per_minute),
        avg_word_length: average_word_length(characters_without_spaces, words),
    }
}

/// Number of maximal non-whitespace runs.
#[must_use]
pub fn count_words(text: &str) -> usize {
    // empty pieces come from leading/trailing and repeated whitespace
    text.split(is_whitespace).filter(|word| !word.is_empty()).count()
}

/// Length of the untrimmed input in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
#[must_use]
pub fn count_characters(text: &str) -> usize {
    text.encode_utf16().count()
}

/// UTF-16 length of the input once every whitespace character is removed.
#[must_use]
pub fn count_characters_without_spaces(text: &str) -> usize {
    text.chars()
        .filter(|&c| !is_whitespace(c))
        .map(char::len_utf16)
        .sum()
}

/// Number of non-blank segments terminated by a run of `.`, `!` or `?`.
///
/// Text after the last terminator is an unfinished sentence and is not
/// counted, so `"Hello world"` has no sentences while `"Hello world."` has one.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    let mut start = 0;
    let mut sentences = 0;

    for terminator in sentence_terminators().find_iter(text) {
        if !trim(&text[start..terminator.start()]).is_empty() {
            sentences += 1;
        }
        start = terminator.end();
    }

    sentences
}

/// Number of non-blank segments between blank lines.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    paragraph_breaks()
        .split(text)
        .filter(|segment| !trim(segment).is_empty())
        .count()
}

/// Whole minutes needed to read `words`, rounded up.
#[must_use]
pub const fn reading_time_minutes(words: usize, words_per_minute: NonZeroUsize) -> usize {
    words.div_ceil(words_per_minute.get())
}

/// Mean word length rounded to two decimals, `0.0` when there are no words.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_word_length(characters_without_spaces: usize, words: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    let ratio = characters_without_spaces as f64 / words as f64;
    (ratio * 100.0).round() / 100.0
}
