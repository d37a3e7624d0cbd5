use core::fmt;

use serde::{Deserialize, Serialize};

/// Statistics derived from a single text snapshot.
///
/// A fresh value is produced for every input; it carries no identity and no
/// reference back to the text it was computed from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// Maximal runs of non-whitespace characters.
    pub words: usize,
    /// UTF-16 length of the input, whitespace included.
    pub characters: usize,
    /// UTF-16 length left after removing all whitespace.
    pub characters_without_spaces: usize,
    /// Segments closed by a run of `.`, `!` or `?`.
    pub sentences: usize,
    /// Non-blank segments separated by blank lines.
    pub paragraphs: usize,
    /// Estimated reading time in whole minutes, rounded up.
    pub reading_time: usize,
    /// `characters_without_spaces / words`, rounded to two decimals.
    pub avg_word_length: f64,
}

impl TextMetrics {
    /// True when the text contained no words at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Average word length formatted with exactly two decimals, e.g. `"5.00"`.
    #[must_use]
    pub fn avg_word_length_display(&self) -> String {
        format!("{:.2}", self.avg_word_length)
    }
}

impl fmt::Display for TextMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} chars ({} without spaces), {} sentences, {} paragraphs, {} min, {} avg",
            self.words,
            self.characters,
            self.characters_without_spaces,
            self.sentences,
            self.paragraphs,
            self.reading_time,
            self.avg_word_length_display()
        )
    }
}
