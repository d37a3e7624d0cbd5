#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod counter;
mod patterns;
pub mod stats;

pub use config::AnalysisConfig;
pub use counter::{
    average_word_length, compute, compute_with, count_characters, count_characters_without_spaces,
    count_paragraphs, count_sentences, count_words, reading_time_minutes,
};
pub use stats::TextMetrics;
