// crates/engine/src/session.rs
use serde::{Deserialize, Serialize};
use text_stats_core::TextMetrics;

use crate::cache::{CacheStats, MetricsCache};
use crate::config::Config;
use crate::error::Result;

/// Character counter shown as `used / limit`, in UTF-16 code units like
/// [`TextMetrics::characters`].
///
/// The limit is a display hint only; text past it is still counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitStatus {
    pub used: usize,
    pub limit: usize,
    pub exceeded: bool,
}

impl LimitStatus {
    #[must_use]
    pub const fn new(used: usize, limit: usize) -> Self {
        Self {
            used,
            limit,
            exceeded: used > limit,
        }
    }
}

/// Editable text buffer whose metrics are recomputed on demand.
#[derive(Debug, Clone)]
pub struct TextSession {
    text: String,
    cache: MetricsCache,
    char_limit: usize,
    warn_on_limit: bool,
    over_limit: bool,
    limit_crossings: usize,
}

impl TextSession {
    /// # Errors
    ///
    /// Fails when `config` does not validate.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            text: String::new(),
            cache: MetricsCache::new(config.analysis_config()?),
            char_limit: config.char_limit,
            warn_on_limit: config.warn_on_limit,
            over_limit: false,
            limit_crossings: 0,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.check_limit();
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.check_limit();
    }

    /// Append `line` followed by a newline.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.check_limit();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.check_limit();
    }

    /// Metrics for the current text, reusing the last result when unchanged.
    pub fn metrics(&mut self) -> TextMetrics {
        self.cache.get_or_compute(&self.text)
    }

    #[must_use]
    pub fn limit_status(&self) -> LimitStatus {
        LimitStatus::new(self.text.encode_utf16().count(), self.char_limit)
    }

    /// How many times the text went from within the limit to above it.
    #[must_use]
    pub const fn limit_crossings(&self) -> usize {
        self.limit_crossings
    }

    #[must_use]
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn check_limit(&mut self) {
        let status = self.limit_status();
        if status.exceeded && !self.over_limit {
            self.limit_crossings += 1;
            if self.warn_on_limit {
                log::warn!(
                    "text is {} characters long, above the display limit of {}",
                    status.used,
                    status.limit
                );
            }
        }
        self.over_limit = status.exceeded;
    }
}
