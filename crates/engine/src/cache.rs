// crates/engine/src/cache.rs
use text_stats_core::{AnalysisConfig, TextMetrics, compute_with};
use xxhash_rust::xxh3::xxh3_64;

#[derive(Debug, Clone)]
struct CacheEntry {
    hash: u64,
    text: String,
    metrics: TextMetrics,
}

impl CacheEntry {
    fn matches(&self, hash: u64, text: &str) -> bool {
        self.hash == hash && self.text == text
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Remembers the metrics of the last input so unchanged text is not recounted.
///
/// Only one entry is kept: any different input replaces it.
#[derive(Debug, Clone, Default)]
pub struct MetricsCache {
    config: AnalysisConfig,
    entry: Option<CacheEntry>,
    stats: CacheStats,
}

impl MetricsCache {
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            entry: None,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Replace the analysis settings. A different config drops the cached entry.
    pub fn set_config(&mut self, config: AnalysisConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    pub fn get_or_compute(&mut self, text: &str) -> TextMetrics {
        let hash = xxh3_64(text.as_bytes());

        if let Some(entry) = self.entry.as_ref().filter(|e| e.matches(hash, text)) {
            self.stats.hits += 1;
            log::trace!("metrics cache hit ({} bytes)", text.len());
            return entry.metrics;
        }

        self.stats.misses += 1;
        log::debug!("metrics cache miss, recomputing {} bytes", text.len());

        let metrics = compute_with(text, &self.config);
        self.entry = Some(CacheEntry {
            hash,
            text: text.to_owned(),
            metrics,
        });
        metrics
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use text_stats_core::compute;

    #[test]
    fn repeated_input_is_a_hit() {
        let mut cache = MetricsCache::default();
        let first = cache.get_or_compute("Hello world.");
        let second = cache.get_or_compute("Hello world.");

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn changed_input_recomputes() {
        let mut cache = MetricsCache::default();
        cache.get_or_compute("one");
        let metrics = cache.get_or_compute("one two");

        assert_eq!(metrics, compute("one two"));
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn only_the_last_input_is_remembered() {
        let mut cache = MetricsCache::default();
        cache.get_or_compute("a");
        cache.get_or_compute("b");
        cache.get_or_compute("a");
        assert_eq!(cache.stats().misses, 3);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut cache = MetricsCache::default();
        cache.get_or_compute("text");
        cache.invalidate();
        cache.get_or_compute("text");
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn new_config_drops_entry() {
        let mut cache = MetricsCache::default();
        let text = "word ".repeat(300);
        assert_eq!(cache.get_or_compute(&text).reading_time, 2);

        cache.set_config(AnalysisConfig::new(NonZeroUsize::new(1000).unwrap()));
        assert_eq!(cache.get_or_compute(&text).reading_time, 1);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn same_config_keeps_entry() {
        let mut cache = MetricsCache::default();
        cache.get_or_compute("keep me");
        cache.set_config(AnalysisConfig::default());
        cache.get_or_compute("keep me");
        assert_eq!(cache.stats().hits, 1);
    }
}
