use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Average adult silent reading speed used when nothing else is configured.
pub const DEFAULT_WORDS_PER_MINUTE: NonZeroUsize = NonZeroUsize::new(200).unwrap();

/// Knobs that influence the derived metrics.
///
/// The defaults reproduce the plain [`compute`](crate::compute) results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub words_per_minute: NonZeroUsize,
}

impl AnalysisConfig {
    #[must_use]
    pub const fn new(words_per_minute: NonZeroUsize) -> Self {
        Self { words_per_minute }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}
