use crate::error::{EngineError, Result};
use crate::options::{LiveOutput, OutputFormat};
use derive_builder::Builder;
use std::num::NonZeroUsize;
use text_stats_core::AnalysisConfig;
use text_stats_core::config::DEFAULT_WORDS_PER_MINUTE;

/// Display cap shown next to the character counter.
pub const DEFAULT_CHAR_LIMIT: usize = 5000;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "DEFAULT_WORDS_PER_MINUTE.get()")]
    pub words_per_minute: usize,
    #[builder(default = "DEFAULT_CHAR_LIMIT")]
    pub char_limit: usize,
    #[builder(default = "true")]
    pub warn_on_limit: bool,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub live: bool,
    #[builder(default)]
    pub live_output: LiveOutput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE.get(),
            char_limit: DEFAULT_CHAR_LIMIT,
            warn_on_limit: true,
            format: OutputFormat::default(),
            live: false,
            live_output: LiveOutput::default(),
        }
    }
}

impl Config {
    /// Check the settings that the computation cannot accept.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when the reading speed or the display cap is zero.
    pub fn validate(&self) -> Result<()> {
        self.analysis_config()?;
        if self.char_limit == 0 {
            return Err(EngineError::Config(
                "character limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The subset of settings the core computation needs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when `words_per_minute` is zero.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        NonZeroUsize::new(self.words_per_minute)
            .map(AnalysisConfig::new)
            .ok_or_else(|| {
                EngineError::Config("words per minute must be greater than zero".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.words_per_minute, default.words_per_minute);
        assert_eq!(built.char_limit, DEFAULT_CHAR_LIMIT);
        assert!(built.warn_on_limit);
        assert_eq!(built.format, OutputFormat::Table);
        assert!(!built.live);
    }

    #[test]
    fn zero_reading_speed_is_rejected() {
        let config = ConfigBuilder::default().words_per_minute(0usize).build().unwrap();
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = ConfigBuilder::default().char_limit(0usize).build().unwrap();
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn analysis_config_carries_reading_speed() {
        let config = ConfigBuilder::default().words_per_minute(250usize).build().unwrap();
        let analysis = config.analysis_config().unwrap();
        assert_eq!(analysis.words_per_minute.get(), 250);
    }
}
