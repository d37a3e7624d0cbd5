// crates/engine/src/lib.rs
use serde::{Deserialize, Serialize};
use text_stats_core::TextMetrics;

pub mod cache;
pub mod config;
pub mod error;
pub mod options;
pub mod session;

use crate::config::Config;
use crate::error::Result;
use crate::session::{LimitStatus, TextSession};

/// Everything the presentation layer renders for one text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub metrics: TextMetrics,
    pub limit: LimitStatus,
    pub words_per_minute: usize,
}

impl Report {
    /// Snapshot the current state of `session`.
    pub fn from_session(session: &mut TextSession, config: &Config) -> Self {
        Self {
            metrics: session.metrics(),
            limit: session.limit_status(),
            words_per_minute: config.words_per_minute,
        }
    }
}

/// Analyze a complete text in one shot.
///
/// # Errors
///
/// Returns an error only when `config` is invalid; the text itself can never
/// make the analysis fail.
pub fn analyze(config: &Config, text: &str) -> Result<Report> {
    let mut session = TextSession::new(config)?;
    session.set_text(text);
    Ok(Report::from_session(&mut session, config))
}
