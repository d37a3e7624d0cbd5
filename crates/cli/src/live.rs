// crates/cli/src/live.rs
use std::io::{BufRead, Write};

use text_stats_engine::Report;
use text_stats_engine::config::Config;
use text_stats_engine::options::{LiveOutput, OutputFormat};
use text_stats_engine::session::TextSession;

use crate::error::Result;
use crate::presentation::render;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Read `reader` line by line and redraw the report after every line.
///
/// Lines are appended exactly as read, line endings included, so the final
/// text matches what one-shot mode sees for the same input. Invalid UTF-8 is
/// replaced rather than rejected.
///
/// Returns the number of updates written, the initial empty render included.
///
/// # Errors
///
/// Fails on an invalid configuration or when reading or writing fails.
pub fn run_live<R: BufRead, W: Write>(
    config: &Config,
    mut reader: R,
    out: &mut W,
) -> Result<usize> {
    let mut session = TextSession::new(config)?;
    let mut updates = 0;

    log::info!("starting live mode ({:?} output)", config.live_output);
    emit(&mut session, config, out)?;
    updates += 1;

    let mut line_buf = Vec::new();
    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        session.push_str(&String::from_utf8_lossy(&line_buf));
        emit(&mut session, config, out)?;
        updates += 1;
    }

    let stats = session.cache_stats();
    log::debug!(
        "live mode finished: {updates} updates, {} cache hits, {} misses, {} limit crossings",
        stats.hits,
        stats.misses,
        session.limit_crossings()
    );
    Ok(updates)
}

fn emit<W: Write>(session: &mut TextSession, config: &Config, out: &mut W) -> Result<()> {
    let report = Report::from_session(session, config);

    match config.live_output {
        LiveOutput::Full => {
            write!(out, "{CLEAR_SCREEN}")?;
            let rendered = render(&report, config.format)?;
            writeln!(out, "{}", rendered.trim_end_matches('\n'))?;
        }
        LiveOutput::Jsonl => {
            writeln!(out, "{}", render(&report, OutputFormat::Jsonl)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
