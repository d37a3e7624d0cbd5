// crates/cli/src/input.rs
use std::io::Read;

use crate::error::Result;

/// Resolve the text to analyze: the positional arguments joined by single
/// spaces, or everything readable from `reader` when there are none.
///
/// # Errors
///
/// Propagates read failures from `reader`.
pub fn collect_text<R: Read>(args: &[String], mut reader: R) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    log::debug!("read {} bytes from stdin", bytes.len());

    // Invalid UTF-8 is replaced instead of rejected so any input yields metrics.
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
