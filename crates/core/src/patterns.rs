// crates/core/src/patterns.rs
use regex::Regex;
use std::sync::OnceLock;

/// Whitespace as browsers' `\s` and `String.prototype.trim` see it: Unicode
/// `White_Space` minus U+0085 (NEXT LINE), plus U+FEFF (BYTE ORDER MARK).
pub(crate) fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// One or more sentence terminators. Ellipses and `?!` collapse into one separator.
pub(crate) fn sentence_terminators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern is valid"))
}

/// A blank line: newline, optional whitespace (possibly further newlines), newline.
pub(crate) fn paragraph_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\n[[\s\x{FEFF}]&&[^\x{85}]]*\n").expect("paragraph break pattern is valid")
    })
}
