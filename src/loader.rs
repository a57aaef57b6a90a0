use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal substring marking the start of the actual book text in a
/// Project Gutenberg file.
pub const START_MARKER: &str = "*** START OF";
/// Literal substring marking the start of the trailing license block.
pub const END_MARKER: &str = "*** END OF";

/// Verse lines carry a `NNN:NNN` chapter:verse prefix, e.g. `001:001`.
static VERSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}:\d{3}").expect("verse pattern compiles"));

/// True if the line starts with a `NNN:NNN` verse marker.
pub fn is_verse_line(line: &str) -> bool {
    VERSE_LINE.is_match(line)
}

/// Read a Gospel source file and strip its boilerplate.
///
/// The file is read fully into memory. A missing or unreadable file is a
/// hard error for the run; there is no partial result.
pub fn load_document(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    Ok(clean_document(&raw))
}

/// Strip Project Gutenberg boilerplate and the pre-verse header region.
///
/// Stages, each degrading gracefully when its landmark is absent:
/// 1. Drop a leading UTF-8 byte-order mark.
/// 2. Keep from the first `*** START OF` marker (marker line retained).
/// 3. Keep only the text before the first `*** END OF` marker.
/// 4. Drop every line before the first verse line (`NNN:NNN` prefix); if no
///    verse line exists, the marker-trimmed text is kept as-is.
pub fn clean_document(raw: &str) -> String {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let text = match text.find(START_MARKER) {
        Some(idx) => &text[idx..],
        None => text,
    };
    let text = match text.find(END_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    };

    strip_header(text)
}

/// Discard header lines up to (not including) the first verse line.
fn strip_header(text: &str) -> String {
    match text.lines().position(is_verse_line) {
        Some(first_verse) => text
            .lines()
            .skip(first_verse)
            .collect::<Vec<_>>()
            .join("\n"),
        None => text.to_string(),
    }
}
