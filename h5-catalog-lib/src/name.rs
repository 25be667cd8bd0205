//! Display-name extraction from a game's entry document.
//!
//! Bundled games are third-party HTML5 builds with no manifest, so the name
//! is recovered from `index.html` by an ordered list of [`NameRule`]s. The
//! first rule that produces non-empty text wins.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// File name of a game's entry document.
pub const ENTRY_DOCUMENT: &str = "index.html";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").expect("static pattern"));

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[1-3][^>]*>([^<]+)</h[1-3]>").expect("static pattern")
});

/// One step of the name heuristic.
pub struct NameRule {
    /// Short label used in debug logs.
    pub label: &'static str,
    pub extract: fn(&str) -> Option<String>,
}

/// Name rules in priority order.
pub const NAME_RULES: &[NameRule] = &[
    NameRule {
        label: "title",
        extract: title_text,
    },
    NameRule {
        label: "heading",
        extract: heading_text,
    },
];

/// Trimmed text of the first `<title>` element, if non-empty.
///
/// Only the first match is considered: a blank first title does not fall
/// through to a later one.
pub fn title_text(html: &str) -> Option<String> {
    first_capture(&TITLE_RE, html)
}

/// Trimmed text of the first `<h1>`..`<h3>` element, if non-empty.
pub fn heading_text(html: &str) -> Option<String> {
    first_capture(&HEADING_RE, html)
}

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    let caps = re.captures(html)?;
    let text = caps.get(1)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Run [`NAME_RULES`] over a document.
pub fn name_from_document(html: &str) -> Option<String> {
    NAME_RULES.iter().find_map(|rule| {
        let found = (rule.extract)(html);
        if let Some(ref name) = found {
            log::debug!("Name rule '{}' matched: {}", rule.label, name);
        }
        found
    })
}

/// Read the entry document of `game_dir` and recover a name from it.
///
/// Returns `Ok(None)` when there is no entry document or no rule matched.
/// Invalid UTF-8 is replaced rather than treated as an error.
pub fn read_entry_name(game_dir: &Path) -> io::Result<Option<String>> {
    let path = game_dir.join(ENTRY_DOCUMENT);
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(&path)?;
    let html = String::from_utf8_lossy(&bytes);
    Ok(name_from_document(&html))
}

/// Recover a display name for `game_dir`, or an empty string.
///
/// Read errors are logged and treated as "no name found".
pub fn extract_name(game_dir: &Path) -> String {
    match read_entry_name(game_dir) {
        Ok(name) => name.unwrap_or_default(),
        Err(e) => {
            log::warn!(
                "Failed to read {}: {}",
                game_dir.join(ENTRY_DOCUMENT).display(),
                e
            );
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/name_tests.rs"]
mod tests;
