//! Game directory enumeration.
//!
//! A game lives in a directory directly under the games root whose name is
//! its numeric id (`public/games/yxmb/12`). Anything else under the root is
//! ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// How directory names are turned into game ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirNameMode {
    /// The whole name must be ASCII digits (`"12"`, `"007"`).
    #[default]
    Strict,
    /// A leading run of digits is enough (`"12abc"` is game 12), after
    /// optional leading whitespace and an optional `+`. Only decimal digits
    /// count: `"0x1A"` is game 0, not 26, and a leading `-` is rejected.
    Lenient,
}

/// A numerically named directory under the games root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDir {
    pub id: u64,
    /// The directory's own name, used verbatim in public paths.
    pub name: String,
    pub path: PathBuf,
}

/// Parse a directory name into a game id, or `None` if it is not a game directory.
pub fn parse_game_id(name: &str, mode: DirNameMode) -> Option<u64> {
    match mode {
        DirNameMode::Strict => {
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            name.parse().ok()
        }
        DirNameMode::Lenient => {
            let rest = name.trim_start();
            let rest = rest.strip_prefix('+').unwrap_or(rest);
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                return None;
            }
            rest[..digits_end].parse().ok()
        }
    }
}

/// List the game directories under `root`, sorted by ascending id.
///
/// Two names can map to the same id (`"7"` and `"007"`, or `"12"` and
/// `"12abc"` in lenient mode). The lexically first name wins and the others
/// are skipped with a warning, so ids in the result are unique.
///
/// Failing to list `root` or to stat one of its entries is fatal.
pub fn scan_game_dirs(root: &Path, mode: DirNameMode) -> Result<Vec<GameDir>, GenerateError> {
    let read_dir = fs::read_dir(root).map_err(|e| GenerateError::RootUnreadable {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| GenerateError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("Skipping non-UTF-8 entry {}", path.display());
            continue;
        };
        let Some(id) = parse_game_id(&name, mode) else {
            continue;
        };
        let metadata = fs::metadata(&path).map_err(|e| GenerateError::EntryUnreadable {
            path: path.clone(),
            source: e,
        })?;
        if !metadata.is_dir() {
            continue;
        }
        dirs.push(GameDir { id, name, path });
    }

    dirs.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.name.cmp(&b.name)));
    dirs.dedup_by(|later, kept| {
        if later.id == kept.id {
            log::warn!(
                "Directory '{}' duplicates game id {} (already taken by '{}'), skipping",
                later.name,
                later.id,
                kept.name
            );
            true
        } else {
            false
        }
    });

    Ok(dirs)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
