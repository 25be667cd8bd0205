//! Audio catalog generation.
//!
//! Writes a `songs.json` into each configured audio directory, mapping every
//! track to its download URL on the repository mirror. Directories are
//! independent: one failing does not stop the others.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::write_file;
use crate::error::GenerateError;
use crate::settings::{SongsSettings, resolve};

/// Name of the file written into each audio directory.
pub const SONGS_FILE: &str = "songs.json";

/// One track entry in `songs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    /// File name of the track.
    pub title: String,
    /// Download URL.
    pub file: String,
}

/// Outcome for a single audio directory.
#[derive(Debug)]
pub enum SongsDirOutcome {
    /// `songs.json` was written with this many entries.
    Written { path: PathBuf, count: usize },
    /// The directory has no matching files; nothing was written.
    Empty,
    Failed(String),
}

/// Per-directory results of a songs run.
#[derive(Debug, Default)]
pub struct SongsSummary {
    pub dirs: Vec<(String, SongsDirOutcome)>,
}

impl SongsSummary {
    /// Total number of entries written across all directories.
    pub fn total_files(&self) -> usize {
        self.dirs
            .iter()
            .map(|(_, outcome)| match outcome {
                SongsDirOutcome::Written { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> usize {
        self.dirs
            .iter()
            .filter(|(_, o)| matches!(o, SongsDirOutcome::Failed(_)))
            .count()
    }
}

/// Percent-encode a URL component the way JavaScript's `encodeURIComponent` does.
///
/// `urlencoding` leaves only `A-Z a-z 0-9 - . _ ~` alone; the JavaScript
/// function additionally keeps `! ' ( ) *`.
pub fn encode_uri_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Directory as it appears in URLs: forward slashes, no leading `./`.
fn url_dir(dir: &str) -> String {
    let dir = dir.replace('\\', "/");
    let dir = dir.strip_prefix("./").unwrap_or(&dir);
    dir.trim_matches('/').to_string()
}

/// Build the entry for one track file.
pub fn song_entry(base_url: &str, dir: &str, file_name: &str) -> SongEntry {
    SongEntry {
        title: file_name.to_string(),
        file: format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            url_dir(dir),
            encode_uri_component(file_name)
        ),
    }
}

/// List the tracks in `path`, sorted by file name.
pub fn list_songs(path: &Path, dir: &str, settings: &SongsSettings) -> io::Result<Vec<SongEntry>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let matches = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&settings.extension));
        if matches && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names
        .iter()
        .map(|name| song_entry(&settings.base_url, dir, name))
        .collect())
}

fn process_dir(project_root: &Path, dir: &str, settings: &SongsSettings) -> Result<SongsDirOutcome, String> {
    let path = resolve(project_root, dir);
    let songs = list_songs(&path, dir, settings).map_err(|e| e.to_string())?;
    if songs.is_empty() {
        return Ok(SongsDirOutcome::Empty);
    }
    let json = serde_json::to_string_pretty(&songs).map_err(|e| e.to_string())?;
    let out = path.join(SONGS_FILE);
    write_file(&out, &json).map_err(|e: GenerateError| e.to_string())?;
    Ok(SongsDirOutcome::Written {
        path: out,
        count: songs.len(),
    })
}

/// Write `songs.json` for every configured directory.
pub fn generate_songs(project_root: &Path, settings: &SongsSettings) -> SongsSummary {
    let mut summary = SongsSummary::default();
    for dir in &settings.dirs {
        let outcome = match process_dir(project_root, dir, settings) {
            Ok(SongsDirOutcome::Written { path, count }) => {
                log::info!("Wrote {} ({} files)", path.display(), count);
                SongsDirOutcome::Written { path, count }
            }
            Ok(outcome) => {
                log::warn!("No .{} files found in {}", settings.extension, dir);
                outcome
            }
            Err(msg) => {
                log::error!("Failed to process {}: {}", dir, msg);
                SongsDirOutcome::Failed(msg)
            }
        };
        summary.dirs.push((dir.clone(), outcome));
    }
    summary
}

#[cfg(test)]
#[path = "tests/songs_tests.rs"]
mod tests;
