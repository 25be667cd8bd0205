//! Generator settings.
//!
//! Every path defaults to the layout of the H5 front-end project, so running
//! from the project root with no settings file reproduces the stock output.
//! An optional `h5-catalog.toml` next to `package.json` overrides individual
//! fields; relative paths are resolved against the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use h5_catalog_core::util::public_path;

use crate::scanner::DirNameMode;

/// File name of the optional per-project settings file.
pub const SETTINGS_FILE: &str = "h5-catalog.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for the games catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesSettings {
    /// Directory holding the numbered game folders.
    pub root: PathBuf,
    /// Segment of the public URL under `/games/` that maps to `root`.
    pub public_segment: String,
    /// JSON artifact consumed by the front-end at runtime.
    pub json_output: PathBuf,
    /// Generated TypeScript module exporting the catalog constant.
    pub ts_output: PathBuf,
    /// Name of the exported constant.
    pub ts_const_name: String,
    /// Thumbnail used when a game has no discoverable image.
    pub default_image: String,
    pub dir_names: DirNameMode,
}

impl Default for GamesSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public/games/yxmb"),
            public_segment: "yxmb".to_string(),
            json_output: PathBuf::from("public/games/games_data.json"),
            ts_output: PathBuf::from("src/common/constants/games.ts"),
            ts_const_name: "gamesData".to_string(),
            default_image: "/games/images/logo.png".to_string(),
            dir_names: DirNameMode::Strict,
        }
    }
}

impl GamesSettings {
    /// Public URL prefix of the games root, e.g. `/games/yxmb`.
    pub fn public_root(&self) -> String {
        public_path(&["games", self.public_segment.as_str()])
    }
}

/// Settings for the audio catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongsSettings {
    /// Directories to list, relative to the project root.
    pub dirs: Vec<String>,
    /// Raw-file base URL of the repository mirror hosting the audio.
    pub base_url: String,
    /// Extension (without dot, case-insensitive) of the files to list.
    pub extension: String,
}

impl Default for SongsSettings {
    fn default() -> Self {
        Self {
            dirs: vec!["public/mp3/music".to_string(), "public/mp3/book".to_string()],
            base_url: "https://gitee.com/duochan/ai-space/raw/master".to_string(),
            extension: "mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub games: GamesSettings,
    pub songs: SongsSettings,
}

impl Settings {
    /// Load `h5-catalog.toml` from `project_root`, or defaults if it is absent.
    pub fn load(project_root: &Path) -> Result<Self, SettingsError> {
        let path = settings_path(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Effective settings as a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Path of the settings file for a project.
pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_FILE)
}

/// Resolve the project root: CLI override first, then the current directory.
pub fn resolve_project_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a settings path against the project root (absolute paths pass through).
pub fn resolve(project_root: &Path, path: impl AsRef<Path>) -> PathBuf {
    project_root.join(path)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
