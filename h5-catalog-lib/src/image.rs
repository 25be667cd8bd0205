//! Thumbnail discovery for a game directory.
//!
//! Only file names are inspected, never image contents. Rules run in order
//! and the first hit wins:
//!
//! 1. An image directly in the game directory whose name contains `logo`
//!    or `icon`.
//! 2. For each of [`IMAGE_SUBDIRS`] that exists: an image whose name
//!    contains `logo`, `icon`, `cover` or `banner`, else the first image.
//! 3. The configured default thumbnail.
//!
//! Directory listings are sorted by file name so reruns pick the same file.

use std::fs;
use std::io;
use std::path::Path;

use h5_catalog_core::util::{is_image_name, name_contains_any, public_path};

/// Conventional asset folders searched for thumbnails, in priority order.
pub const IMAGE_SUBDIRS: &[&str] = &["images", "img", "imgs", "bitmap", "_img", "picture"];

/// Keywords for a thumbnail at the game's top level.
pub const ROOT_KEYWORDS: &[&str] = &["logo", "icon"];

/// Keywords for a preferred thumbnail inside an image folder.
pub const SUBDIR_KEYWORDS: &[&str] = &["logo", "icon", "cover", "banner"];

/// What a rule gets to look at.
pub struct ImageContext<'a> {
    pub game_dir: &'a Path,
    /// The game directory's own name.
    pub dir_name: &'a str,
    /// Public URL prefix for the games root, e.g. `/games/yxmb`.
    pub public_root: &'a str,
}

impl ImageContext<'_> {
    fn url(&self, parts: &[&str]) -> String {
        let mut segments = vec![self.public_root, self.dir_name];
        segments.extend_from_slice(parts);
        public_path(segments.as_slice())
    }
}

/// One step of the thumbnail heuristic.
pub struct ImageRule {
    /// Short label used in debug logs.
    pub label: &'static str,
    pub locate: fn(&ImageContext<'_>) -> io::Result<Option<String>>,
}

/// Image rules in priority order.
pub const IMAGE_RULES: &[ImageRule] = &[
    ImageRule {
        label: "root keyword",
        locate: root_keyword_image,
    },
    ImageRule {
        label: "image folder",
        locate: image_folder_image,
    },
];

/// Sorted names of the regular files in `dir`. Non-UTF-8 names are skipped.
fn list_file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::debug!("Skipping non-UTF-8 file name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

/// Rule 1: a logo/icon image directly in the game directory.
pub fn root_keyword_image(ctx: &ImageContext<'_>) -> io::Result<Option<String>> {
    let found = list_file_names(ctx.game_dir)?
        .into_iter()
        .find(|name| is_image_name(name) && name_contains_any(name, ROOT_KEYWORDS));
    Ok(found.map(|name| ctx.url(&[name.as_str()])))
}

/// Rule 2: the best image from the first image folder that has any.
pub fn image_folder_image(ctx: &ImageContext<'_>) -> io::Result<Option<String>> {
    for &subdir in IMAGE_SUBDIRS {
        let dir = ctx.game_dir.join(subdir);
        if !dir.is_dir() {
            continue;
        }
        let images: Vec<String> = list_file_names(&dir)?
            .into_iter()
            .filter(|name| is_image_name(name))
            .collect();
        let preferred = images
            .iter()
            .find(|name| name_contains_any(name, SUBDIR_KEYWORDS))
            .or_else(|| images.first());
        if let Some(name) = preferred {
            return Ok(Some(ctx.url(&[subdir, name.as_str()])));
        }
    }
    Ok(None)
}

/// Run [`IMAGE_RULES`] in order. `Ok(None)` means no rule found anything.
pub fn locate_image(ctx: &ImageContext<'_>) -> io::Result<Option<String>> {
    for rule in IMAGE_RULES {
        if let Some(url) = (rule.locate)(ctx)? {
            log::debug!("Image rule '{}' matched: {}", rule.label, url);
            return Ok(Some(url));
        }
    }
    Ok(None)
}

/// Thumbnail lookup with a fixed public root and default image.
#[derive(Debug, Clone)]
pub struct ImageLocator {
    public_root: String,
    default_image: String,
}

impl ImageLocator {
    pub fn new(public_root: impl Into<String>, default_image: impl Into<String>) -> Self {
        Self {
            public_root: public_root.into(),
            default_image: default_image.into(),
        }
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Find a thumbnail URL, falling back to the default image when no rule matches.
    ///
    /// I/O errors are returned to the caller, which decides how to degrade.
    pub fn locate(&self, game_dir: &Path, dir_name: &str) -> io::Result<String> {
        let ctx = ImageContext {
            game_dir,
            dir_name,
            public_root: &self.public_root,
        };
        Ok(locate_image(&ctx)?.unwrap_or_else(|| self.default_image.clone()))
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
