//! Catalog serialization.
//!
//! Each output format is a [`CatalogWriter`] that renders the same in-memory
//! [`Catalog`] to a string. Rendering never looks at another writer's output.

use std::fs;
use std::path::{Path, PathBuf};

use h5_catalog_core::Catalog;

use crate::error::GenerateError;

/// Banner line at the top of the generated TypeScript module.
pub const TS_BANNER: &str = "// 游戏数据常量";

/// A serializer for the games catalog.
pub trait CatalogWriter {
    /// Short label for logs and error messages.
    fn name(&self) -> &'static str;

    fn render(&self, catalog: &Catalog) -> Result<String, GenerateError>;
}

/// Pretty-printed JSON array with 2-space indentation.
pub struct JsonWriter;

impl CatalogWriter for JsonWriter {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn render(&self, catalog: &Catalog) -> Result<String, GenerateError> {
        serde_json::to_string_pretty(catalog).map_err(|e| GenerateError::Render {
            target: self.name(),
            source: e,
        })
    }
}

/// TypeScript module exporting the catalog as a named constant.
pub struct TsConstWriter {
    const_name: String,
}

impl TsConstWriter {
    pub fn new(const_name: impl Into<String>) -> Self {
        Self {
            const_name: const_name.into(),
        }
    }
}

impl CatalogWriter for TsConstWriter {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn render(&self, catalog: &Catalog) -> Result<String, GenerateError> {
        let body = serde_json::to_string_pretty(catalog).map_err(|e| GenerateError::Render {
            target: self.name(),
            source: e,
        })?;
        Ok(format!(
            "{}\nexport const {} = {};\n",
            TS_BANNER, self.const_name, body
        ))
    }
}

/// A rendered output waiting to be written.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub label: &'static str,
    pub path: PathBuf,
    pub contents: String,
}

/// Render every target before anything touches the disk.
pub fn render_all(
    catalog: &Catalog,
    targets: &[(&dyn CatalogWriter, PathBuf)],
) -> Result<Vec<RenderedOutput>, GenerateError> {
    targets
        .iter()
        .map(|(writer, path)| {
            Ok(RenderedOutput {
                label: writer.name(),
                path: path.clone(),
                contents: writer.render(catalog)?,
            })
        })
        .collect()
}

/// Write a file, creating its parent directories and replacing prior content.
pub fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let map_err = |e| GenerateError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(map_err)?;
        }
    }
    fs::write(path, contents).map_err(map_err)
}

#[cfg(test)]
#[path = "tests/emit_tests.rs"]
mod tests;
