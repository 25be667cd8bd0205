//! Generator progress reporting.

use std::path::Path;

/// Trait for receiving progress updates from a generator run.
pub trait GenerateProgress {
    /// Called once the game directories have been enumerated.
    fn on_found(&self, total: usize);

    /// Called after each game record is built.
    fn on_game(&self, current: usize, total: usize, id: u64, name: &str);

    /// Called after an output file has been written.
    fn on_written(&self, label: &str, path: &Path);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl GenerateProgress for SilentProgress {
    fn on_found(&self, _total: usize) {}
    fn on_game(&self, _current: usize, _total: usize, _id: u64, _name: &str) {}
    fn on_written(&self, _label: &str, _path: &Path) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl GenerateProgress for LogProgress {
    fn on_found(&self, total: usize) {
        log::info!("Found {} game directories", total);
    }

    fn on_game(&self, current: usize, total: usize, id: u64, name: &str) {
        log::info!("  [{}/{}] {} ({})", current, total, name, id);
    }

    fn on_written(&self, label: &str, path: &Path) {
        log::info!("{} written to {}", label, path.display());
    }
}
