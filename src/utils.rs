/*!
 * Utility functions for ctxgen
 */

use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// Count regular files under `dir` for progress tracking
pub fn count_files(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count() as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Directory names ignored by default
pub static DEFAULT_IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control
        ".git",
        ".hg",
        ".svn",
        // Dependencies & build output
        "node_modules",
        "target",
        "dist",
        "build",
        // Caches & environments
        ".next",
        ".cache",
        ".venv",
        "__pycache__",
    ]
});
