/*!
 * File enumeration for the scan
 */

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect every regular file under `root`, as paths relative to it,
/// sorted by path components.
///
/// The sort order is load-bearing: the byte budget is a running total
/// consumed in this order, so it must be stable across runs. Symlinks are
/// not followed, and entries that cannot be read are skipped.
pub fn gather_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();

    files.sort();
    files
}
