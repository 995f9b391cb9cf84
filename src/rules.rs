/*!
 * Name and directory based exclusion rules
 */

use std::collections::HashSet;
use std::path::Path;

/// Pure, stateless predicate over path components
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    /// Exact file names to ignore
    files: HashSet<String>,
    /// Directory names that exclude everything beneath them
    dirs: HashSet<String>,
}

impl IgnoreRules {
    /// Create rules from the configured name sets
    pub fn new(files: HashSet<String>, dirs: HashSet<String>) -> Self {
        Self { files, dirs }
    }

    /// Check whether a file is ignored, either by its base name or by any
    /// ancestor directory name anywhere in its path
    pub fn should_ignore(&self, rel_path: &Path) -> bool {
        if let Some(name) = rel_path.file_name() {
            if self.files.contains(name.to_string_lossy().as_ref()) {
                return true;
            }
        }

        rel_path
            .components()
            .any(|c| self.dirs.contains(c.as_os_str().to_string_lossy().as_ref()))
    }
}
