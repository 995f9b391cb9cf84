/*!
 * Annotated tree rendering
 *
 * The tree is derived purely from the records' relative paths, so a
 * directory appears only when at least one discovered file lives somewhere
 * beneath it. There is no materialized tree structure: grouping is a map
 * from parent directory to named children, and the BTreeMap key order
 * supplies the combined alphabetical sort of subdirectories and files
 * within each level.
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::FileRecord;

/// Indentation unit per depth level
const INDENT: &str = "   ";

/// A child slot within one directory level
enum Entry {
    /// Subdirectory, recursed into depth-first
    Dir,
    /// File, pointing into the record slice
    File(usize),
}

/// Render the decided file list as an indented tree. The root line is the
/// root directory's own name with a trailing separator; each file line
/// carries its verdict label in brackets.
pub fn render_tree(root_name: &str, records: &[FileRecord]) -> String {
    let mut levels: BTreeMap<PathBuf, BTreeMap<String, Entry>> = BTreeMap::new();

    for (idx, record) in records.iter().enumerate() {
        let mut parent = record
            .rel_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();

        if let Some(name) = record.rel_path.file_name() {
            levels
                .entry(parent.clone())
                .or_default()
                .insert(name.to_string_lossy().into_owned(), Entry::File(idx));
        }

        // Register every ancestor directory under its own parent so the
        // chain from the root down to this file exists in the map
        while let Some(name) = parent.file_name().map(|n| n.to_string_lossy().into_owned()) {
            let grandparent = parent
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .to_path_buf();
            levels
                .entry(grandparent.clone())
                .or_default()
                .entry(name)
                .or_insert(Entry::Dir);
            parent = grandparent;
        }
    }

    let mut lines = vec![format!("{}/", root_name)];
    render_level(&levels, records, Path::new(""), 1, &mut lines);
    lines.join("\n")
}

fn render_level(
    levels: &BTreeMap<PathBuf, BTreeMap<String, Entry>>,
    records: &[FileRecord],
    dir: &Path,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let Some(children) = levels.get(dir) else {
        return;
    };

    let indent = INDENT.repeat(depth);
    for (name, entry) in children {
        match entry {
            Entry::Dir => {
                lines.push(format!("{}{}/ [DIR]", indent, name));
                render_level(levels, records, &dir.join(name), depth + 1, lines);
            }
            Entry::File(idx) => {
                lines.push(format!(
                    "{}{} [{}]",
                    indent,
                    name,
                    records[*idx].verdict.label()
                ));
            }
        }
    }
}
