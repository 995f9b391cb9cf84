/*!
 * Report assembly and orchestration
 */

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::decide::Decider;
use crate::error::Result;
use crate::report::ScanSummary;
use crate::rules::IgnoreRules;
use crate::scanner::gather_files;
use crate::tree::render_tree;
use crate::types::FileRecord;

/// Width of the dashed line under each content block header
const SEPARATOR_WIDTH: usize = 40;

/// Fixed introduction paragraph at the top of the report. Static on
/// purpose: reruns over an unmodified tree must produce byte-identical
/// output.
const INTRODUCTION: &str = "# Introduction\n\n\
This file was automatically generated by ctxgen.\n\
It scans the current codebase, excludes certain files/directories (e.g. binary files, large files, or those explicitly ignored),\n\
and includes the content of text-based files that fit within a specified size limit.\n\n\
Below is a tree view of all files (showing included or excluded status), followed by the content of included files.\n\
Finally, a summary provides the total number of files included/excluded and the total size of included content.\n\n";

/// Orchestrates the scan and writes the report file
pub struct ContextGenerator {
    config: Config,
    progress: Arc<ProgressBar>,
}

impl ContextGenerator {
    /// Create a new generator
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    fn log(&self, message: &str) {
        if self.config.verbose {
            self.progress.println(message);
        }
    }

    /// Run the full pipeline: enumerate, decide, render the tree,
    /// concatenate included content, summarize, write.
    ///
    /// The document is assembled in memory and written in a single
    /// operation. A write failure is fatal and leaves no partial file from
    /// this run behind; per-file read failures never abort the scan.
    pub fn generate(&self) -> Result<ScanSummary> {
        let start = Instant::now();
        let root = &self.config.target_dir;

        let files = gather_files(root);

        let rules = IgnoreRules::new(
            self.config.ignore_files.clone(),
            self.config.ignore_dirs.clone(),
        );
        let decider = Decider::new(rules, self.config.max_total_size);

        // Decision pass. The running total is an explicit accumulator
        // consumed in enumeration order; files whose metadata cannot be
        // read get a size of zero and fail the text check downstream.
        let mut records: Vec<FileRecord> = Vec::with_capacity(files.len());
        let mut running_total = 0u64;
        for rel_path in &files {
            self.progress.inc(1);
            let abs_path = root.join(rel_path);
            let size = fs::metadata(&abs_path).map(|m| m.len()).unwrap_or(0);

            let (record, new_total) = decider.decide(rel_path, &abs_path, size, running_total);
            if record.included() {
                self.log(&format!(
                    "Including: {} (size={} bytes)",
                    rel_path.display(),
                    size
                ));
            }
            records.push(record);
            running_total = new_total;
        }

        let root_name = fs::canonicalize(root)?
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let tree_text = render_tree(&root_name, &records);

        // Content blocks for included files, in the same order as the
        // decision pass. Invalid UTF-8 is replaced rather than aborting; a
        // file that can no longer be read keeps its verdict and its byte
        // contribution, only its block is omitted.
        let mut content = String::new();
        content.push_str("\n\n---\n## Included Files Content\n\n");
        for record in records.iter().filter(|r| r.included()) {
            let abs_path = root.join(&record.rel_path);
            match fs::read(&abs_path) {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    content.push_str(&format!(
                        "// File: {}\n{}\n{}\n\n",
                        record.rel_path.display(),
                        "-".repeat(SEPARATOR_WIDTH),
                        text
                    ));
                }
                Err(e) => {
                    self.log(&format!("Error reading {}: {}", record.rel_path.display(), e));
                }
            }
        }

        let included_files = records.iter().filter(|r| r.included()).count();
        let excluded_files = records.len() - included_files;

        let summary = format!(
            "\n\n---\n## Summary\n\n\
             Total included files: {}\n\
             Total excluded files: {}\n\
             Total included content size: {} bytes\n",
            included_files, excluded_files, running_total
        );

        let document = format!("{}{}{}{}", INTRODUCTION, tree_text, content, summary);
        fs::write(&self.config.output_file, document)?;

        Ok(ScanSummary {
            output_file: self.config.output_file.display().to_string(),
            duration: start.elapsed(),
            included_files,
            excluded_files,
            included_size: running_total,
        })
    }
}
