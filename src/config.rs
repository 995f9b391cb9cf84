/*!
 * Configuration handling for ctxgen
 */

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{CtxgenError, Result};
use crate::utils::DEFAULT_IGNORE_DIRS;

/// Default byte budget for included content (1 MiB)
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 1024 * 1024;

/// Command-line arguments for ctxgen
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ctxgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate an annotated project context file for LLM consumption",
    long_about = "Scans the current directory and writes a single report containing a tree view of every file with its inclusion status, the concatenated content of included text files, and a summary. Binary files, ignored names/directories and files that would push the total over the size budget are listed but not included."
)]
pub struct Args {
    /// Output file name
    #[clap(long, default_value = "project_context.txt")]
    pub output: String,

    /// Maximum total size in bytes of included file content
    #[clap(long, default_value_t = DEFAULT_MAX_TOTAL_SIZE)]
    pub max_size: u64,

    /// Comma-separated list of additional file names to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_files: Vec<String>,

    /// Comma-separated list of additional directory names to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// Print per-file inclusion logs
    #[clap(long, short)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration, immutable once built
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to scan. Always the working directory when built from the
    /// CLI; overridable so tests can point at fixtures
    pub target_dir: PathBuf,

    /// Report file path
    pub output_file: PathBuf,

    /// Byte budget for included content
    pub max_total_size: u64,

    /// File names excluded by the rules
    pub ignore_files: HashSet<String>,

    /// Directory names excluded by the rules
    pub ignore_dirs: HashSet<String>,

    /// Whether to print per-file inclusion logs
    pub verbose: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self::new(
            PathBuf::from("."),
            PathBuf::from(args.output),
            args.max_size,
            args.ignore_files,
            args.ignore_dirs,
            args.verbose,
        )
    }

    /// Build a configuration. The output file's base name and the running
    /// executable's base name are always added to the ignored file names,
    /// and the default directory table extends any user-supplied ignored
    /// directories.
    pub fn new(
        target_dir: PathBuf,
        output_file: PathBuf,
        max_total_size: u64,
        ignore_files: Vec<String>,
        ignore_dirs: Vec<String>,
        verbose: bool,
    ) -> Self {
        let mut files: HashSet<String> = ignore_files.into_iter().collect();
        if let Some(name) = output_file.file_name() {
            files.insert(name.to_string_lossy().into_owned());
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(name) = exe.file_name() {
                files.insert(name.to_string_lossy().into_owned());
            }
        }

        let mut dirs: HashSet<String> = DEFAULT_IGNORE_DIRS
            .iter()
            .map(|d| (*d).to_string())
            .collect();
        dirs.extend(ignore_dirs);

        Self {
            target_dir,
            output_file,
            max_total_size,
            ignore_files: files,
            ignore_dirs: dirs,
            verbose,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Check if the target directory exists and is readable
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(CtxgenError::Config(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        // Check if the output file's directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(CtxgenError::Config(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
