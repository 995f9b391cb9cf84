/*!
 * ctxgen - Generate an annotated project context file for LLM consumption
 *
 * This library scans a directory tree, decides file by file whether its
 * content belongs in the report (exclusion rules, text/binary check, byte
 * budget) and writes a single plain-text report containing an annotated
 * tree view, the concatenated content of included files and a summary.
 */

pub mod classify;
pub mod config;
pub mod decide;
pub mod error;
pub mod generator;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::Config;
pub use decide::Decider;
pub use error::{CtxgenError, Result};
pub use generator::ContextGenerator;
pub use report::{ReportFormat, Reporter, ScanSummary};
pub use rules::IgnoreRules;
pub use types::{FileRecord, Verdict};
pub use utils::{count_files, format_file_size};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
