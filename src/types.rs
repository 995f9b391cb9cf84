/*!
 * Core types and data structures for the ctxgen application
 */

use std::fmt;
use std::path::PathBuf;

/// Outcome of the inclusion decision for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// File content is part of the report
    Included,
    /// Matched an ignored file name or an ignored ancestor directory
    IgnoredByRule,
    /// Classified as binary or otherwise non-text
    NotText,
    /// Including the file would push the running total over the byte budget
    OverBudget {
        /// The budget the file would have exceeded
        budget: u64,
    },
}

impl Verdict {
    /// Human-readable label, used verbatim in the report tree
    pub fn label(&self) -> String {
        match self {
            Verdict::Included => "Included".to_string(),
            Verdict::IgnoredByRule => "Excluded: ignored by name/dir".to_string(),
            Verdict::NotText => "Excluded: binary or non-text".to_string(),
            Verdict::OverBudget { budget } => {
                format!("Excluded: adding this would exceed {} bytes limit", budget)
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-file decision record, created once during the decision pass and
/// read-only afterwards
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root (identity key)
    pub rel_path: PathBuf,
    /// Size in bytes at scan time
    pub size: u64,
    /// Inclusion decision and its reason
    pub verdict: Verdict,
}

impl FileRecord {
    /// Whether the file's content belongs in the report
    pub fn included(&self) -> bool {
        self.verdict == Verdict::Included
    }
}
