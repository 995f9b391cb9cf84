/*!
 * Per-file inclusion decisions
 */

use std::path::Path;

use crate::classify::is_text_file;
use crate::rules::IgnoreRules;
use crate::types::{FileRecord, Verdict};

/// Applies the exclusion rules, the text check and the byte budget to one
/// candidate file at a time
pub struct Decider {
    rules: IgnoreRules,
    budget: u64,
}

impl Decider {
    /// Create a decider for one scan
    pub fn new(rules: IgnoreRules, budget: u64) -> Self {
        Self { rules, budget }
    }

    /// Decide a single file.
    ///
    /// The running total of included bytes is threaded through explicitly:
    /// the caller passes the current total and receives the updated one.
    /// Checks run in fixed precedence so exactly one reason is ever
    /// recorded: ignore rules, then the text check, then the budget. The
    /// budget check is strictly additive per candidate: a file rejected on
    /// budget grounds consumes nothing, so a later smaller file may still
    /// fit.
    pub fn decide(
        &self,
        rel_path: &Path,
        abs_path: &Path,
        size: u64,
        running_total: u64,
    ) -> (FileRecord, u64) {
        let verdict = if self.rules.should_ignore(rel_path) {
            Verdict::IgnoredByRule
        } else if !is_text_file(abs_path) {
            Verdict::NotText
        } else if running_total + size > self.budget {
            Verdict::OverBudget {
                budget: self.budget,
            }
        } else {
            Verdict::Included
        };

        let new_total = if verdict == Verdict::Included {
            running_total + size
        } else {
            running_total
        };

        (
            FileRecord {
                rel_path: rel_path.to_path_buf(),
                size,
                verdict,
            },
            new_total,
        )
    }
}
