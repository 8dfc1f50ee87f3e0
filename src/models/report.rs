use serde::Serialize;
use std::fmt;

/// Why one record ended up in the `failed` bucket
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureReason {
    /// A link with the same name (case-insensitive) already exists
    Duplicate,
    /// The record failed normalization (no name or no production URL)
    Invalid,
    /// The catalog store rejected the write
    Error,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            FailureReason::Duplicate => "duplicate",
            FailureReason::Invalid => "invalid",
            FailureReason::Error => "error",
        };
        write!(f, "{token}")
    }
}

/// `{name, url}` pair for a record accepted into the catalog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddedLink {
    pub name: String,
    pub url: String,
}

/// `{name, url, reason}` for a record that was not accepted
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailedImport {
    pub name: String,
    pub url: String,
    pub reason: FailureReason,
}

/// Category names bucketed by whether this run introduced them
///
/// A name appears in `new` at most once per run; every later occurrence,
/// including repeats of a category first seen in the same run, is recorded
/// in `existing`. The two buckets never share an occurrence.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CategoryReport {
    pub new: Vec<String>,
    pub existing: Vec<String>,
}

/// Report of one reconciliation run
///
/// Every input record lands in exactly one of `added` or `failed`, in
/// input order within each bucket. Partial success is the normal case:
/// callers are expected to render the full breakdown, not a pass/fail bit.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportResult {
    pub added: Vec<AddedLink>,
    pub failed: Vec<FailedImport>,
    pub categories: CategoryReport,
}

impl ImportResult {
    /// Number of failed records with the given reason
    pub fn failed_count(&self, reason: FailureReason) -> usize {
        self.failed.iter().filter(|f| f.reason == reason).count()
    }

    /// One-line count summary for logging
    pub fn summary(&self) -> String {
        format!(
            "added {}, duplicates {}, invalid {}, errors {}, new categories {}",
            self.added.len(),
            self.failed_count(FailureReason::Duplicate),
            self.failed_count(FailureReason::Invalid),
            self.failed_count(FailureReason::Error),
            self.categories.new.len()
        )
    }
}
