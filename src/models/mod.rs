pub mod import;
pub mod link;
pub mod report;

// Re-export model types for convenience
pub use import::ImportedRecord;
pub use link::{CatalogEntry, Environments, Link};
pub use report::{AddedLink, CategoryReport, FailedImport, FailureReason, ImportResult};
