//! Batch import reconciliation
//!
//! Merges decoded records into the catalog one at a time, in input order.
//! Each record lands in exactly one report bucket: added, duplicate,
//! invalid or error. A bad record never aborts the batch.

use std::collections::HashSet;

use crate::config::AppConfig;
use crate::error::Result;
use crate::import_export::{csv, html, normalize::normalize, ExchangeFormat};
use crate::models::{
    AddedLink, CatalogEntry, FailedImport, FailureReason, ImportResult, ImportedRecord, Link,
};

/// Write half of the catalog store, supplied by the caller
///
/// Invoked once per accepted record; a failure marks that record as
/// `error` in the report and the batch moves on.
pub trait LinkStore {
    fn add_link(&mut self, link: &Link) -> Result<()>;
}

/// Decode a document in the given format and reconcile it into the store
///
/// Fails only when the document itself cannot be decoded; per-record
/// problems are recovered into the report.
pub fn import(
    content: &str,
    format: ExchangeFormat,
    catalog: &[CatalogEntry],
    store: &mut dyn LinkStore,
    config: &AppConfig,
) -> Result<ImportResult> {
    let records = match format {
        ExchangeFormat::Csv => csv::decode(content)?,
        ExchangeFormat::BookmarksHtml => html::decode(content)?,
    };
    Ok(reconcile(&records, catalog, store, config))
}

/// Reconcile raw records against a catalog snapshot
///
/// Per record, in input order: normalize (else `invalid`), check the
/// name case-insensitively against the catalog plus everything accepted
/// earlier in this run (else `duplicate`), record the category as new or
/// existing, then write through the store (else `error`). Writes are
/// strictly sequential; a record only joins the duplicate set once its
/// write succeeded, so a failed write leaves the name free for a retry
/// later in the same file.
pub fn reconcile(
    records: &[ImportedRecord],
    catalog: &[CatalogEntry],
    store: &mut dyn LinkStore,
    config: &AppConfig,
) -> ImportResult {
    let mut result = ImportResult::default();

    let mut seen_names: HashSet<String> = catalog
        .iter()
        .map(|entry| entry.name.to_lowercase())
        .collect();
    let mut seen_categories: HashSet<String> = catalog
        .iter()
        .map(|entry| entry.category.clone())
        .collect();

    for record in records {
        let link = match normalize(record, config) {
            Ok(link) => link,
            Err(reason) => {
                log::debug!("skipping invalid record: {}", reason);
                result.failed.push(FailedImport {
                    name: best_effort(record.name.as_deref(), "Unnamed"),
                    url: best_effort(record.production_url.as_deref(), "No URL"),
                    reason: FailureReason::Invalid,
                });
                continue;
            }
        };

        if seen_names.contains(&link.name.to_lowercase()) {
            result.failed.push(FailedImport {
                name: link.name.clone(),
                url: link.environments.production.clone(),
                reason: FailureReason::Duplicate,
            });
            continue;
        }

        if seen_categories.insert(link.category.clone()) {
            result.categories.new.push(link.category.clone());
        } else {
            result.categories.existing.push(link.category.clone());
        }

        if let Err(err) = store.add_link(&link) {
            log::warn!("failed to store link '{}': {}", link.name, err);
            result.failed.push(FailedImport {
                name: link.name.clone(),
                url: link.environments.production.clone(),
                reason: FailureReason::Error,
            });
            continue;
        }

        seen_names.insert(link.name.to_lowercase());
        result.added.push(AddedLink {
            name: link.name,
            url: link.environments.production,
        });
    }

    log::info!("import reconciled: {}", result.summary());
    result
}

fn best_effort(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
