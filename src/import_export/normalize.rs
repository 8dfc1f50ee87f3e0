//! Validation and defaulting of raw imported records

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::models::{Environments, ImportedRecord, Link};

/// Turn a raw imported record into a catalog-ready link
///
/// The name and production URL are required (non-empty after trimming);
/// category and color fall back to the configured defaults, description
/// to an empty string and tags to an empty list. Staging and integration
/// URLs are kept only when non-empty, so a blank cell never reads as a
/// real environment downstream.
pub fn normalize(record: &ImportedRecord, config: &AppConfig) -> Result<Link, ValidationError> {
    let name = non_empty(record.name.as_deref()).ok_or(ValidationError::MissingName)?;
    let production = non_empty(record.production_url.as_deref())
        .ok_or(ValidationError::MissingProductionUrl)?;

    Ok(Link {
        name,
        description: non_empty(record.description.as_deref()).unwrap_or_default(),
        category: non_empty(record.category.as_deref())
            .unwrap_or_else(|| config.default_category.clone()),
        color: non_empty(record.color.as_deref()).unwrap_or_else(|| config.default_color.clone()),
        tags: record.tags.clone().unwrap_or_default(),
        environments: Environments {
            production,
            staging: non_empty(record.staging_url.as_deref()),
            integration: non_empty(record.integration_url.as_deref()),
        },
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
