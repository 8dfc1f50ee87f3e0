use serde::{Deserialize, Serialize};

/// Deployment URLs attached to a link
///
/// `production` is required; a link without it is invalid. Absent staging
/// and integration URLs stay `None` rather than empty strings so that
/// downstream consumers can tell a single-environment link from a
/// multi-environment one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Environments {
    pub production: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl Environments {
    /// Environment set with only a production URL
    pub fn production_only(production: String) -> Self {
        Self {
            production,
            staging: None,
            integration: None,
        }
    }
}

/// A validated catalog link with all its metadata
///
/// `name` is the natural key: unique within the catalog, compared
/// case-insensitively during reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub environments: Environments,
}

/// One row of the catalog snapshot supplied by the caller at import time:
/// the minimum the reconciler needs for duplicate detection and category
/// bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
}

impl CatalogEntry {
    pub fn new(name: String, category: String) -> Self {
        Self { name, category }
    }
}

impl From<&Link> for CatalogEntry {
    fn from(link: &Link) -> Self {
        Self {
            name: link.name.clone(),
            category: link.category.clone(),
        }
    }
}
