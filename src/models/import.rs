use serde::{Deserialize, Serialize};

/// Raw link shape produced by a codec before normalization
///
/// Every field is optional and stringly typed; absence and empty string
/// both mean "not provided". The environment URLs are flat here, mirroring
/// the CSV columns. [`crate::import_export::normalize`] is the single
/// boundary where this becomes a validated [`crate::models::Link`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportedRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub tags: Option<Vec<String>>,
    pub production_url: Option<String>,
    pub staging_url: Option<String>,
    pub integration_url: Option<String>,
}

impl ImportedRecord {
    /// Record with just a name and production URL, the two required fields
    pub fn named(name: String, production_url: String) -> Self {
        Self {
            name: Some(name),
            production_url: Some(production_url),
            ..Self::default()
        }
    }
}
