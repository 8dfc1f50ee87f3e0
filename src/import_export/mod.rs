use crate::error::{LinkdeckError, Result};

pub mod csv;
pub mod export;
pub mod html;
pub mod import;
pub mod normalize;

// Re-export the pipeline entry points for convenience
pub use export::{export, export_at, export_template, export_template_at, ExportBlob};
pub use import::{import, reconcile, LinkStore};
pub use normalize::normalize;

/// The two exchange formats this pipeline converts between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeFormat {
    Csv,
    BookmarksHtml,
}

impl ExchangeFormat {
    /// Parse a format token; unknown tokens are an error, not a fallback
    pub fn from_token(token: &str) -> Result<Self> {
        match token.trim().to_lowercase().as_str() {
            "csv" => Ok(ExchangeFormat::Csv),
            "html" | "bookmarks" => Ok(ExchangeFormat::BookmarksHtml),
            _ => Err(LinkdeckError::UnsupportedFormat(token.to_string())),
        }
    }

    /// File extension used in export filenames
    pub fn extension(&self) -> &'static str {
        match self {
            ExchangeFormat::Csv => "csv",
            ExchangeFormat::BookmarksHtml => "html",
        }
    }

    /// MIME type of the exported blob
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExchangeFormat::Csv => "text/csv",
            ExchangeFormat::BookmarksHtml => "text/html",
        }
    }
}
