/// Custom error type for the linkdeck library
///
/// Using `thiserror` crate for automatic `Error` trait implementation and
/// `From` conversions. Fatal conditions (unparseable document, unknown
/// export format) live here; per-record validation failures are the
/// separate [`ValidationError`] so the reconciler can classify them
/// without aborting a batch.
#[derive(Debug, thiserror::Error)]
pub enum LinkdeckError {
    /// The input document cannot be parsed at all (e.g. CSV with no header row)
    #[error("Format error: {0}")]
    Format(String),

    /// A single record is structurally incomplete
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import or export requested with an unknown format token
    #[error("Unsupported exchange format: {0}")]
    UnsupportedFormat(String),

    /// HTML parsing errors
    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    /// The catalog store rejected a write
    #[error("Catalog store error: {0}")]
    Store(String),

    /// I/O errors (config file loading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),
}

/// Result type alias using LinkdeckError
pub type Result<T> = std::result::Result<T, LinkdeckError>;

impl From<serde_yaml::Error> for LinkdeckError {
    fn from(err: serde_yaml::Error) -> Self {
        LinkdeckError::Yaml(err.to_string())
    }
}

impl From<tl::ParseError> for LinkdeckError {
    fn from(err: tl::ParseError) -> Self {
        LinkdeckError::HtmlParse(err.to_string())
    }
}

/// Why a single imported record failed normalization.
///
/// Recovered locally: the reconciler records the offending record under
/// `failed` with reason `invalid` and moves on to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` is absent or empty after trimming
    #[error("link name is missing")]
    MissingName,

    /// `environments.production` is absent or empty after trimming
    #[error("production URL is missing")]
    MissingProductionUrl,
}
