//! Error types for the calculator core.

use genre_catalog::CatalogError;
use thiserror::Error;

/// Result type for calculator operations that touch storage or configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors at the calculator's fallible edges.
///
/// Commands never return these; persistence failures inside a command are
/// logged and swallowed by the session.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the backing store failed.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted JSON could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The reference catalog failed to load.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
