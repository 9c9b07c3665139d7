//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Failure of a whole-directory refresh. The previous snapshot stays in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A single lookup (city mood, area code) failed. Enrichment absorbs these.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Contacts error: {0}")]
    Contacts(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
